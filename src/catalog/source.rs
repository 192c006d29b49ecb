//! Catalog source seam and the TTL-cached wrapper around it.
//!
//! Fetching is done by an external collaborator implementing
//! [`CatalogSource`]; this crate performs no network I/O.

use tracing::{debug, info};

use super::feed::NeoFeed;
use super::record::CatalogEntry;
use crate::cache::{Clock, SystemClock, TtlCache};
use crate::config::CatalogConfig;
use crate::error::ImpactError;

/// Which slice of the catalog to request.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FeedQuery {
    /// Objects making their close approach today.
    Today,
    /// Objects approaching between two dates (`YYYY-MM-DD`, inclusive).
    Range { start_date: String, end_date: String },
}

impl FeedQuery {
    pub fn range(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self::Range {
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    /// Request parameters without the credential. Used as the cache key.
    pub fn cache_key(&self) -> String {
        match self {
            FeedQuery::Today => "feed/today?detailed=false".to_string(),
            FeedQuery::Range {
                start_date,
                end_date,
            } => format!("feed?start_date={start_date}&end_date={end_date}&detailed=false"),
        }
    }

    /// Full request URL including the API key.
    pub fn url(&self, config: &CatalogConfig) -> String {
        format!(
            "{}/{}&api_key={}",
            config.base_url.trim_end_matches('/'),
            self.cache_key(),
            config.api_key
        )
    }
}

/// Anything that can deliver a raw feed document.
///
/// Transport failures must come back as [`ImpactError::DataUnavailable`].
pub trait CatalogSource {
    fn fetch(&self, query: &FeedQuery, config: &CatalogConfig) -> Result<String, ImpactError>;
}

/// Source serving a fixed document, e.g. a feed saved to disk.
#[derive(Clone, Debug)]
pub struct StaticCatalog {
    body: String,
}

impl StaticCatalog {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ImpactError> {
        Ok(Self::new(std::fs::read_to_string(path)?))
    }
}

impl CatalogSource for StaticCatalog {
    fn fetch(&self, _query: &FeedQuery, _config: &CatalogConfig) -> Result<String, ImpactError> {
        Ok(self.body.clone())
    }
}

/// Source wrapper that keeps parsed feeds for `config.cache_ttl`.
pub struct CachedCatalog<S, C = SystemClock> {
    source: S,
    config: CatalogConfig,
    cache: TtlCache<String, NeoFeed, C>,
}

impl<S: CatalogSource> CachedCatalog<S, SystemClock> {
    pub fn new(source: S, config: CatalogConfig) -> Self {
        Self::with_clock(source, config, SystemClock)
    }
}

impl<S: CatalogSource, C: Clock> CachedCatalog<S, C> {
    pub fn with_clock(source: S, config: CatalogConfig, clock: C) -> Self {
        let cache = TtlCache::with_clock(config.cache_ttl, clock);
        Self {
            source,
            config,
            cache,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Feed for `query`, fetched and parsed only on a cache miss.
    ///
    /// Failed fetches and unparseable documents are not cached.
    pub fn feed(&mut self, query: &FeedQuery) -> Result<NeoFeed, ImpactError> {
        let key = query.cache_key();
        if let Some(feed) = self.cache.get(&key) {
            debug!(key = %key, "catalog cache hit");
            return Ok(feed);
        }

        let body = self.source.fetch(query, &self.config)?;
        let feed = NeoFeed::from_json(&body)?;
        info!(key = %key, records = feed.len(), "fetched catalog feed");
        self.cache.insert(key, feed.clone());
        Ok(feed)
    }

    /// The configured number of closest objects for `query`.
    pub fn candidates(&mut self, query: &FeedQuery) -> Result<Vec<CatalogEntry>, ImpactError> {
        let limit = self.config.max_candidates;
        Ok(self.feed(query)?.candidates(limit))
    }

    /// Forget every cached feed.
    pub fn invalidate(&mut self) {
        self.cache.clear();
    }
}

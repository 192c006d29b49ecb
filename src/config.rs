//! Engine and catalog configuration.
//!
//! Both are plain values injected by the caller; nothing here reads global
//! state except the explicit `CatalogConfig::from_env` constructor.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consequence::CraterScaling;
use crate::error::{ImpactError, require_positive};
use crate::types::{DEFAULT_DENSITY_KG_M3, EARTH_RADIUS_KM};

/// Tunables of the physics pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Assumed bulk density (kg/m³) for catalog objects.
    pub density_kg_m3: f64,
    /// Geocentric miss distances strictly below this are impacts (km).
    /// Defaults to Earth's mean radius.
    pub impact_threshold_km: f64,
    /// Crater scaling law.
    pub crater: CraterScaling,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            density_kg_m3: DEFAULT_DENSITY_KG_M3,
            impact_threshold_km: EARTH_RADIUS_KM,
            crater: CraterScaling::default(),
        }
    }
}

impl EngineConfig {
    pub fn with_density(mut self, density_kg_m3: f64) -> Self {
        self.density_kg_m3 = density_kg_m3;
        self
    }

    pub fn with_impact_threshold(mut self, impact_threshold_km: f64) -> Self {
        self.impact_threshold_km = impact_threshold_km;
        self
    }

    pub fn with_crater_scaling(mut self, crater: CraterScaling) -> Self {
        self.crater = crater;
        self
    }

    pub fn validate(&self) -> Result<(), ImpactError> {
        require_positive("density_kg_m3", self.density_kg_m3)?;
        require_positive("impact_threshold_km", self.impact_threshold_km)?;
        self.crater.validate()
    }

    /// Parse and validate a JSON configuration document. Missing keys keep
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self, ImpactError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

/// Public demo key accepted by the NeoWs API.
pub const DEMO_API_KEY: &str = "DEMO_KEY";

/// Default NeoWs endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.nasa.gov/neo/rest/v1";

/// Settings for the catalog collaborator.
#[derive(Clone, PartialEq)]
pub struct CatalogConfig {
    pub api_key: String,
    pub base_url: String,
    /// How long a fetched feed stays valid in the cache.
    pub cache_ttl: Duration,
    /// Number of closest objects offered for selection.
    pub max_candidates: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_key: DEMO_API_KEY.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_ttl: Duration::from_secs(10 * 60),
            max_candidates: 20,
        }
    }
}

// Keeps the API key out of logs.
impl fmt::Debug for CatalogConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("cache_ttl", &self.cache_ttl)
            .field("max_candidates", &self.max_candidates)
            .finish()
    }
}

impl CatalogConfig {
    /// Read `NEO_API_KEY` and `NEO_API_BASE_URL`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            api_key: lookup("NEO_API_KEY")
                .filter(|key| !key.is_empty())
                .unwrap_or(defaults.api_key),
            base_url: lookup("NEO_API_BASE_URL")
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.base_url),
            ..defaults
        }
    }

    pub fn with_cache_ttl(mut self, cache_ttl: Duration) -> Self {
        self.cache_ttl = cache_ttl;
        self
    }

    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates;
        self
    }
}

//! Catalog feed envelope: records grouped by close-approach date.

use std::io::Read;

use serde_json::Value;
use tracing::debug;

use super::record::{CatalogEntry, NeoRecord};
use crate::error::ImpactError;

/// Parsed feed document.
#[derive(Clone, Debug, PartialEq)]
pub struct NeoFeed {
    /// Count reported by the catalog, if any.
    pub element_count: Option<u64>,
    records: Vec<NeoRecord>,
}

impl NeoFeed {
    /// Parse `{ "near_earth_objects": { "<date>": [record, ...] } }`.
    ///
    /// A document without that map is reported as unavailable data rather
    /// than an empty feed.
    pub fn from_json(json: &str) -> Result<Self, ImpactError> {
        let document: Value = serde_json::from_str(json)?;
        Self::from_value(document)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, ImpactError> {
        let document: Value = serde_json::from_reader(reader)?;
        Self::from_value(document)
    }

    pub fn from_value(document: Value) -> Result<Self, ImpactError> {
        let Some(by_date) = document.get("near_earth_objects").and_then(Value::as_object) else {
            return Err(ImpactError::DataUnavailable(
                "feed has no near_earth_objects map".to_string(),
            ));
        };

        let records: Vec<NeoRecord> = by_date
            .values()
            .filter_map(Value::as_array)
            .flatten()
            .cloned()
            .map(NeoRecord::new)
            .collect();

        debug!(dates = by_date.len(), records = records.len(), "parsed catalog feed");

        Ok(Self {
            element_count: document.get("element_count").and_then(Value::as_u64),
            records,
        })
    }

    pub fn from_records(records: Vec<NeoRecord>) -> Self {
        Self {
            element_count: None,
            records,
        }
    }

    pub fn records(&self) -> &[NeoRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every record translated into an entry, in feed order.
    pub fn entries(&self) -> Vec<CatalogEntry> {
        self.records.iter().map(NeoRecord::to_entry).collect()
    }

    /// The `limit` closest objects, ordered by ascending miss distance.
    ///
    /// Ties keep feed order.
    pub fn candidates(&self, limit: usize) -> Vec<CatalogEntry> {
        let mut entries = self.entries();
        entries.sort_by(|a, b| a.miss_distance_km.total_cmp(&b.miss_distance_km));
        entries.truncate(limit);
        entries
    }
}

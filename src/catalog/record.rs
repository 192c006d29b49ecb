//! Single catalog record and its translation into a strict observation.
//!
//! Catalog records vary in completeness. Every numeric field is read through
//! an optional accessor; anything absent, non-numeric, negative or non-finite
//! defaults to zero and is listed in [`CatalogEntry::missing`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::config::EngineConfig;
use crate::error::ImpactError;
use crate::pipeline::{ImpactAssessment, assess};
use crate::types::ImpactObservation;

const DIAMETER_MIN: &str = "/estimated_diameter/kilometers/estimated_diameter_min";
const DIAMETER_MAX: &str = "/estimated_diameter/kilometers/estimated_diameter_max";
const VELOCITY: &str = "/close_approach_data/0/relative_velocity/kilometers_per_second";
const MISS_DISTANCE: &str = "/close_approach_data/0/miss_distance/kilometers";
const APPROACH_DATE: &str = "/close_approach_data/0/close_approach_date";
const HAZARDOUS: &str = "/is_potentially_hazardous_asteroid";

/// Numeric catalog fields that can be missing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CatalogField {
    DiameterMin,
    DiameterMax,
    Velocity,
    MissDistance,
}

/// Read a JSON number or numeric string.
fn lenient_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    (number.is_finite() && number >= 0.0).then_some(number)
}

/// Loosely-structured record as delivered by the catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct NeoRecord(Value);

impl NeoRecord {
    pub fn new(raw: Value) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> &Value {
        &self.0
    }

    /// Object identifier; numeric ids are rendered as text.
    pub fn id(&self) -> Option<String> {
        match self.0.get("id")? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn name(&self) -> Option<String> {
        self.0.get("name")?.as_str().map(str::to_string)
    }

    fn number(&self, pointer: &str) -> Option<f64> {
        self.0.pointer(pointer).and_then(lenient_number)
    }

    pub fn diameter_min_km(&self) -> Option<f64> {
        self.number(DIAMETER_MIN)
    }

    pub fn diameter_max_km(&self) -> Option<f64> {
        self.number(DIAMETER_MAX)
    }

    /// Relative velocity from the first close-approach record.
    pub fn velocity_km_per_sec(&self) -> Option<f64> {
        self.number(VELOCITY)
    }

    /// Miss distance from the first close-approach record.
    pub fn miss_distance_km(&self) -> Option<f64> {
        self.number(MISS_DISTANCE)
    }

    pub fn close_approach_date(&self) -> Option<String> {
        self.0
            .pointer(APPROACH_DATE)?
            .as_str()
            .map(str::to_string)
    }

    pub fn is_potentially_hazardous(&self) -> bool {
        self.0
            .pointer(HAZARDOUS)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Translate into a strict entry, defaulting missing fields to zero.
    pub fn to_entry(&self) -> CatalogEntry {
        let mut missing = Vec::new();
        let mut field = |value: Option<f64>, which: CatalogField| {
            value.unwrap_or_else(|| {
                missing.push(which);
                0.0
            })
        };

        let diameter_min = field(self.diameter_min_km(), CatalogField::DiameterMin);
        let diameter_max = field(self.diameter_max_km(), CatalogField::DiameterMax);
        let velocity_km_per_sec = field(self.velocity_km_per_sec(), CatalogField::Velocity);
        let miss_distance_km = field(self.miss_distance_km(), CatalogField::MissDistance);

        let id = self.id().unwrap_or_default();
        let name = self.name().unwrap_or_else(|| id.clone());

        if !missing.is_empty() {
            warn!(id = %id, ?missing, "incomplete catalog record, defaulting to zero");
        }

        CatalogEntry {
            id,
            name,
            diameter_km: (diameter_min + diameter_max) / 2.0,
            velocity_km_per_sec,
            miss_distance_km,
            close_approach_date: self.close_approach_date(),
            is_potentially_hazardous: self.is_potentially_hazardous(),
            missing,
        }
    }
}

/// Catalog object reduced to the values the engine needs.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    /// Mean of the reported minimum and maximum diameter (km).
    pub diameter_km: f64,
    pub velocity_km_per_sec: f64,
    pub miss_distance_km: f64,
    pub close_approach_date: Option<String>,
    pub is_potentially_hazardous: bool,
    /// Fields that were absent or unusable and defaulted to zero.
    pub missing: Vec<CatalogField>,
}

impl CatalogEntry {
    /// True when every numeric field came from the record itself.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Strict observation for the physics pipeline.
    pub fn observation(&self, density_kg_m3: f64) -> Result<ImpactObservation, ImpactError> {
        ImpactObservation::with_density(
            self.diameter_km,
            self.velocity_km_per_sec,
            self.miss_distance_km,
            density_kg_m3,
        )
    }

    /// Run the pipeline for this entry, carrying over the defaulted fields.
    pub fn assess(&self, config: &EngineConfig) -> Result<ImpactAssessment, ImpactError> {
        let observation = self.observation(config.density_kg_m3)?;
        Ok(assess(&observation, config)?.with_defaulted_fields(self.missing.clone()))
    }
}

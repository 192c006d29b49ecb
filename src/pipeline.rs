//! Full impact assessment: estimation, consequences, classification.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::CatalogField;
use crate::config::EngineConfig;
use crate::consequence::{ConsequenceReport, assess_consequences};
use crate::error::ImpactError;
use crate::estimator::estimate;
use crate::severity::{SeverityAssessment, classify};
use crate::types::{ImpactEnergy, ImpactObservation};

/// Everything derived from a single observation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactAssessment {
    pub observation: ImpactObservation,
    pub energy: ImpactEnergy,
    pub consequences: ConsequenceReport,
    pub severity: SeverityAssessment,
    /// Catalog fields that were absent and defaulted to zero. A result with
    /// defaulted fields must not be read as a genuine impact or flyby.
    #[serde(default)]
    pub defaulted_fields: Vec<CatalogField>,
}

impl ImpactAssessment {
    /// True when every input came from the catalog rather than a default.
    pub fn is_complete(&self) -> bool {
        self.defaulted_fields.is_empty()
    }

    /// Mark the inputs that were defaulted.
    pub fn with_defaulted_fields(mut self, fields: Vec<CatalogField>) -> Self {
        self.defaulted_fields = fields;
        self
    }
}

/// Run the three stages over one observation.
///
/// Rejects invalid observations and configurations before any arithmetic so
/// NaN or infinite values never reach the classifier.
pub fn assess(
    observation: &ImpactObservation,
    config: &EngineConfig,
) -> Result<ImpactAssessment, ImpactError> {
    observation.validate()?;
    config.validate()?;

    let energy = estimate(observation);
    let consequences = assess_consequences(observation, &energy, &config.crater);
    let severity = classify(
        observation.miss_distance_km,
        energy.yield_kilotons_tnt,
        config.impact_threshold_km,
    );

    if severity.is_impact {
        info!(
            category = %severity.category,
            yield_mt = energy.yield_megatons_tnt,
            crater_km = consequences.crater_diameter_km(),
            "impact simulated"
        );
    } else {
        debug!(
            miss_distance_km = observation.miss_distance_km,
            "flyby, no impact"
        );
    }

    Ok(ImpactAssessment {
        observation: *observation,
        energy,
        consequences,
        severity,
        defaulted_fields: Vec::new(),
    })
}

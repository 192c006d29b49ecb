//! Consequence calculation: TNT-equivalent yield, crater size and
//! human-scale size comparisons.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ImpactError, require_positive};
use crate::estimator::sphere_volume;
use crate::types::{
    ImpactEnergy, ImpactObservation, JOULES_PER_KILOTON_TNT, JOULES_PER_MEGATON_TNT, KM_TO_METERS,
};

/// Energy expressed in TNT equivalent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TntYield {
    pub kilotons: f64,
    pub megatons: f64,
}

/// Convert joules to kilotons and megatons of TNT.
pub fn to_yield(energy_joules: f64) -> TntYield {
    TntYield {
        kilotons: energy_joules / JOULES_PER_KILOTON_TNT,
        megatons: energy_joules / JOULES_PER_MEGATON_TNT,
    }
}

/// Power-law crater scaling, D = k · W^p.
///
/// Calibrated in kilotons of TNT: `diameter_m` converts its joule input to
/// kilotons before applying the law. The default is the explosion-cratering
/// yield law D[m] = 70 · W[kt]^(1/3.4), valid from about 1 kt to 1e10 kt.
/// Outside that range the law is still evaluated; zero energy gives zero.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CraterScaling {
    /// Crater diameter (m) of a 1 kt event.
    pub coefficient_m: f64,
    /// Yield exponent.
    pub exponent: f64,
}

impl Default for CraterScaling {
    fn default() -> Self {
        Self {
            coefficient_m: 70.0,
            exponent: 1.0 / 3.4,
        }
    }
}

impl CraterScaling {
    /// Lower end of the calibrated range (kt).
    pub const MIN_CALIBRATED_KT: f64 = 1.0;
    /// Upper end of the calibrated range (kt).
    pub const MAX_CALIBRATED_KT: f64 = 1e10;

    pub fn validate(&self) -> Result<(), ImpactError> {
        require_positive("crater.coefficient_m", self.coefficient_m)?;
        require_positive("crater.exponent", self.exponent)?;
        Ok(())
    }

    /// Final crater diameter (m) for an impact releasing `energy_joules`.
    pub fn diameter_m(&self, energy_joules: f64) -> f64 {
        let kilotons = to_yield(energy_joules).kilotons;
        if kilotons <= 0.0 {
            return 0.0;
        }
        self.coefficient_m * kilotons.powf(self.exponent)
    }

    /// Whether a yield falls inside the range the law was calibrated on.
    pub fn is_calibrated_for(&self, kilotons: f64) -> bool {
        (Self::MIN_CALIBRATED_KT..=Self::MAX_CALIBRATED_KT).contains(&kilotons)
    }
}

/// Crater diameter (m) using the default calibration.
pub fn crater_diameter(energy_joules: f64) -> f64 {
    CraterScaling::default().diameter_m(energy_joules)
}

/// What a reference object is measured by.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Measure {
    /// Length in meters; compared against the impactor diameter.
    Length(f64),
    /// Volume in m³; compared against the impactor volume.
    Volume(f64),
}

/// A familiar object used to put the impactor's size in perspective.
#[derive(Clone, Copy, Debug)]
pub struct ReferenceObject {
    /// Key in the comparison map.
    pub key: &'static str,
    /// Display name.
    pub label: &'static str,
    pub measure: Measure,
}

/// Fixed comparison table.
pub const REFERENCE_OBJECTS: &[ReferenceObject] = &[
    ReferenceObject {
        key: "footballFields",
        label: "American football field",
        measure: Measure::Length(91.44),
    },
    ReferenceObject {
        key: "eiffelTowers",
        label: "Eiffel Tower",
        measure: Measure::Length(330.0),
    },
    ReferenceObject {
        key: "empireStateBuildings",
        label: "Empire State Building",
        measure: Measure::Length(443.0),
    },
    ReferenceObject {
        key: "titanics",
        label: "RMS Titanic",
        measure: Measure::Length(269.0),
    },
    ReferenceObject {
        key: "olympicPools",
        label: "Olympic swimming pool",
        measure: Measure::Volume(2500.0),
    },
];

/// Ratios of the impactor's size to each reference object.
///
/// Volume references are compared against the sphere volume, never the
/// diameter.
pub fn size_comparisons(diameter_km: f64) -> BTreeMap<String, f64> {
    let diameter_m = diameter_km * KM_TO_METERS;
    let volume_m3 = sphere_volume(diameter_m);

    REFERENCE_OBJECTS
        .iter()
        .map(|reference| {
            let ratio = match reference.measure {
                Measure::Length(length_m) => diameter_m / length_m,
                Measure::Volume(volume_ref) => volume_m3 / volume_ref,
            };
            (reference.key.to_string(), ratio)
        })
        .collect()
}

/// Crater size and size comparisons for one impactor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsequenceReport {
    pub crater_diameter_meters: f64,
    pub size_comparisons: BTreeMap<String, f64>,
}

impl ConsequenceReport {
    /// Crater diameter in km.
    pub fn crater_diameter_km(&self) -> f64 {
        self.crater_diameter_meters / KM_TO_METERS
    }

    /// Look up a single comparison ratio by key.
    pub fn comparison(&self, key: &str) -> Option<f64> {
        self.size_comparisons.get(key).copied()
    }
}

/// Derive the consequence report from an observation and its energy.
pub fn assess_consequences(
    observation: &ImpactObservation,
    energy: &ImpactEnergy,
    scaling: &CraterScaling,
) -> ConsequenceReport {
    let crater_diameter_meters = scaling.diameter_m(energy.energy_joules);
    if energy.yield_kilotons_tnt > 0.0 && !scaling.is_calibrated_for(energy.yield_kilotons_tnt) {
        debug!(
            yield_kt = energy.yield_kilotons_tnt,
            "yield outside crater-scaling calibration range"
        );
    }

    ConsequenceReport {
        crater_diameter_meters,
        size_comparisons: size_comparisons(observation.diameter_km),
    }
}

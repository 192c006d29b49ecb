//! Threat classification from miss distance and impact yield.
//!
//! Categories, in increasing severity:
//! - Safe flyby: no impact, or an impact releasing no energy
//! - Minor airburst: any positive yield up to 1e5 kt
//! - Regional: above 1e5 kt
//! - Continental: above 1e7 kt
//! - Extinction: above 1e9 kt

use std::fmt;

use serde::{Deserialize, Serialize};

/// Discrete threat category, ordered by increasing severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThreatCategory {
    SafeFlyby,
    MinorAirburst,
    Regional,
    Continental,
    Extinction,
}

impl ThreatCategory {
    /// Every category in ascending order.
    pub const ALL: [ThreatCategory; 5] = [
        ThreatCategory::SafeFlyby,
        ThreatCategory::MinorAirburst,
        ThreatCategory::Regional,
        ThreatCategory::Continental,
        ThreatCategory::Extinction,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatCategory::SafeFlyby => "SAFE_FLYBY",
            ThreatCategory::MinorAirburst => "MINOR_AIRBURST",
            ThreatCategory::Regional => "REGIONAL",
            ThreatCategory::Continental => "CONTINENTAL",
            ThreatCategory::Extinction => "EXTINCTION",
        }
    }

    /// Fixed human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            ThreatCategory::SafeFlyby => {
                "The object passes Earth safely. No impact consequences expected."
            }
            ThreatCategory::MinorAirburst => {
                "Small impactor. Likely to break up in the atmosphere as an airburst \
                 with local damage at most."
            }
            ThreatCategory::Regional => {
                "Regional devastation. Blast and thermal effects destroy cities across \
                 hundreds of kilometers."
            }
            ThreatCategory::Continental => {
                "Continental-scale catastrophe. Widespread destruction, firestorms and \
                 severe global climate effects."
            }
            ThreatCategory::Extinction => {
                "Global catastrophe. Energy comparable to mass-extinction events; \
                 civilization-ending consequences."
            }
        }
    }
}

impl fmt::Display for ThreatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Yield lower bounds (kt), ascending. A category applies only when the yield
/// strictly exceeds its bound; a yield exactly on a bound stays in the
/// category below.
pub const YIELD_THRESHOLDS_KT: [(f64, ThreatCategory); 4] = [
    (0.0, ThreatCategory::MinorAirburst),
    (1e5, ThreatCategory::Regional),
    (1e7, ThreatCategory::Continental),
    (1e9, ThreatCategory::Extinction),
];

/// Result of classifying one encounter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeverityAssessment {
    pub category: ThreatCategory,
    pub is_impact: bool,
    pub description: String,
}

/// Category for an impact of the given yield.
///
/// Returns `SafeFlyby` when the yield exceeds no bound (zero energy).
pub fn category_for_yield(yield_kilotons: f64) -> ThreatCategory {
    YIELD_THRESHOLDS_KT
        .iter()
        .rev()
        .find(|(bound, _)| yield_kilotons > *bound)
        .map(|(_, category)| *category)
        .unwrap_or(ThreatCategory::SafeFlyby)
}

/// Classify an encounter.
///
/// # Arguments
/// * `miss_distance_km` - Closest approach distance (km)
/// * `yield_kilotons` - Impact yield (kt TNT)
/// * `impact_threshold_km` - Miss distances strictly below this count as an impact
pub fn classify(
    miss_distance_km: f64,
    yield_kilotons: f64,
    impact_threshold_km: f64,
) -> SeverityAssessment {
    let is_impact = miss_distance_km < impact_threshold_km;
    let category = if is_impact {
        category_for_yield(yield_kilotons)
    } else {
        ThreatCategory::SafeFlyby
    };

    SeverityAssessment {
        category,
        is_impact,
        description: category.description().to_string(),
    }
}

impl SeverityAssessment {
    /// Returns true if the encounter causes any damage.
    pub fn is_threat(&self) -> bool {
        self.category > ThreatCategory::SafeFlyby
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EARTH_RADIUS_KM;

    #[test]
    fn test_categories_are_ordered() {
        for pair in ThreatCategory::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{} should rank below {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_flyby_ignores_yield() {
        // 1e12 Mt, far from Earth
        let result = classify(384_400.0, 1e15, EARTH_RADIUS_KM);
        assert!(!result.is_impact);
        assert_eq!(result.category, ThreatCategory::SafeFlyby);
        assert!(!result.is_threat());
    }

    #[test]
    fn test_miss_distance_on_threshold_is_not_impact() {
        let result = classify(EARTH_RADIUS_KM, 1e8, EARTH_RADIUS_KM);
        assert!(!result.is_impact);
    }

    #[test]
    fn test_impact_categories() {
        let cases = [
            (0.0, ThreatCategory::SafeFlyby),
            (15.0, ThreatCategory::MinorAirburst),
            (5e5, ThreatCategory::Regional),
            (7.5e7, ThreatCategory::Continental),
            (1e10, ThreatCategory::Extinction),
        ];
        for (yield_kt, expected) in cases {
            let result = classify(0.0, yield_kt, EARTH_RADIUS_KM);
            assert!(result.is_impact);
            assert_eq!(result.category, expected, "yield {yield_kt} kt");
        }
    }

    #[test]
    fn test_boundary_yield_stays_in_lower_category() {
        assert_eq!(category_for_yield(1e5), ThreatCategory::MinorAirburst);
        assert_eq!(category_for_yield(1e7), ThreatCategory::Regional);
        assert_eq!(category_for_yield(1e9), ThreatCategory::Continental);
        assert_eq!(category_for_yield(1.000_001e9), ThreatCategory::Extinction);
    }

    #[test]
    fn test_threshold_is_a_parameter() {
        // 10,000 km miss: no impact against the radius, impact against the diameter
        assert!(!classify(10_000.0, 1e6, 6371.0).is_impact);
        assert!(classify(10_000.0, 1e6, 12_742.0).is_impact);
    }

    #[test]
    fn test_description_matches_category() {
        let result = classify(100.0, 5e5, EARTH_RADIUS_KM);
        assert_eq!(result.description, ThreatCategory::Regional.description());
    }

    #[test]
    fn test_category_json_names() {
        let json = serde_json::to_string(&ThreatCategory::MinorAirburst).expect("serializable");
        assert_eq!(json, "\"MINOR_AIRBURST\"");
        let back: ThreatCategory = serde_json::from_str("\"EXTINCTION\"").expect("known name");
        assert_eq!(back, ThreatCategory::Extinction);
    }
}

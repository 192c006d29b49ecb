//! Test utilities for impact estimation tests.
//!
//! Provides fixtures for observations and catalog documents, and assertions
//! for the scaling laws the engine must obey.

use serde_json::{Value, json};

use crate::types::ImpactObservation;

/// Fixtures for creating test observations and catalog data.
pub mod fixtures {
    use super::*;

    /// 1 km stony body at 20 km/s striking Earth.
    pub fn kilometer_impactor() -> ImpactObservation {
        ImpactObservation {
            diameter_km: 1.0,
            velocity_km_per_sec: 20.0,
            miss_distance_km: 0.0,
            density_kg_m3: 3000.0,
        }
    }

    /// Same body passing at lunar distance.
    pub fn distant_flyby() -> ImpactObservation {
        ImpactObservation {
            miss_distance_km: 384_400.0,
            ..kilometer_impactor()
        }
    }

    /// A catalog record in NeoWs shape. Velocity and miss distance are
    /// strings, as the catalog delivers them.
    pub fn neo_record_json(
        id: &str,
        diameter_min_km: f64,
        diameter_max_km: f64,
        velocity_km_s: &str,
        miss_distance_km: &str,
    ) -> Value {
        json!({
            "id": id,
            "name": format!("({id})"),
            "estimated_diameter": {
                "kilometers": {
                    "estimated_diameter_min": diameter_min_km,
                    "estimated_diameter_max": diameter_max_km
                }
            },
            "is_potentially_hazardous_asteroid": false,
            "close_approach_data": [{
                "close_approach_date": "2024-01-01",
                "relative_velocity": {"kilometers_per_second": velocity_km_s},
                "miss_distance": {"kilometers": miss_distance_km},
                "orbiting_body": "Earth"
            }]
        })
    }

    /// Feed with four objects over two dates. "impactor" (1 km, 20 km/s)
    /// passes inside Earth's radius; the others miss.
    pub fn neo_feed_json() -> Value {
        json!({
            "element_count": 4,
            "near_earth_objects": {
                "2024-01-01": [
                    neo_record_json("far", 0.05, 0.11, "8.1", "7000000.0"),
                    neo_record_json("impactor", 0.5, 1.5, "20.0", "3000.0"),
                ],
                "2024-01-02": [
                    neo_record_json("mid", 0.01, 0.03, "15.2", "384400.0"),
                    neo_record_json("near", 0.1, 0.2, "11.0", "50000.0"),
                ]
            }
        })
    }
}

/// Assertions for verifying scaling invariants.
pub mod assertions {
    /// Assert `actual / reference` equals `factor` within relative tolerance.
    ///
    /// # Panics
    /// Panics if the ratio is off by more than `tolerance`.
    pub fn assert_scales_by(reference: f64, actual: f64, factor: f64, tolerance: f64) {
        let ratio = actual / reference;
        let error = ((ratio - factor) / factor).abs();
        assert!(
            error <= tolerance,
            "Expected scaling by {factor}, got {ratio:.6e} (reference={reference:.6e}, actual={actual:.6e})"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kilometer_impactor_is_valid() {
        assert!(fixtures::kilometer_impactor().validate().is_ok());
        assert!(fixtures::distant_flyby().validate().is_ok());
    }

    #[test]
    fn test_feed_fixture_shape() {
        let feed = fixtures::neo_feed_json();
        assert_eq!(feed["element_count"], 4);
        assert_eq!(feed["near_earth_objects"]["2024-01-01"][1]["id"], "impactor");
    }

    #[test]
    fn test_assert_scales_by_accepts_exact() {
        assertions::assert_scales_by(2.0, 8.0, 4.0, 1e-12);
    }

    #[test]
    #[should_panic(expected = "Expected scaling by 4")]
    fn test_assert_scales_by_rejects_wrong_factor() {
        assertions::assert_scales_by(2.0, 6.0, 4.0, 1e-6);
    }
}

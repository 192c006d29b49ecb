//! Property-based tests for the impact pipeline using proptest.
//!
//! These tests verify scaling and ordering invariants across a wide range of
//! impactor sizes, speeds and miss distances.

use proptest::prelude::*;

use crate::config::EngineConfig;
use crate::consequence::{Measure, REFERENCE_OBJECTS, size_comparisons};
use crate::estimator::{kinetic_energy, sphere_mass};
use crate::pipeline::assess;
use crate::severity::{ThreatCategory, category_for_yield, classify};
use crate::test_utils::assertions;
use crate::types::{EARTH_RADIUS_KM, ImpactObservation};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Mass and energy are non-negative and never decrease as diameter or
    /// velocity grows.
    #[test]
    fn prop_mass_and_energy_monotonic(
        diameter_km in 0.0f64..50.0,
        extra_km in 0.0f64..10.0,
        velocity in 0.0f64..80.0,
        extra_velocity in 0.0f64..20.0,
    ) {
        let m1 = sphere_mass(diameter_km, 3000.0);
        let m2 = sphere_mass(diameter_km + extra_km, 3000.0);
        prop_assert!(m1 >= 0.0);
        prop_assert!(m2 >= m1);

        let e1 = kinetic_energy(m1, velocity);
        let e2 = kinetic_energy(m1, velocity + extra_velocity);
        prop_assert!(e1 >= 0.0);
        prop_assert!(e2 >= e1);
    }

    /// E(d, v) = E(d, v') · (v/v')²
    #[test]
    fn prop_energy_quadratic_in_velocity(
        diameter_km in 0.001f64..20.0,
        v in 0.1f64..80.0,
        v_ref in 0.1f64..80.0,
    ) {
        let mass = sphere_mass(diameter_km, 3000.0);
        let e = kinetic_energy(mass, v);
        let e_ref = kinetic_energy(mass, v_ref);
        let expected = e_ref * (v / v_ref).powi(2);
        prop_assert!(((e - expected) / expected).abs() < 1e-9);
    }

    /// For impacts, more yield never lowers the category.
    #[test]
    fn prop_classification_monotonic(
        yield_kt in 0.0f64..1e12,
        extra_kt in 0.0f64..1e12,
    ) {
        let low = classify(0.0, yield_kt, EARTH_RADIUS_KM);
        let high = classify(0.0, yield_kt + extra_kt, EARTH_RADIUS_KM);
        prop_assert!(low.is_impact && high.is_impact);
        prop_assert!(high.category >= low.category);
        prop_assert_eq!(low.category, category_for_yield(yield_kt));
    }

    /// Non-impacts are always safe, whatever the yield.
    #[test]
    fn prop_flyby_always_safe(
        miss_distance_km in EARTH_RADIUS_KM..1e9,
        yield_kt in 0.0f64..1e18,
    ) {
        let result = classify(miss_distance_km, yield_kt, EARTH_RADIUS_KM);
        prop_assert!(!result.is_impact);
        prop_assert_eq!(result.category, ThreatCategory::SafeFlyby);
    }

    /// Doubling the diameter doubles length comparisons and multiplies
    /// volume comparisons by eight.
    #[test]
    fn prop_size_comparisons_scale(diameter_km in 0.001f64..100.0) {
        let base = size_comparisons(diameter_km);
        let doubled = size_comparisons(2.0 * diameter_km);

        for reference in REFERENCE_OBJECTS {
            let factor = match reference.measure {
                Measure::Length(_) => 2.0,
                Measure::Volume(_) => 8.0,
            };
            assertions::assert_scales_by(
                base[reference.key],
                doubled[reference.key],
                factor,
                1e-9,
            );
        }
    }

    /// Every derived quantity of a valid observation is finite and
    /// non-negative, and repeated runs agree bit for bit.
    #[test]
    fn prop_pipeline_outputs_non_negative_and_deterministic(
        diameter_km in 0.0f64..100.0,
        velocity in 0.0f64..80.0,
        miss_distance_km in 0.0f64..1e8,
    ) {
        let obs = ImpactObservation::new(diameter_km, velocity, miss_distance_km)
            .expect("generated values are in domain");
        let config = EngineConfig::default();
        let first = assess(&obs, &config).expect("valid input");
        let second = assess(&obs, &config).expect("valid input");

        for value in [
            first.energy.mass_kg,
            first.energy.energy_joules,
            first.energy.yield_kilotons_tnt,
            first.energy.yield_megatons_tnt,
            first.consequences.crater_diameter_meters,
        ] {
            prop_assert!(value.is_finite() && value >= 0.0);
        }
        prop_assert!(first.consequences.size_comparisons.values().all(|v| *v >= 0.0));
        prop_assert_eq!(first, second);
    }
}

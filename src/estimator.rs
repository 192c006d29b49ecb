//! Physical-quantity estimation: mass and kinetic energy of an impactor.
//!
//! The body is treated as a uniform sphere. Both functions are total over
//! non-negative inputs; a zero diameter or velocity simply gives zero.

use std::f64::consts::PI;

use tracing::debug;

use crate::consequence::to_yield;
use crate::types::{ImpactEnergy, ImpactObservation, KM_TO_METERS};

/// Volume of a sphere of the given diameter (m³).
pub fn sphere_volume(diameter_m: f64) -> f64 {
    let radius = diameter_m / 2.0;
    (4.0 / 3.0) * PI * radius.powi(3)
}

/// Mass of a uniform sphere.
///
/// m = (4/3)·π·r³·ρ with r in meters.
///
/// # Arguments
/// * `diameter_km` - Diameter (km), non-negative
/// * `density_kg_m3` - Bulk density (kg/m³), positive
pub fn sphere_mass(diameter_km: f64, density_kg_m3: f64) -> f64 {
    debug_assert!(diameter_km >= 0.0, "negative diameter: {diameter_km}");
    debug_assert!(density_kg_m3 >= 0.0, "negative density: {density_kg_m3}");
    sphere_volume(diameter_km * KM_TO_METERS) * density_kg_m3
}

/// Kinetic energy E = ½·m·v² (joules).
///
/// # Arguments
/// * `mass_kg` - Impactor mass (kg), non-negative
/// * `velocity_km_per_sec` - Impact speed (km/s), non-negative
pub fn kinetic_energy(mass_kg: f64, velocity_km_per_sec: f64) -> f64 {
    debug_assert!(mass_kg >= 0.0, "negative mass: {mass_kg}");
    debug_assert!(
        velocity_km_per_sec >= 0.0,
        "negative velocity: {velocity_km_per_sec}"
    );
    let v = velocity_km_per_sec * KM_TO_METERS;
    0.5 * mass_kg * v * v
}

/// Estimate mass, energy and TNT yield for an observation.
pub fn estimate(observation: &ImpactObservation) -> ImpactEnergy {
    let mass_kg = sphere_mass(observation.diameter_km, observation.density_kg_m3);
    let energy_joules = kinetic_energy(mass_kg, observation.velocity_km_per_sec);
    let tnt = to_yield(energy_joules);

    debug!(
        mass_kg,
        energy_joules,
        yield_mt = tnt.megatons,
        "estimated impactor energy"
    );

    ImpactEnergy {
        mass_kg,
        energy_joules,
        yield_kilotons_tnt: tnt.kilotons,
        yield_megatons_tnt: tnt.megatons,
    }
}

//! Core physics types and constants for impact estimation.

use serde::{Deserialize, Serialize};

use crate::error::{ImpactError, require_non_negative, require_positive};

/// Physical constants (SI units)

/// Energy released by one metric ton of TNT (joules).
///
/// Kiloton and megaton divisors are derived from this single value.
pub const JOULES_PER_TON_TNT: f64 = 4.184e9;

/// Joules per kiloton of TNT.
pub const JOULES_PER_KILOTON_TNT: f64 = JOULES_PER_TON_TNT * 1e3;

/// Joules per megaton of TNT.
pub const JOULES_PER_MEGATON_TNT: f64 = JOULES_PER_TON_TNT * 1e6;

/// Earth's mean radius (km).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Earth's mean diameter (km).
pub const EARTH_DIAMETER_KM: f64 = 2.0 * EARTH_RADIUS_KM;

/// Assumed bulk density of a stony asteroid (kg/m³).
pub const DEFAULT_DENSITY_KG_M3: f64 = 3000.0;

/// Kilometers to meters
pub const KM_TO_METERS: f64 = 1000.0;

/// Observational parameters of a single near-Earth object.
///
/// Built from a catalog record; immutable once constructed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactObservation {
    /// Representative diameter (km).
    pub diameter_km: f64,
    /// Relative approach speed (km/s).
    pub velocity_km_per_sec: f64,
    /// Closest approach distance from Earth's center (km).
    pub miss_distance_km: f64,
    /// Assumed bulk density (kg/m³).
    pub density_kg_m3: f64,
}

impl ImpactObservation {
    /// Create an observation with the default density, rejecting negative or
    /// non-finite values.
    pub fn new(
        diameter_km: f64,
        velocity_km_per_sec: f64,
        miss_distance_km: f64,
    ) -> Result<Self, ImpactError> {
        Self::with_density(
            diameter_km,
            velocity_km_per_sec,
            miss_distance_km,
            DEFAULT_DENSITY_KG_M3,
        )
    }

    /// Create an observation with an explicit bulk density.
    pub fn with_density(
        diameter_km: f64,
        velocity_km_per_sec: f64,
        miss_distance_km: f64,
        density_kg_m3: f64,
    ) -> Result<Self, ImpactError> {
        let observation = Self {
            diameter_km,
            velocity_km_per_sec,
            miss_distance_km,
            density_kg_m3,
        };
        observation.validate()?;
        Ok(observation)
    }

    /// Check every field against its declared domain.
    ///
    /// Needed for observations that arrive through deserialization rather
    /// than the constructors.
    pub fn validate(&self) -> Result<(), ImpactError> {
        require_non_negative("diameter_km", self.diameter_km)?;
        require_non_negative("velocity_km_per_sec", self.velocity_km_per_sec)?;
        require_non_negative("miss_distance_km", self.miss_distance_km)?;
        require_positive("density_kg_m3", self.density_kg_m3)?;
        Ok(())
    }

    /// Radius in meters
    pub fn radius_m(&self) -> f64 {
        self.diameter_km * KM_TO_METERS / 2.0
    }

    /// Velocity in m/s
    pub fn velocity_m_per_s(&self) -> f64 {
        self.velocity_km_per_sec * KM_TO_METERS
    }
}

/// Mass, kinetic energy and TNT-equivalent yield of an impactor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactEnergy {
    pub mass_kg: f64,
    pub energy_joules: f64,
    #[serde(rename = "yieldKilotonsTNT")]
    pub yield_kilotons_tnt: f64,
    #[serde(rename = "yieldMegatonsTNT")]
    pub yield_megatons_tnt: f64,
}

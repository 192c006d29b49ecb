//! NEO Impact - impact-physics and threat-classification engine
//!
//! A library crate converting near-Earth object observations into impact
//! energy, crater size, size comparisons and a severity category.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod consequence;
pub mod error;
pub mod estimator;
pub mod pipeline;
pub mod selection;
pub mod severity;
pub mod types;

pub use config::{CatalogConfig, EngineConfig};
pub use error::ImpactError;
pub use pipeline::{ImpactAssessment, assess};
pub use types::{ImpactEnergy, ImpactObservation};

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
mod proptest_impact;

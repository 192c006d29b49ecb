//! Common test utilities for integration tests.

#![allow(dead_code)]

use neo_impact::ImpactObservation;
use neo_impact::catalog::NeoFeed;

/// Saved catalog feed with five objects over two dates.
pub const SAMPLE_FEED: &str = include_str!("../data/feed_sample.json");

/// Parse the sample feed.
pub fn sample_feed() -> NeoFeed {
    NeoFeed::from_json(SAMPLE_FEED).expect("sample feed is valid")
}

/// Observation with the default density.
pub fn observation(diameter_km: f64, velocity_km_s: f64, miss_distance_km: f64) -> ImpactObservation {
    ImpactObservation::new(diameter_km, velocity_km_s, miss_distance_km)
        .expect("test observation is in domain")
}

/// Direct impact (zero miss distance).
pub fn direct_hit(diameter_km: f64, velocity_km_s: f64) -> ImpactObservation {
    observation(diameter_km, velocity_km_s, 0.0)
}

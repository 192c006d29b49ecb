//! Adapter between the external NEO catalog and the physics engine.
//!
//! Provides:
//! - Lenient access to loosely-structured catalog records
//! - Feed parsing and closest-approach candidate selection
//! - A source seam for the fetch collaborator, with a TTL cache in front

pub mod feed;
pub mod record;
pub mod source;

pub use feed::NeoFeed;
pub use record::{CatalogEntry, CatalogField, NeoRecord};
pub use source::{CachedCatalog, CatalogSource, FeedQuery, StaticCatalog};

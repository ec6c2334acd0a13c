//! Resolution of raw features into road segments: the attribute overlay
//! reader and the two feature loader variants.

pub mod attrs;
pub mod loader;

pub use attrs::{AttributeOverlay, MaxspeedRecord};
pub use loader::{FlatFileRoadLoader, IndexedRoadLoader, RoadLoader};

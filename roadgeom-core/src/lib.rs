//! Road-geometry resolution and caching layer for an offline routing engine.
//!
//! Raw map feature records are resolved into enriched [`RoadSegment`]s:
//! projected polyline, per-vertex altitude, directional travel speeds,
//! one-way/pass-through flags and routing-option tags. A path search reads
//! segments through [`RoadCache`], a bounded FIFO cache that performs at most
//! one load per resident feature id.

pub mod cache;
pub mod error;
pub mod ferry;
pub mod geom;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod store;
pub mod vehicle;

pub use cache::{FifoCache, RoadCache};
pub use error::Error;
pub use loading::{AttributeOverlay, FlatFileRoadLoader, IndexedRoadLoader, RoadLoader};
pub use model::{
    Junction, Maxspeed, RoadSegment, RoutingOption, RoutingOptionClassifier, RoutingOptions, Speed,
};
pub use store::{AltitudeTable, FeatureMetadata, FeatureRecord, MapContainer, MapRegistry};
pub use vehicle::{HighwayType, SharedVehicleModel, SpeedParams, VehicleModel};

/// Feature identifier inside one map container.
pub type FeatureId = u32;

/// Classifier type id attached to a feature.
pub type SemanticType = u32;

/// Junction altitude in meters above sea level.
pub type Altitude = i16;

/// Altitude attached to junctions when no altitude profile is available.
pub const DEFAULT_ALTITUDE: Altitude = 0;

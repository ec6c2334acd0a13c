//! Convenient re-exports for downstream path-search and tooling code.

pub use crate::cache::{FifoCache, RoadCache};
pub use crate::error::Error;
pub use crate::ferry::ferry_duration_hours;
pub use crate::loading::{
    AttributeOverlay, FlatFileRoadLoader, IndexedRoadLoader, MaxspeedRecord, RoadLoader,
};
pub use crate::model::{
    Junction, Maxspeed, RoadSegment, RoutingOption, RoutingOptionClassifier, RoutingOptions, Speed,
};
pub use crate::store::{
    AltitudeRecord, AltitudeTable, FeatureMetadata, FeatureRecord, MapContainer, MapRegistry,
    section,
};
pub use crate::vehicle::{HighwayType, SharedVehicleModel, SpeedParams, VehicleModel};
pub use crate::{Altitude, DEFAULT_ALTITUDE, FeatureId, SemanticType};

//! Feature storage: map containers, the multi-map registry and the optional
//! altitude section.

pub mod altitude;
pub mod container;

pub use altitude::{AltitudeRecord, AltitudeTable};
pub use container::{FeatureMetadata, FeatureRecord, MapContainer, MapRegistry, section};

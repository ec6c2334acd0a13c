//! Road segment model and its value types.

pub mod options;
pub mod segment;
pub mod speed;

pub use options::{RoutingOption, RoutingOptionClassifier, RoutingOptions};
pub use segment::{Junction, RoadSegment};
pub use speed::{Maxspeed, Speed};

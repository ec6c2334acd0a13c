//! Vehicle capability model seam.
//!
//! Classification rules (which features are roads, how fast they are driven)
//! live in the application; the geometry layer only consumes this surface.

use std::sync::Arc;

use crate::model::{Maxspeed, Speed};
use crate::store::FeatureRecord;

/// Highway class assigned to a feature by the model's classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HighwayType(pub u32);

/// Context for one directional speed request.
///
/// Direction is resolved separately per call because some roads post
/// asymmetric limits, and city membership can change how a posted limit is
/// interpreted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedParams {
    pub forward: bool,
    pub in_city: bool,
    pub maxspeed: Maxspeed,
}

/// Capability model of the routed vehicle.
pub trait VehicleModel {
    /// Highway class of the feature, when the model recognizes one.
    fn highway_type(&self, feature: &FeatureRecord) -> Option<HighwayType>;

    /// Whether the feature is routable at all for this vehicle.
    fn is_road(&self, feature: &FeatureRecord) -> bool;

    fn is_one_way(&self, feature: &FeatureRecord) -> bool;

    fn is_pass_through_allowed(&self, feature: &FeatureRecord) -> bool;

    /// Travel speed for one direction, given city membership and the posted
    /// limit matched for the feature.
    fn speed(&self, feature: &FeatureRecord, params: &SpeedParams) -> Speed;

    /// Hard cap on weight speeds; ferry-corrected speeds are clipped to it.
    fn max_weight_speed_km_h(&self) -> f64;
}

/// Shared read-only handle to a vehicle model.
pub type SharedVehicleModel = Arc<dyn VehicleModel>;

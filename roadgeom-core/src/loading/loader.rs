//! Feature loaders: resolve one feature id into a road segment.

use std::path::Path;
use std::sync::Arc;

use crate::loading::AttributeOverlay;
use crate::model::{RoadSegment, RoutingOptionClassifier};
use crate::store::{AltitudeTable, MapContainer, MapRegistry};
use crate::vehicle::SharedVehicleModel;
use crate::{Error, FeatureId};

/// Capability to populate a road segment in place from a feature id.
///
/// No caching happens at this layer; see [`crate::cache::RoadCache`].
pub trait RoadLoader {
    fn load_road(&self, feature_id: FeatureId, segment: &mut RoadSegment) -> Result<(), Error>;
}

/// Production loader backed by one registered map of a [`MapRegistry`].
///
/// The attribute overlay and (when enabled) the altitude table are read once
/// at construction from the same container the features come from.
pub struct IndexedRoadLoader {
    map: Arc<MapContainer>,
    vehicle: SharedVehicleModel,
    classifier: Arc<RoutingOptionClassifier>,
    overlay: AttributeOverlay,
    altitudes: AltitudeTable,
    load_altitudes: bool,
}

impl IndexedRoadLoader {
    pub fn new(
        registry: &MapRegistry,
        map_name: &str,
        vehicle: SharedVehicleModel,
        classifier: Arc<RoutingOptionClassifier>,
        load_altitudes: bool,
    ) -> Result<Self, Error> {
        let map = registry.map(map_name)?;
        let overlay = AttributeOverlay::load(&map);
        let altitudes = if load_altitudes {
            AltitudeTable::load(&map)
        } else {
            AltitudeTable::default()
        };
        Ok(Self {
            map,
            vehicle,
            classifier,
            overlay,
            altitudes,
            load_altitudes,
        })
    }
}

impl RoadLoader for IndexedRoadLoader {
    fn load_road(&self, feature_id: FeatureId, segment: &mut RoadSegment) -> Result<(), Error> {
        let feature = self
            .map
            .feature(feature_id)
            .ok_or_else(|| Error::FeatureNotFound {
                map: self.map.name().to_owned(),
                feature_id,
            })?;

        let profile = if self.load_altitudes {
            self.altitudes.profile(feature_id, feature.points.len())
        } else {
            None
        };

        segment.load(
            self.map.name(),
            self.vehicle.as_ref(),
            feature,
            profile,
            &self.overlay,
            &self.classifier,
        );
        Ok(())
    }
}

/// Loader over a single flat container file, used by generation tooling and
/// tests. Altitude data is never attached; every junction gets the default
/// altitude.
pub struct FlatFileRoadLoader {
    map: MapContainer,
    vehicle: SharedVehicleModel,
    classifier: Arc<RoutingOptionClassifier>,
    overlay: AttributeOverlay,
}

impl FlatFileRoadLoader {
    pub fn new(
        path: &Path,
        vehicle: SharedVehicleModel,
        classifier: Arc<RoutingOptionClassifier>,
    ) -> Result<Self, Error> {
        let map = MapContainer::from_path(path)?;
        let overlay = AttributeOverlay::load(&map);
        Ok(Self {
            map,
            vehicle,
            classifier,
            overlay,
        })
    }

    /// Container file wrapped by this loader.
    pub fn map(&self) -> &MapContainer {
        &self.map
    }
}

impl RoadLoader for FlatFileRoadLoader {
    fn load_road(&self, feature_id: FeatureId, segment: &mut RoadSegment) -> Result<(), Error> {
        let feature = self
            .map
            .feature(feature_id)
            .ok_or_else(|| Error::FeatureNotFound {
                map: self.map.name().to_owned(),
                feature_id,
            })?;

        segment.load(
            self.map.name(),
            self.vehicle.as_ref(),
            feature,
            None,
            &self.overlay,
            &self.classifier,
        );
        Ok(())
    }
}

//! Road segments: the enriched unit served to the path search.

use geo::Point;
use itertools::Itertools;
use log::error;

use crate::ferry::ferry_duration_hours;
use crate::geom;
use crate::loading::AttributeOverlay;
use crate::model::{RoutingOption, RoutingOptionClassifier, RoutingOptions, Speed};
use crate::store::FeatureRecord;
use crate::vehicle::{HighwayType, SpeedParams, VehicleModel};
use crate::{Altitude, DEFAULT_ALTITUDE};

/// Polyline vertex with geographic position and altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Junction {
    point: Point<f64>,
    altitude: Altitude,
}

impl Junction {
    pub fn new(point: Point<f64>, altitude: Altitude) -> Self {
        Self { point, altitude }
    }

    /// Longitude/latitude in degrees.
    pub fn point(&self) -> Point<f64> {
        self.point
    }

    pub fn altitude(&self) -> Altitude {
        self.altitude
    }
}

/// Fully resolved road segment.
///
/// The default value is the empty, invalid segment a cache slot starts with;
/// [`RoadSegment::load`] overwrites every field in place on each (re)load.
/// A segment with `is_valid() == false` is well-formed but must be excluded
/// from traversal by the caller.
#[derive(Debug, Default)]
pub struct RoadSegment {
    junctions: Vec<Junction>,
    forward_speed: Speed,
    backward_speed: Speed,
    highway_type: Option<HighwayType>,
    options: RoutingOptions,
    one_way: bool,
    pass_through_allowed: bool,
    in_city: bool,
    valid: bool,
}

impl RoadSegment {
    /// Valid segment with uniform speeds over raw mercator points, without
    /// consulting a vehicle model. Intended for generation tooling and tests.
    pub fn new(one_way: bool, weight_km_h: f64, eta_km_h: f64, points: &[[f64; 2]]) -> Self {
        debug_assert!(weight_km_h > 0.0);
        debug_assert!(eta_km_h > 0.0);

        let speed = Speed::new(weight_km_h, eta_km_h);
        Self {
            junctions: points
                .iter()
                .map(|&raw| Junction::new(geom::to_lat_lon(raw), DEFAULT_ALTITUDE))
                .collect(),
            forward_speed: speed,
            backward_speed: speed,
            highway_type: None,
            options: RoutingOptions::default(),
            one_way,
            pass_through_allowed: false,
            in_city: false,
            valid: true,
        }
    }

    /// Re-resolves the segment from a raw feature record.
    ///
    /// `altitudes`, when present, must be sized exactly to the feature's
    /// point count (the loaders guarantee this); absent altitudes leave every
    /// junction at [`DEFAULT_ALTITUDE`]. A feature the vehicle model rejects
    /// as "not a road" still gets its fields resolved but stays invalid. A
    /// road whose resolved speed is not positive and finite is demoted to
    /// invalid with a diagnostic log entry; that is a data-quality signal,
    /// not an error.
    pub fn load(
        &mut self,
        map_name: &str,
        vehicle: &dyn VehicleModel,
        feature: &FeatureRecord,
        altitudes: Option<&[Altitude]>,
        overlay: &AttributeOverlay,
        classifier: &RoutingOptionClassifier,
    ) {
        debug_assert!(altitudes.is_none_or(|a| a.len() == feature.points.len()));

        self.highway_type = vehicle.highway_type(feature);
        self.valid = vehicle.is_road(feature);
        self.one_way = vehicle.is_one_way(feature);
        self.pass_through_allowed = vehicle.is_pass_through_allowed(feature);

        self.in_city = overlay.is_city_road(feature.id);
        let maxspeed = overlay.maxspeed(feature.id);
        self.forward_speed = vehicle.speed(
            feature,
            &SpeedParams {
                forward: true,
                in_city: self.in_city,
                maxspeed,
            },
        );
        self.backward_speed = vehicle.speed(
            feature,
            &SpeedParams {
                forward: false,
                in_city: self.in_city,
                maxspeed,
            },
        );

        self.options = RoutingOptions::default();
        for &semantic_type in &feature.types {
            if let Some(option) = classifier.get(semantic_type) {
                self.options.add(option);
            }
        }

        self.junctions.clear();
        self.junctions.reserve(feature.points.len());
        for (i, &raw) in feature.points.iter().enumerate() {
            let altitude = altitudes.map_or(DEFAULT_ALTITUDE, |a| a[i]);
            self.junctions.push(Junction::new(geom::to_lat_lon(raw), altitude));
        }

        if self.options.has(RoutingOption::Ferry) {
            let declared = feature.metadata.ferry_duration.as_deref().unwrap_or("");
            let road_len_km = self.length_m() / 1000.0;
            let duration_h = ferry_duration_hours(declared, road_len_km);
            if road_len_km != 0.0 {
                let km_h = f64::min(vehicle.max_weight_speed_km_h(), road_len_km / duration_h);
                self.forward_speed = Speed::uniform(km_h);
                self.backward_speed = self.forward_speed;
            }
        }

        if self.valid && !(self.forward_speed.is_valid() && self.backward_speed.is_valid()) {
            match (self.junctions.first(), self.junctions.last()) {
                (Some(begin), Some(end)) => error!(
                    "invalid speed forward:{:?} backward:{:?} map:{map_name} feature:{} begin:{:?} end:{:?}",
                    self.forward_speed,
                    self.backward_speed,
                    feature.id,
                    begin.point(),
                    end.point()
                ),
                _ => error!(
                    "invalid speed forward:{:?} backward:{:?} map:{map_name} feature:{} with empty geometry",
                    self.forward_speed, self.backward_speed, feature.id
                ),
            }
            self.valid = false;
        }
    }

    /// Resolved speed for a travel direction.
    pub fn speed(&self, forward: bool) -> Speed {
        if forward {
            self.forward_speed
        } else {
            self.backward_speed
        }
    }

    pub fn forward_speed(&self) -> Speed {
        self.forward_speed
    }

    pub fn backward_speed(&self) -> Speed {
        self.backward_speed
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn is_one_way(&self) -> bool {
        self.one_way
    }

    pub fn is_pass_through_allowed(&self) -> bool {
        self.pass_through_allowed
    }

    pub fn is_in_city(&self) -> bool {
        self.in_city
    }

    pub fn highway_type(&self) -> Option<HighwayType> {
        self.highway_type
    }

    pub fn options(&self) -> RoutingOptions {
        self.options
    }

    pub fn junctions(&self) -> &[Junction] {
        &self.junctions
    }

    pub fn point_count(&self) -> usize {
        self.junctions.len()
    }

    /// Geodesic polyline length in meters.
    pub fn length_m(&self) -> f64 {
        self.junctions
            .iter()
            .tuple_windows()
            .map(|(a, b)| geom::distance_m(a.point(), b.point()))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::FeatureMetadata;

    const HIGHWAY: u32 = 201;
    const FERRY: u32 = 301;
    const TOLL: u32 = 302;

    struct StubVehicle {
        road: bool,
        one_way: bool,
        pass_through: bool,
        forward: Speed,
        backward: Speed,
        max_km_h: f64,
    }

    impl StubVehicle {
        fn road_with(forward: Speed, backward: Speed) -> Self {
            Self {
                road: true,
                one_way: false,
                pass_through: true,
                forward,
                backward,
                max_km_h: 130.0,
            }
        }
    }

    impl VehicleModel for StubVehicle {
        fn highway_type(&self, feature: &FeatureRecord) -> Option<HighwayType> {
            feature.types.first().copied().map(HighwayType)
        }

        fn is_road(&self, _: &FeatureRecord) -> bool {
            self.road
        }

        fn is_one_way(&self, _: &FeatureRecord) -> bool {
            self.one_way
        }

        fn is_pass_through_allowed(&self, _: &FeatureRecord) -> bool {
            self.pass_through
        }

        fn speed(&self, _: &FeatureRecord, params: &SpeedParams) -> Speed {
            let base = if params.forward {
                self.forward
            } else {
                self.backward
            };
            match params.maxspeed.for_direction(params.forward) {
                Some(limit) => Speed::new(
                    base.weight_km_h.min(f64::from(limit)),
                    base.eta_km_h.min(f64::from(limit)),
                ),
                None => base,
            }
        }

        fn max_weight_speed_km_h(&self) -> f64 {
            self.max_km_h
        }
    }

    fn classifier() -> RoutingOptionClassifier {
        RoutingOptionClassifier::new([
            (FERRY, RoutingOption::Ferry),
            (TOLL, RoutingOption::Toll),
        ])
    }

    // Two points one degree of longitude apart at the equator: ~111.2 km.
    fn long_feature(types: Vec<u32>, ferry_duration: Option<&str>) -> FeatureRecord {
        FeatureRecord {
            id: 1,
            types,
            points: vec![[0.0, 0.0], [1.0, 0.0]],
            metadata: FeatureMetadata {
                ferry_duration: ferry_duration.map(str::to_owned),
            },
        }
    }

    fn load(segment: &mut RoadSegment, vehicle: &StubVehicle, feature: &FeatureRecord) {
        segment.load(
            "atlantis",
            vehicle,
            feature,
            None,
            &AttributeOverlay::default(),
            &classifier(),
        );
    }

    #[test]
    fn resolves_flags_speeds_and_junctions() {
        let vehicle = StubVehicle {
            one_way: true,
            ..StubVehicle::road_with(Speed::new(90.0, 80.0), Speed::new(70.0, 60.0))
        };
        let mut segment = RoadSegment::default();
        load(&mut segment, &vehicle, &long_feature(vec![HIGHWAY], None));

        assert!(segment.is_valid());
        assert!(segment.is_one_way());
        assert!(segment.is_pass_through_allowed());
        assert_eq!(segment.highway_type(), Some(HighwayType(HIGHWAY)));
        assert_eq!(segment.speed(true), Speed::new(90.0, 80.0));
        assert_eq!(segment.speed(false), Speed::new(70.0, 60.0));
        assert_eq!(segment.point_count(), 2);
        assert!((segment.length_m() - 111_195.0).abs() < 150.0);
        assert!(segment.options().is_empty());
    }

    #[test]
    fn non_road_stays_invalid_despite_valid_speeds() {
        let vehicle = StubVehicle {
            road: false,
            ..StubVehicle::road_with(Speed::uniform(60.0), Speed::uniform(60.0))
        };
        let mut segment = RoadSegment::default();
        load(&mut segment, &vehicle, &long_feature(vec![HIGHWAY], None));

        assert!(!segment.is_valid());
        assert!(segment.speed(true).is_valid());
    }

    #[test]
    fn invalid_resolved_speed_demotes_road_to_invalid() {
        let vehicle = StubVehicle::road_with(Speed::uniform(60.0), Speed::new(0.0, 0.0));
        let mut segment = RoadSegment::default();
        load(&mut segment, &vehicle, &long_feature(vec![HIGHWAY], None));

        assert!(!segment.is_valid());
    }

    #[test]
    fn options_union_all_matched_types() {
        let vehicle = StubVehicle::road_with(Speed::uniform(60.0), Speed::uniform(60.0));
        let mut segment = RoadSegment::default();
        load(
            &mut segment,
            &vehicle,
            &long_feature(vec![HIGHWAY, FERRY, TOLL], Some("1.5")),
        );

        assert!(segment.options().has(RoutingOption::Ferry));
        assert!(segment.options().has(RoutingOption::Toll));
        assert!(!segment.options().has(RoutingOption::Dirt));
    }

    #[test]
    fn ferry_speed_is_uniform_and_derived_from_duration() {
        let vehicle = StubVehicle::road_with(Speed::new(90.0, 80.0), Speed::new(70.0, 60.0));
        let mut segment = RoadSegment::default();
        load(&mut segment, &vehicle, &long_feature(vec![FERRY], Some("2.0")));

        assert!(segment.is_valid());
        assert_eq!(segment.speed(true), segment.speed(false));
        // ~111.2 km over the declared 2 h.
        let expected = segment.length_m() / 1000.0 / 2.0;
        assert!((segment.speed(true).weight_km_h - expected).abs() < 1e-9);
        assert!(segment.speed(true).weight_km_h <= vehicle.max_weight_speed_km_h());
    }

    #[test]
    fn ferry_speed_is_clipped_to_vehicle_maximum() {
        let vehicle = StubVehicle {
            max_km_h: 30.0,
            ..StubVehicle::road_with(Speed::new(90.0, 80.0), Speed::new(90.0, 80.0))
        };
        let mut segment = RoadSegment::default();
        // ~111.2 km declared to take 1 h would be ~111 km/h; clipped to 30.
        load(&mut segment, &vehicle, &long_feature(vec![FERRY], Some("1.0")));

        assert_eq!(segment.speed(true), Speed::uniform(30.0));
        assert_eq!(segment.speed(false), Speed::uniform(30.0));
    }

    #[test]
    fn zero_length_ferry_keeps_model_speeds() {
        let vehicle = StubVehicle::road_with(Speed::new(90.0, 80.0), Speed::new(70.0, 60.0));
        let feature = FeatureRecord {
            id: 1,
            types: vec![FERRY],
            points: vec![[0.5, 0.5], [0.5, 0.5]],
            metadata: FeatureMetadata::default(),
        };
        let mut segment = RoadSegment::default();
        load(&mut segment, &vehicle, &feature);

        assert_eq!(segment.speed(true), Speed::new(90.0, 80.0));
        assert_eq!(segment.speed(false), Speed::new(70.0, 60.0));
    }

    #[test]
    fn altitude_profile_is_attached_per_vertex() {
        let vehicle = StubVehicle::road_with(Speed::uniform(60.0), Speed::uniform(60.0));
        let feature = long_feature(vec![HIGHWAY], None);
        let mut segment = RoadSegment::default();
        segment.load(
            "atlantis",
            &vehicle,
            &feature,
            Some(&[120, 140]),
            &AttributeOverlay::default(),
            &classifier(),
        );

        let altitudes: Vec<_> = segment.junctions().iter().map(Junction::altitude).collect();
        assert_eq!(altitudes, vec![120, 140]);
    }

    #[test]
    fn missing_profile_uses_default_altitude() {
        let vehicle = StubVehicle::road_with(Speed::uniform(60.0), Speed::uniform(60.0));
        let mut segment = RoadSegment::default();
        load(&mut segment, &vehicle, &long_feature(vec![HIGHWAY], None));

        assert!(
            segment
                .junctions()
                .iter()
                .all(|j| j.altitude() == DEFAULT_ALTITUDE)
        );
    }

    #[test]
    fn overlay_city_flag_and_maxspeed_feed_speed_resolution() {
        use crate::store::section;
        use serde_json::json;

        let mut container = crate::store::MapContainer::new("atlantis", Vec::new());
        container.set_section(section::CITY_ROADS, json!([1]));
        container.set_section(
            section::MAXSPEEDS,
            json!([{"id": 1, "forward_km_h": 50, "backward_km_h": 30}]),
        );
        let overlay = AttributeOverlay::load(&container);

        let vehicle = StubVehicle::road_with(Speed::new(90.0, 80.0), Speed::new(90.0, 80.0));
        let mut segment = RoadSegment::default();
        segment.load(
            "atlantis",
            &vehicle,
            &long_feature(vec![HIGHWAY], None),
            None,
            &overlay,
            &classifier(),
        );

        assert!(segment.is_in_city());
        assert_eq!(segment.speed(true), Speed::uniform(50.0));
        assert_eq!(segment.speed(false), Speed::uniform(30.0));
    }

    #[test]
    fn reload_overwrites_previous_state() {
        let vehicle = StubVehicle::road_with(Speed::uniform(60.0), Speed::uniform(60.0));
        let mut segment = RoadSegment::default();
        load(
            &mut segment,
            &vehicle,
            &long_feature(vec![HIGHWAY, TOLL], None),
        );
        assert_eq!(segment.point_count(), 2);
        assert!(segment.options().has(RoutingOption::Toll));

        let three_points = FeatureRecord {
            id: 2,
            types: vec![HIGHWAY],
            points: vec![[0.0, 0.0], [0.5, 0.0], [1.0, 0.0]],
            metadata: FeatureMetadata::default(),
        };
        load(&mut segment, &vehicle, &three_points);
        assert_eq!(segment.point_count(), 3);
        assert!(segment.options().is_empty());
    }

    #[test]
    fn tooling_constructor_builds_a_valid_segment() {
        let segment = RoadSegment::new(true, 90.0, 80.0, &[[0.0, 0.0], [1.0, 0.0]]);
        assert!(segment.is_valid());
        assert!(segment.is_one_way());
        assert_eq!(segment.forward_speed(), segment.backward_speed());
        assert_eq!(segment.forward_speed(), Speed::new(90.0, 80.0));
        assert!(
            segment
                .junctions()
                .iter()
                .all(|j| j.altitude() == DEFAULT_ALTITUDE)
        );
    }
}

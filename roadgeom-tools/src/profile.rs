//! TOML vehicle profiles: a config-driven vehicle model for tooling runs.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;

use roadgeom_core::prelude::*;

fn default_city_factor() -> f64 {
    1.0
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    pub name: String,
    pub max_weight_speed_km_h: f64,
    /// Applied to the base speed inside a city when no limit is posted.
    #[serde(default = "default_city_factor")]
    pub in_city_speed_factor: f64,
    #[serde(default)]
    pub highways: Vec<HighwaySpeed>,
    #[serde(default)]
    pub options: OptionTypes,
    #[serde(default)]
    pub one_way_types: Vec<SemanticType>,
    #[serde(default)]
    pub no_pass_through_types: Vec<SemanticType>,
}

#[derive(Debug, Deserialize)]
pub struct HighwaySpeed {
    pub semantic_type: SemanticType,
    pub weight_km_h: f64,
    pub eta_km_h: f64,
}

#[derive(Debug, Default, Deserialize)]
pub struct OptionTypes {
    #[serde(default)]
    pub ferry: Vec<SemanticType>,
    #[serde(default)]
    pub toll: Vec<SemanticType>,
    #[serde(default)]
    pub dirt: Vec<SemanticType>,
    #[serde(default)]
    pub motorway: Vec<SemanticType>,
}

impl Profile {
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        Ok(toml::from_str(&fs::read_to_string(path)?)?)
    }

    pub fn classifier(&self) -> RoutingOptionClassifier {
        let tagged = |types: &[SemanticType], option| {
            types
                .iter()
                .map(move |&t| (t, option))
                .collect::<Vec<_>>()
        };
        RoutingOptionClassifier::new(
            tagged(&self.options.ferry, RoutingOption::Ferry)
                .into_iter()
                .chain(tagged(&self.options.toll, RoutingOption::Toll))
                .chain(tagged(&self.options.dirt, RoutingOption::Dirt))
                .chain(tagged(&self.options.motorway, RoutingOption::Motorway)),
        )
    }

    pub fn vehicle_model(&self) -> ProfileVehicleModel {
        ProfileVehicleModel {
            speeds: self
                .highways
                .iter()
                .map(|h| (h.semantic_type, Speed::new(h.weight_km_h, h.eta_km_h)))
                .collect(),
            one_way: self.one_way_types.iter().copied().collect(),
            no_pass_through: self.no_pass_through_types.iter().copied().collect(),
            max_weight_speed_km_h: self.max_weight_speed_km_h,
            in_city_speed_factor: self.in_city_speed_factor,
        }
    }
}

/// Vehicle model driven entirely by a [`Profile`]. A feature is a road when
/// any of its semantic types has a configured highway speed.
pub struct ProfileVehicleModel {
    speeds: HashMap<SemanticType, Speed>,
    one_way: HashSet<SemanticType>,
    no_pass_through: HashSet<SemanticType>,
    max_weight_speed_km_h: f64,
    in_city_speed_factor: f64,
}

impl ProfileVehicleModel {
    fn base_speed(&self, feature: &FeatureRecord) -> Option<Speed> {
        feature
            .types
            .iter()
            .find_map(|t| self.speeds.get(t).copied())
    }
}

impl VehicleModel for ProfileVehicleModel {
    fn highway_type(&self, feature: &FeatureRecord) -> Option<HighwayType> {
        feature
            .types
            .iter()
            .find(|t| self.speeds.contains_key(t))
            .map(|&t| HighwayType(t))
    }

    fn is_road(&self, feature: &FeatureRecord) -> bool {
        feature.types.iter().any(|t| self.speeds.contains_key(t))
    }

    fn is_one_way(&self, feature: &FeatureRecord) -> bool {
        feature.types.iter().any(|t| self.one_way.contains(t))
    }

    fn is_pass_through_allowed(&self, feature: &FeatureRecord) -> bool {
        !feature
            .types
            .iter()
            .any(|t| self.no_pass_through.contains(t))
    }

    fn speed(&self, feature: &FeatureRecord, params: &SpeedParams) -> Speed {
        // An unconfigured feature resolves to the (invalid) zero speed.
        let Some(base) = self.base_speed(feature) else {
            return Speed::default();
        };
        match params.maxspeed.for_direction(params.forward) {
            Some(limit) => {
                let limit = f64::from(limit);
                Speed::new(base.weight_km_h.min(limit), base.eta_km_h.min(limit))
            }
            None if params.in_city => Speed::new(
                base.weight_km_h * self.in_city_speed_factor,
                base.eta_km_h * self.in_city_speed_factor,
            ),
            None => base,
        }
    }

    fn max_weight_speed_km_h(&self) -> f64 {
        self.max_weight_speed_km_h
    }
}

//! Optional per-map road attribute overlays.

use hashbrown::{HashMap, HashSet};
use log::error;
use serde::{Deserialize, Serialize};

use crate::FeatureId;
use crate::model::Maxspeed;
use crate::store::{MapContainer, section};

/// One row of the `maxspeeds` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaxspeedRecord {
    pub id: FeatureId,
    #[serde(flatten)]
    pub maxspeed: Maxspeed,
}

/// City-road membership and posted speed limits for one map, read from its
/// optional overlay sections. Queries fall back to "not a city road" and the
/// unset limit when a section is absent.
#[derive(Debug, Default)]
pub struct AttributeOverlay {
    city_roads: HashSet<FeatureId>,
    maxspeeds: HashMap<FeatureId, Maxspeed>,
}

impl AttributeOverlay {
    /// Reads both overlay sections, each independently. A malformed section
    /// is logged and degrades to "absent"; this never fails.
    pub fn load(container: &MapContainer) -> Self {
        let mut overlay = Self::default();

        if container.has_section(section::CITY_ROADS) {
            match container.section::<Vec<FeatureId>>(section::CITY_ROADS) {
                Ok(ids) => overlay.city_roads = ids.into_iter().collect(),
                Err(e) => error!("{e}"),
            }
        }

        if container.has_section(section::MAXSPEEDS) {
            match container.section::<Vec<MaxspeedRecord>>(section::MAXSPEEDS) {
                Ok(records) => {
                    overlay.maxspeeds = records.into_iter().map(|r| (r.id, r.maxspeed)).collect();
                }
                Err(e) => error!("{e}"),
            }
        }

        overlay
    }

    /// Whether the feature lies inside a classified dense-urban boundary.
    pub fn is_city_road(&self, id: FeatureId) -> bool {
        self.city_roads.contains(&id)
    }

    /// Posted limit matched for the feature, or the unset sentinel.
    pub fn maxspeed(&self, id: FeatureId) -> Maxspeed {
        self.maxspeeds.get(&id).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn container_without_sections_loads_to_defaults() {
        let overlay = AttributeOverlay::load(&MapContainer::new("atlantis", Vec::new()));
        assert!(!overlay.is_city_road(1));
        assert_eq!(overlay.maxspeed(1), Maxspeed::UNSET);
    }

    #[test]
    fn present_sections_answer_queries() {
        let mut container = MapContainer::new("atlantis", Vec::new());
        container.set_section(section::CITY_ROADS, json!([3, 5]));
        container.set_section(
            section::MAXSPEEDS,
            json!([{"id": 5, "forward_km_h": 60, "backward_km_h": 40}]),
        );

        let overlay = AttributeOverlay::load(&container);
        assert!(overlay.is_city_road(3));
        assert!(!overlay.is_city_road(4));
        let maxspeed = overlay.maxspeed(5);
        assert_eq!(maxspeed.for_direction(true), Some(60));
        assert_eq!(maxspeed.for_direction(false), Some(40));
        assert_eq!(overlay.maxspeed(3), Maxspeed::UNSET);
    }

    #[test]
    fn malformed_sections_degrade_independently() {
        let mut container = MapContainer::new("atlantis", Vec::new());
        container.set_section(section::CITY_ROADS, json!("bogus"));
        container.set_section(section::MAXSPEEDS, json!([{"id": 5, "forward_km_h": 60}]));

        let overlay = AttributeOverlay::load(&container);
        assert!(!overlay.is_city_road(1));
        assert_eq!(overlay.maxspeed(5).for_direction(true), Some(60));
    }
}

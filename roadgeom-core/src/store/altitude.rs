//! Per-feature altitude profiles.

use hashbrown::HashMap;
use log::{error, warn};
use serde::{Deserialize, Serialize};

use crate::store::{MapContainer, section};
use crate::{Altitude, FeatureId};

/// One feature's profile as stored in the `altitudes` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AltitudeRecord {
    pub id: FeatureId,
    pub altitudes: Vec<Altitude>,
}

/// Per-vertex altitude profiles read from a map's optional `altitudes`
/// section. Absence of the section is normal.
#[derive(Debug, Default)]
pub struct AltitudeTable {
    profiles: HashMap<FeatureId, Vec<Altitude>>,
}

impl AltitudeTable {
    /// Reads the `altitudes` section of a container. A missing section yields
    /// an empty table; a malformed one is logged and treated as missing.
    pub fn load(container: &MapContainer) -> Self {
        let mut table = Self::default();
        if !container.has_section(section::ALTITUDES) {
            return table;
        }
        match container.section::<Vec<AltitudeRecord>>(section::ALTITUDES) {
            Ok(records) => {
                table.profiles = records.into_iter().map(|r| (r.id, r.altitudes)).collect();
            }
            Err(e) => error!("{e}"),
        }
        table
    }

    /// Altitude profile for a feature, only when it matches the feature's
    /// point count exactly.
    pub fn profile(&self, id: FeatureId, point_count: usize) -> Option<&[Altitude]> {
        let altitudes = self.profiles.get(&id)?;
        if altitudes.len() != point_count {
            warn!(
                "altitude profile of feature {id} has {} entries, expected {point_count}; ignored",
                altitudes.len()
            );
            return None;
        }
        Some(altitudes)
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

//! Map containers and the indexed multi-map feature source.
//!
//! A container is one map's feature vector plus optional named sections.
//! Sections are kept as raw JSON until a reader asks for them, so a section
//! that is present but malformed fails at read time and the reader decides
//! how to degrade.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use hashbrown::HashMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::{Error, FeatureId, SemanticType};

/// Well-known optional section tags of a map container.
pub mod section {
    pub const CITY_ROADS: &str = "city_roads";
    pub const MAXSPEEDS: &str = "maxspeeds";
    pub const ALTITUDES: &str = "altitudes";
}

/// Tag metadata attached to a feature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureMetadata {
    /// Declared ferry crossing duration in hours, pre-validated upstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ferry_duration: Option<String>,
}

/// Raw map feature as stored in a container: semantic types, geometry at the
/// best available resolution (raw mercator x/y pairs) and tag metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub id: FeatureId,
    #[serde(default)]
    pub types: Vec<SemanticType>,
    pub points: Vec<[f64; 2]>,
    #[serde(default)]
    pub metadata: FeatureMetadata,
}

/// On-disk shape of a container document.
#[derive(Debug, Serialize, Deserialize)]
struct ContainerFile {
    name: String,
    features: Vec<FeatureRecord>,
    #[serde(default)]
    sections: std::collections::BTreeMap<String, JsonValue>,
}

/// One map's feature container.
#[derive(Debug, Default)]
pub struct MapContainer {
    name: String,
    features: HashMap<FeatureId, FeatureRecord>,
    sections: HashMap<String, JsonValue>,
}

impl MapContainer {
    /// Container over an in-memory feature vector, with no sections.
    pub fn new(name: impl Into<String>, features: Vec<FeatureRecord>) -> Self {
        Self {
            name: name.into(),
            features: features.into_iter().map(|f| (f.id, f)).collect(),
            sections: HashMap::new(),
        }
    }

    /// Reads a container document from disk.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let file = File::open(path)?;
        let parsed: ContainerFile =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| {
                Error::MalformedContainer {
                    path: path.display().to_string(),
                    source,
                }
            })?;
        let mut container = Self::new(parsed.name, parsed.features);
        container.sections = parsed.sections.into_iter().collect();
        Ok(container)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn feature(&self, id: FeatureId) -> Option<&FeatureRecord> {
        self.features.get(&id)
    }

    pub fn feature_ids(&self) -> impl Iterator<Item = FeatureId> + '_ {
        self.features.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn has_section(&self, tag: &str) -> bool {
        self.sections.contains_key(tag)
    }

    /// Deserializes a named section payload.
    pub fn section<T: DeserializeOwned>(&self, tag: &'static str) -> Result<T, Error> {
        let value = self.sections.get(tag).ok_or_else(|| Error::SectionMissing {
            map: self.name.clone(),
            tag,
        })?;
        T::deserialize(value).map_err(|source| Error::MalformedSection {
            map: self.name.clone(),
            tag,
            source,
        })
    }

    /// Attaches or replaces a named section payload (generation tooling).
    pub fn set_section(&mut self, tag: &str, payload: JsonValue) {
        self.sections.insert(tag.to_owned(), payload);
    }
}

/// Indexed multi-map data source. Containers are registered once and handed
/// out as shared read-only handles.
#[derive(Debug, Default)]
pub struct MapRegistry {
    maps: HashMap<String, Arc<MapContainer>>,
}

impl MapRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a container under its own name, replacing any previous one.
    pub fn register(&mut self, container: MapContainer) -> Arc<MapContainer> {
        let shared = Arc::new(container);
        self.maps
            .insert(shared.name().to_owned(), Arc::clone(&shared));
        shared
    }

    /// Reads a container document from disk and registers it.
    pub fn register_from_path(&mut self, path: &Path) -> Result<Arc<MapContainer>, Error> {
        Ok(self.register(MapContainer::from_path(path)?))
    }

    /// Shared handle to a registered map.
    pub fn map(&self, name: &str) -> Result<Arc<MapContainer>, Error> {
        self.maps
            .get(name)
            .cloned()
            .ok_or_else(|| Error::MapNotFound(name.to_owned()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.maps.keys().map(String::as_str)
    }
}

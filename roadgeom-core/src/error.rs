use thiserror::Error;

use crate::FeatureId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("map {0} is not registered in the data source")]
    MapNotFound(String),
    #[error("feature {feature_id} not found in map {map}")]
    FeatureNotFound { map: String, feature_id: FeatureId },
    #[error("map {map} has no {tag} section")]
    SectionMissing { map: String, tag: &'static str },
    #[error("map {map}: malformed {tag} section: {source}")]
    MalformedSection {
        map: String,
        tag: &'static str,
        source: serde_json::Error,
    },
    #[error("malformed map container {path}: {source}")]
    MalformedContainer {
        path: String,
        source: serde_json::Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

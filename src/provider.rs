//! Backend map-service access.
//!
//! The real map server is an external collaborator; this crate only consumes
//! the narrow read-only surface below. [`StaticMapService`] is a JSON-backed
//! implementation used by the `map-rest-server` binary and the tests.

use std::path::Path;

use serde::Deserialize;

/// Backend type string for which a feature-count lookup is defined.
pub const FEATURE_LAYER_TYPE: &str = "Feature Layer";

/// Metadata for one layer in the map service, as reported by the backend.
/// Read-only to this crate; re-read fresh on every request, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LayerInfo {
    /// Unique within one map service.
    pub id: i32,
    pub name: String,
    /// Open set: "Feature Layer", "Raster Layer", "Network Dataset Layer", …
    #[serde(rename = "type")]
    pub layer_type: String,
    #[serde(default)]
    pub description: String,
}

impl LayerInfo {
    pub fn is_feature_layer(&self) -> bool {
        self.layer_type.eq_ignore_ascii_case(FEATURE_LAYER_TYPE)
    }
}

/// Failure surfaced from the backend.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("no layer at position {0}")]
    IndexOutOfRange(usize),
    #[error("no layer with id {0}")]
    UnknownLayer(i32),
    #[error("layer {0} does not support feature counting")]
    NotCountable(i32),
    #[error("map service definition error: {0}")]
    Definition(String),
}

/// Read-only view of the map service consumed by the dispatcher.
///
/// Every call is synchronous and blocking; the dispatcher performs no writes
/// through this trait, so implementations only need to be safe for
/// concurrent reads.
pub trait MapServiceProvider: Send + Sync {
    /// Number of layers in the service.
    fn layer_count(&self) -> Result<usize, ProviderError>;

    /// Layer at position `index` (0..count).
    fn layer(&self, index: usize) -> Result<LayerInfo, ProviderError>;

    /// Total, unfiltered feature count for a feature layer.
    fn feature_count(&self, layer_id: i32) -> Result<u64, ProviderError>;
}

#[derive(Debug, Clone, Deserialize)]
struct StaticLayer {
    #[serde(flatten)]
    info: LayerInfo,
    #[serde(rename = "featureCount")]
    feature_count: Option<u64>,
}

/// In-memory map service loaded from a JSON definition file:
/// `{"layers":[{"id":1,"name":…,"type":…,"description":…,"featureCount":…},…]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct StaticMapService {
    layers: Vec<StaticLayer>,
}

impl StaticMapService {
    pub fn from_json(json: &str) -> Result<Self, ProviderError> {
        serde_json::from_str(json).map_err(|e| ProviderError::Definition(e.to_string()))
    }

    pub fn from_file(path: &Path) -> Result<Self, ProviderError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ProviderError::Definition(format!("{}: {e}", path.display())))?;
        Self::from_json(&raw)
    }

    fn find(&self, layer_id: i32) -> Result<&StaticLayer, ProviderError> {
        self.layers
            .iter()
            .find(|l| l.info.id == layer_id)
            .ok_or(ProviderError::UnknownLayer(layer_id))
    }
}

impl MapServiceProvider for StaticMapService {
    fn layer_count(&self) -> Result<usize, ProviderError> {
        Ok(self.layers.len())
    }

    fn layer(&self, index: usize) -> Result<LayerInfo, ProviderError> {
        self.layers
            .get(index)
            .map(|l| l.info.clone())
            .ok_or(ProviderError::IndexOutOfRange(index))
    }

    fn feature_count(&self, layer_id: i32) -> Result<u64, ProviderError> {
        let layer = self.find(layer_id)?;
        layer
            .feature_count
            .ok_or(ProviderError::NotCountable(layer_id))
    }
}

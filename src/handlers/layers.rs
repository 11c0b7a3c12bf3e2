use serde::Serialize;

use crate::error::RequestError;
use crate::provider::MapServiceProvider;

/// JSON form of one layer. Feature layers additionally carry their total
/// feature count; the key is absent for every other layer type.
#[derive(Debug, Serialize)]
pub struct LayerDescription {
    pub name: String,
    #[serde(rename = "type")]
    pub layer_type: String,
    pub id: i32,
    pub description: String,
    #[serde(rename = "featureCount", skip_serializing_if = "Option::is_none")]
    pub feature_count: Option<u64>,
}

/// Aggregate of every layer in the service, in backend iteration order.
#[derive(Debug, Serialize)]
pub struct LayersDescription {
    #[serde(rename = "layerCount")]
    pub layer_count: usize,
    #[serde(rename = "layersInfo")]
    pub layers_info: Vec<LayerDescription>,
}

/// Enumerate every layer in the service, preserving backend order. For each
/// feature layer a secondary lookup fetches the unfiltered feature count.
/// Any backend failure aborts the whole aggregation; no partial result is
/// ever returned.
pub fn describe_layers(
    provider: &dyn MapServiceProvider,
) -> Result<LayersDescription, RequestError> {
    let count = provider.layer_count()?;
    let mut layers_info = Vec::with_capacity(count);

    for i in 0..count {
        let layer = provider.layer(i)?;
        let feature_count = if layer.is_feature_layer() {
            Some(provider.feature_count(layer.id)?)
        } else {
            None
        };
        layers_info.push(LayerDescription {
            name: layer.name,
            layer_type: layer.layer_type,
            id: layer.id,
            description: layer.description,
            feature_count,
        });
    }

    Ok(LayersDescription {
        layer_count: count,
        layers_info,
    })
}

use serde_json::Value;

use crate::error::RequestError;
use crate::protocol::ResponseProperties;
use crate::provider::MapServiceProvider;

/// Validation message surfaced verbatim when `type` is missing, empty, or
/// not one of the accepted literals.
const INVALID_TYPE_MESSAGE: &str =
    "Invalid layer type provided. Available types are: \"all\", \"feature\", \"raster\", \"dataset\".";

/// Accepted values of the `type` input parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LayerTypeFilter {
    All,
    Feature,
    Raster,
    Dataset,
}

impl LayerTypeFilter {
    fn parse(raw: &str) -> Result<Self, RequestError> {
        if raw.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else if raw.eq_ignore_ascii_case("feature") {
            Ok(Self::Feature)
        } else if raw.eq_ignore_ascii_case("raster") {
            Ok(Self::Raster)
        } else if raw.eq_ignore_ascii_case("dataset") {
            Ok(Self::Dataset)
        } else {
            Err(RequestError::InvalidArgument(INVALID_TYPE_MESSAGE.into()))
        }
    }

    /// Backend type string the filter matches, `None` for `All`.
    fn backend_type(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Feature => Some("Feature Layer"),
            Self::Raster => Some("Raster Layer"),
            Self::Dataset => Some("Network Dataset Layer"),
        }
    }
}

/// `getLayerCountByType` — count the layers whose backend type matches the
/// requested filter. Responds `{"count": n}` with a JSON content type.
pub fn handle(
    provider: &dyn MapServiceProvider,
    input: &Value,
    properties: &mut ResponseProperties,
) -> Result<Vec<u8>, RequestError> {
    let requested = input.get("type").and_then(Value::as_str).unwrap_or("");
    let filter = LayerTypeFilter::parse(requested)?;

    let total = provider.layer_count()?;
    let count = match filter.backend_type() {
        None => total,
        Some(backend_type) => {
            let mut matched = 0usize;
            for i in 0..total {
                if provider.layer(i)?.layer_type.eq_ignore_ascii_case(backend_type) {
                    matched += 1;
                }
            }
            matched
        }
    };

    properties.insert("Content-Type".into(), "application/json".into());
    Ok(serde_json::to_vec(&serde_json::json!({ "count": count }))?)
}

use serde::Deserialize;

/// One request frame on the stdio transport — the seven arguments of the
/// REST entry point, plus `schema` to request the discovery tree instead.
/// Every field is optional on the wire; absent strings default to empty,
/// matching how the host hands requests to the extension.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireRequest {
    /// When true the frame is answered with the schema call and all other
    /// fields are ignored.
    #[serde(default)]
    pub schema: bool,
    #[serde(default)]
    pub capabilities: String,
    #[serde(default, rename = "resourceName")]
    pub resource_name: String,
    #[serde(default, rename = "operationName")]
    pub operation_name: String,
    #[serde(default, rename = "operationInput")]
    pub operation_input: String,
    #[serde(default, rename = "outputFormat")]
    pub output_format: String,
    #[serde(default, rename = "requestProperties")]
    pub request_properties: String,
}

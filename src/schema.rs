//! Static description of the resource/operation tree, served to clients for
//! capability discovery.

use serde_json::{json, Value};

use crate::log::{LogSeverity, ServerLog};
use crate::protocol::error_envelope;

pub const SERVICE_NAME: &str = "MapLayersRest";
pub const SERVICE_DESCRIPTION: &str = "Map-service REST extension with 1 sub-resource \
    called \"layers\" and 1 operation called \"getLayerCountByType\".";

/// Describe one resource node of the discovery tree.
pub fn create_resource(
    name: &str,
    description: &str,
    has_children: bool,
    supports_operations: bool,
) -> Value {
    json!({
        "name": name,
        "description": description,
        "hasChildren": has_children,
        "supportsOperations": supports_operations,
    })
}

/// Describe one operation node of the discovery tree.
pub fn create_operation(
    name: &str,
    parameters: &[&str],
    supported_output_formats: &str,
    requires_capabilities: bool,
) -> Value {
    json!({
        "name": name,
        "parameters": parameters,
        "supportedOutputFormats": supported_output_formats,
        "requiresCapabilities": requires_capabilities,
    })
}

/// Build the full schema: the service root, its single `layers` sub-resource
/// and its single `getLayerCountByType` operation.
///
/// This call never raises. A serialization failure is logged by message text
/// and rendered as the error envelope string; unlike the request entry point
/// there is no further severity handling here.
pub fn describe_schema(log: &dyn ServerLog) -> String {
    let mut root = create_resource(SERVICE_NAME, SERVICE_DESCRIPTION, false, false);
    root["resources"] = json!([create_resource(
        "layers",
        "layers in the associated map service",
        false,
        false,
    )]);
    root["operations"] = json!([create_operation(
        "getLayerCountByType",
        &["type"],
        "json",
        false,
    )]);

    match serde_json::to_string(&root) {
        Ok(schema) => schema,
        Err(e) => {
            log.add_message(LogSeverity::Error, 500, &e.to_string());
            let envelope = error_envelope(500, format!("Exception occurred: {e}"), &[]);
            serde_json::to_string(&envelope)
                .expect("error envelope must serialize to JSON")
        }
    }
}

//! Resource resolution and operation dispatch.
//!
//! Resources answer when no operation is named; operations only exist at the
//! service root. Both paths hand bytes back to the entry point, which owns
//! error flattening and the response-properties out-slot.

pub mod layer_count;
pub mod layers;

use serde_json::{json, Value};

use crate::error::RequestError;
use crate::log::{LogSeverity, ServerLog};
use crate::protocol::{error_envelope_bytes, ResponseProperties};
use crate::provider::MapServiceProvider;
use crate::schema::{SERVICE_DESCRIPTION, SERVICE_NAME};

const SERVICE_USAGE: &str = "The \"layers\" sub-resource returns all layers in the map service.\n\
    The \"getLayerCountByType\" operation returns a count of layers of the specified type. \
    It accepts one of the following values as input: \"feature\", \"raster\", \"dataset\", and \"all\".";

/// Resolve a resource by name.
///
/// Empty name is the service root; `layers` (any casing) is the one
/// sub-resource. Any other name yields `None` — no content, deliberately
/// not an error.
pub fn resolve_resource(
    provider: &dyn MapServiceProvider,
    resource_name: &str,
    properties: &mut ResponseProperties,
) -> Result<Option<Vec<u8>>, RequestError> {
    if resource_name.is_empty() {
        return root_resource().map(Some);
    }
    if resource_name.eq_ignore_ascii_case("layers") {
        let layers = layers::describe_layers(provider)?;
        properties.insert("Content-Type".into(), "application/json".into());
        return Ok(Some(serde_json::to_vec(&json!({ "layers": layers }))?));
    }
    Ok(None)
}

fn root_resource() -> Result<Vec<u8>, RequestError> {
    Ok(serde_json::to_vec(&json!({
        "name": SERVICE_NAME,
        "description": SERVICE_DESCRIPTION,
        "usage": SERVICE_USAGE,
    }))?)
}

/// Invoke an operation on a resource.
///
/// Only the service root supports operations; a non-empty resource name is
/// answered with the error envelope directly (logged here rather than
/// deferred to the entry point's catch). An unknown operation name at the
/// root yields `None`, mirroring the resolver's unknown-resource behavior.
pub fn dispatch_operation(
    provider: &dyn MapServiceProvider,
    log: &dyn ServerLog,
    resource_name: &str,
    operation_name: &str,
    operation_input: &str,
    properties: &mut ResponseProperties,
) -> Result<Option<Vec<u8>>, RequestError> {
    // Parsed before the resource check so malformed input fails the same
    // way no matter which resource was named.
    let input: Value = serde_json::from_str(operation_input)?;

    if !resource_name.is_empty() {
        let message = format!("No sub-resource by name {resource_name} found.");
        log.add_message(LogSeverity::Error, 500, &message);
        return Ok(Some(error_envelope_bytes(
            500,
            message,
            &["No details specified."],
        )));
    }

    if operation_name.eq_ignore_ascii_case("getLayerCountByType") {
        return layer_count::handle(provider, &input, properties).map(Some);
    }

    Ok(None)
}

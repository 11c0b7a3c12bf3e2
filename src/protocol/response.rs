use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Response headers accumulated by whichever handler produced the body
/// (at minimum `Content-Type`). One value per key, last write wins. The
/// entry point serializes the whole map to JSON and hands it back through
/// the out-slot alongside the body.
pub type ResponseProperties = BTreeMap<String, String>;

/// The fixed JSON shape used for every failure response:
/// `{"error":{"code":…,"message":…,"details":[…]}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: i32,
    pub message: String,
    pub details: Vec<String>,
}

/// Build the standard error envelope.
pub fn error_envelope(code: i32, message: impl Into<String>, details: &[&str]) -> ErrorEnvelope {
    ErrorEnvelope {
        error: ErrorBody {
            code,
            message: message.into(),
            details: details.iter().map(|d| (*d).to_string()).collect(),
        },
    }
}

/// Error envelope rendered straight to UTF-8 JSON bytes.
pub fn error_envelope_bytes(code: i32, message: impl Into<String>, details: &[&str]) -> Vec<u8> {
    let envelope = error_envelope(code, message, details);
    // String/int/Vec<String> fields cannot fail to serialize.
    serde_json::to_vec(&envelope).expect("error envelope must serialize to JSON")
}

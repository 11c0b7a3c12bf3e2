use crate::provider::ProviderError;

/// Failure raised by a resource or operation handler.
///
/// Handlers never build error envelopes themselves (with one deliberate
/// exception, the unknown-sub-resource case in the dispatcher); they return
/// one of these and the request entry point flattens it into the code-500
/// envelope exactly once.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// Operation input failed validation. The message enumerates the
    /// accepted values and is surfaced to the client verbatim.
    #[error("{0}")]
    InvalidArgument(String),

    /// JSON processing failed: malformed `operationInput`, or a response
    /// body that would not serialize.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A lookup against the map-service backend failed.
    #[error(transparent)]
    Backend(#[from] ProviderError),

    /// A request arrived between `detach()` and the next `attach()`.
    #[error("no map service provider attached")]
    Detached,
}

//! The extension object hosted by the map server.
//!
//! The host drives the lifecycle: `attach` hands over the backend provider
//! once at startup, `detach` drops it at shutdown, and every request in
//! between arrives through [`LayerRestExtension::handle_rest_request`].

use std::sync::Arc;

use crate::error::RequestError;
use crate::handlers;
use crate::log::{LogSeverity, ServerLog};
use crate::protocol::{error_envelope_bytes, ResponseProperties};
use crate::provider::MapServiceProvider;
use crate::schema;

pub struct LayerRestExtension {
    provider: Option<Arc<dyn MapServiceProvider>>,
    log: Arc<dyn ServerLog>,
}

impl LayerRestExtension {
    pub fn new(log: Arc<dyn ServerLog>) -> Self {
        Self {
            provider: None,
            log,
        }
    }

    /// Take a read-only reference to the backend map service. Called once by
    /// the host before any request is routed here.
    pub fn attach(&mut self, provider: Arc<dyn MapServiceProvider>) {
        self.log
            .add_message(LogSeverity::Info, 200, "Beginning attach of map REST extension.");
        self.provider = Some(provider);
        self.log
            .add_message(LogSeverity::Info, 200, "Attached map REST extension.");
    }

    /// Release the backend reference. Requests arriving afterwards are
    /// answered with the error envelope.
    pub fn detach(&mut self) {
        self.log
            .add_message(LogSeverity::Info, 200, "Shutting down map REST extension.");
        self.provider = None;
    }

    fn provider(&self) -> Result<&dyn MapServiceProvider, RequestError> {
        self.provider
            .as_deref()
            .ok_or(RequestError::Detached)
    }

    /// The single externally-callable request function.
    ///
    /// Routes to the resource resolver when no operation is named, otherwise
    /// to the operation dispatcher. Returns `None` when neither produced
    /// content (unknown resource or operation — an empty body, not an
    /// error). Every failure is caught here, logged, and converted into the
    /// code-500 envelope; this function itself never fails.
    ///
    /// `response_properties` is written exactly once, on the success path
    /// only — properties collected before a failure are discarded with it.
    #[allow(clippy::too_many_arguments)]
    pub fn handle_rest_request(
        &self,
        _capabilities: &str,
        resource_name: &str,
        operation_name: &str,
        operation_input: &str,
        _output_format: &str,
        _request_properties: &str,
        response_properties: &mut Option<String>,
    ) -> Option<Vec<u8>> {
        let mut properties = ResponseProperties::new();

        let outcome = if operation_name.is_empty() {
            self.provider()
                .and_then(|p| handlers::resolve_resource(p, resource_name, &mut properties))
        } else {
            self.provider().and_then(|p| {
                handlers::dispatch_operation(
                    p,
                    self.log.as_ref(),
                    resource_name,
                    operation_name,
                    operation_input,
                    &mut properties,
                )
            })
        };

        match outcome {
            Ok(body) => {
                let serialized = serde_json::to_string(&properties)
                    .expect("response properties must serialize to JSON");
                *response_properties = Some(serialized);
                body
            }
            Err(e) => {
                self.log
                    .add_message(LogSeverity::Error, 500, &e.to_string());
                Some(error_envelope_bytes(
                    500,
                    format!("Exception occurred: {e}"),
                    &["No details specified."],
                ))
            }
        }
    }

    /// The resource/operation tree in JSON, for client discovery.
    pub fn schema(&self) -> String {
        schema::describe_schema(self.log.as_ref())
    }
}

//! Stdio host shim: newline-delimited JSON request frames in, JSON response
//! lines out. This stands in for the real host/transport layer; all routing
//! semantics live in [`LayerRestExtension`].

use std::sync::Arc;

use serde::Serialize;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use crate::extension::LayerRestExtension;
use crate::log::{LogSeverity, ServerLog};
use crate::protocol::WireRequest;

/// Maximum bytes per request frame (1 MiB).
const MAX_FRAME_BYTES: usize = 1024 * 1024;

/// One response line. `body` is the UTF-8 JSON the extension produced
/// (absent when the request matched nothing); `response_properties` is the
/// serialized header map, absent on the error path.
#[derive(Debug, Serialize)]
struct WireResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<String>,
    #[serde(rename = "responseProperties", skip_serializing_if = "Option::is_none")]
    response_properties: Option<String>,
}

pub struct RestServer {
    extension: LayerRestExtension,
    log: Arc<dyn ServerLog>,
}

impl RestServer {
    pub fn new(extension: LayerRestExtension, log: Arc<dyn ServerLog>) -> Self {
        Self { extension, log }
    }

    pub async fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let stdin = tokio::io::stdin();
        let stdout = tokio::io::stdout();
        self.run_with(stdin, stdout).await
    }

    /// Serve frames from `input` until EOF, writing one response line per
    /// frame to `output`. [`run`](Self::run) wires this to stdio; embedders
    /// and tests may drive any reader/writer pair.
    pub async fn run_with<R, W>(
        &mut self,
        input: R,
        mut output: W,
    ) -> Result<(), Box<dyn std::error::Error>>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut reader = BufReader::new(input);
        let mut raw = Vec::new();

        loop {
            raw.clear();
            let n = reader.read_until(b'\n', &mut raw).await?;
            if n == 0 {
                break;
            }

            if n > MAX_FRAME_BYTES {
                self.log.add_message(
                    LogSeverity::Warning,
                    500,
                    &format!("Frame too large: {n} bytes (limit {MAX_FRAME_BYTES})"),
                );
                write_invalid_frame(&mut output, "request frame too large").await?;
                continue;
            }

            let trimmed = match std::str::from_utf8(&raw) {
                Ok(s) => s.trim(),
                Err(_) => {
                    write_invalid_frame(&mut output, "request frame is not UTF-8").await?;
                    continue;
                }
            };

            if trimmed.is_empty() {
                continue;
            }

            let req: WireRequest = match serde_json::from_str(trimmed) {
                Ok(r) => r,
                Err(e) => {
                    write_invalid_frame(&mut output, &format!("invalid request frame: {e}"))
                        .await?;
                    continue;
                }
            };

            let resp = self.handle(&req);
            write_line(&mut output, &resp).await?;
        }

        Ok(())
    }

    fn handle(&self, req: &WireRequest) -> WireResponse {
        if req.schema {
            return WireResponse {
                body: Some(self.extension.schema()),
                response_properties: None,
            };
        }

        let mut response_properties = None;
        let body = self.extension.handle_rest_request(
            &req.capabilities,
            &req.resource_name,
            &req.operation_name,
            &req.operation_input,
            &req.output_format,
            &req.request_properties,
            &mut response_properties,
        );

        WireResponse {
            // Extension bodies are serde_json-rendered and therefore UTF-8.
            body: body.map(|b| String::from_utf8(b).expect("response body must be UTF-8 JSON")),
            response_properties,
        }
    }
}

async fn write_invalid_frame<W: AsyncWrite + Unpin>(
    output: &mut W,
    message: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let envelope = crate::protocol::error_envelope(500, message, &["No details specified."]);
    let resp = WireResponse {
        body: Some(serde_json::to_string(&envelope)?),
        response_properties: None,
    };
    write_line(output, &resp).await
}

async fn write_line<W: AsyncWrite + Unpin>(
    output: &mut W,
    resp: &WireResponse,
) -> Result<(), Box<dyn std::error::Error>> {
    let out = serde_json::to_string(resp)?;
    output.write_all(out.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await?;
    Ok(())
}

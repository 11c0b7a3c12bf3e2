//! Integration tests for the stdio host shim, driven over in-memory
//! reader/writer pairs.

use std::sync::{Arc, Mutex};

use map_rest_extension::extension::LayerRestExtension;
use map_rest_extension::log::{LogSeverity, NullLog, ServerLog};
use map_rest_extension::provider::StaticMapService;
use map_rest_extension::server::RestServer;
use serde_json::Value;

const FIXTURE: &str = r#"{
  "layers": [
    {"id": 1, "name": "Roads", "type": "Feature Layer", "description": "Road centerlines", "featureCount": 120},
    {"id": 2, "name": "Elevation", "type": "Raster Layer", "description": "DEM tiles"}
  ]
}"#;

/// Captures every `(severity, code, message)` triple for assertions.
#[derive(Default)]
struct RecordingLog {
    messages: Mutex<Vec<(LogSeverity, i32, String)>>,
}

impl ServerLog for RecordingLog {
    fn add_message(&self, severity: LogSeverity, code: i32, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((severity, code, message.to_string()));
    }
}

fn fixture_server(log: Arc<dyn ServerLog>) -> RestServer {
    let mut extension = LayerRestExtension::new(log.clone());
    extension.attach(Arc::new(StaticMapService::from_json(FIXTURE).unwrap()));
    RestServer::new(extension, log)
}

/// Feed `input` through the server and collect one parsed JSON value per
/// response line.
async fn serve(input: &str, log: Arc<dyn ServerLog>) -> Vec<Value> {
    let mut server = fixture_server(log);
    let mut out: Vec<u8> = Vec::new();
    server.run_with(input.as_bytes(), &mut out).await.unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).expect("response lines must be valid JSON"))
        .collect()
}

#[tokio::test]
async fn resource_frame_round_trips_body_and_properties() {
    let lines = serve("{\"resourceName\":\"layers\"}\n", Arc::new(NullLog)).await;
    assert_eq!(lines.len(), 1);

    let body: Value = serde_json::from_str(lines[0]["body"].as_str().unwrap()).unwrap();
    assert_eq!(body["layers"]["layerCount"].as_u64().unwrap(), 2);
    assert_eq!(
        body["layers"]["layersInfo"][0]["featureCount"].as_u64().unwrap(),
        120
    );

    let props: Value =
        serde_json::from_str(lines[0]["responseProperties"].as_str().unwrap()).unwrap();
    assert_eq!(props["Content-Type"].as_str().unwrap(), "application/json");
}

#[tokio::test]
async fn operation_frame_round_trips() {
    let frame =
        "{\"operationName\":\"getLayerCountByType\",\"operationInput\":\"{\\\"type\\\":\\\"feature\\\"}\"}\n";
    let lines = serve(frame, Arc::new(NullLog)).await;
    assert_eq!(lines.len(), 1);

    let body: Value = serde_json::from_str(lines[0]["body"].as_str().unwrap()).unwrap();
    assert_eq!(body["count"].as_i64().unwrap(), 1);
}

#[tokio::test]
async fn schema_frame_is_answered_without_properties() {
    let lines = serve("{\"schema\":true}\n", Arc::new(NullLog)).await;
    assert_eq!(lines.len(), 1);

    let body: Value = serde_json::from_str(lines[0]["body"].as_str().unwrap()).unwrap();
    assert_eq!(body["operations"][0]["name"].as_str().unwrap(), "getLayerCountByType");
    assert!(lines[0].get("responseProperties").is_none());
}

#[tokio::test]
async fn unknown_resource_frame_has_properties_but_no_body() {
    let lines = serve("{\"resourceName\":\"parcels\"}\n", Arc::new(NullLog)).await;
    assert_eq!(lines.len(), 1);
    assert!(lines[0].get("body").is_none());
    assert_eq!(lines[0]["responseProperties"].as_str().unwrap(), "{}");
}

#[tokio::test]
async fn non_json_frame_is_answered_with_envelope() {
    let lines = serve("not a frame\n", Arc::new(NullLog)).await;
    assert_eq!(lines.len(), 1);

    let body: Value = serde_json::from_str(lines[0]["body"].as_str().unwrap()).unwrap();
    assert_eq!(body["error"]["code"].as_i64().unwrap(), 500);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("invalid request frame"));
    assert!(lines[0].get("responseProperties").is_none());
}

#[tokio::test]
async fn oversize_frame_is_rejected_and_serving_continues() {
    let log = Arc::new(RecordingLog::default());
    let input = format!("{}\n{{\"schema\":true}}\n", "x".repeat(2 * 1024 * 1024));
    let lines = serve(&input, log.clone()).await;
    assert_eq!(lines.len(), 2, "the loop must survive an oversize frame");

    let body: Value = serde_json::from_str(lines[0]["body"].as_str().unwrap()).unwrap();
    assert_eq!(body["error"]["code"].as_i64().unwrap(), 500);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("request frame too large"));

    // The next frame is still served normally.
    let schema: Value = serde_json::from_str(lines[1]["body"].as_str().unwrap()).unwrap();
    assert_eq!(schema["resources"][0]["name"].as_str().unwrap(), "layers");

    let messages = log.messages.lock().unwrap();
    assert!(
        messages
            .iter()
            .any(|(s, c, m)| *s == LogSeverity::Warning && *c == 500 && m.contains("Frame too large")),
        "oversize frames must be reported at warning severity"
    );
}

#[tokio::test]
async fn blank_lines_are_skipped() {
    let lines = serve("\n\n{\"schema\":true}\n", Arc::new(NullLog)).await;
    assert_eq!(lines.len(), 1);
}

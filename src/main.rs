use std::sync::Arc;

use map_rest_extension::config::ServerConfig;
use map_rest_extension::extension::LayerRestExtension;
use map_rest_extension::log::TracingLog;
use map_rest_extension::provider::StaticMapService;
use map_rest_extension::server::RestServer;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("map-rest-server: configuration error: {e}");
            std::process::exit(1);
        }
    };

    let provider = match StaticMapService::from_file(&config.map_definition) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("map-rest-server: cannot load map service definition: {e}");
            std::process::exit(1);
        }
    };

    let log = Arc::new(TracingLog);
    let mut extension = LayerRestExtension::new(log.clone());
    extension.attach(Arc::new(provider));

    let mut server = RestServer::new(extension, log);
    if let Err(e) = server.run().await {
        eprintln!("map-rest-server: fatal error: {e}");
        std::process::exit(1);
    }
}

use std::path::PathBuf;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub map_definition: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment.
    ///
    /// - `MAP_SERVICE_DEFINITION` (required) — path to the JSON map-service
    ///   definition served by the standalone binary
    pub fn from_env() -> Result<Self, String> {
        let map_definition = std::env::var("MAP_SERVICE_DEFINITION")
            .map(PathBuf::from)
            .map_err(|_| "MAP_SERVICE_DEFINITION environment variable is not set".to_string())?;

        Ok(Self { map_definition })
    }
}

// Configuration module entry point
// Loads layered configuration and holds the shared runtime state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{
    ArtifactConfig, Config, EndpointsConfig, LoggingConfig, PerformanceConfig, Profile,
    ServerConfig, UploadConfig,
};

/// Default artifact location, relative to the working directory
pub const DEFAULT_ARTIFACT_PATH: &str = "android/app/build/outputs/apk/release/app-release.apk";

/// Default config file name (without extension)
pub const DEFAULT_CONFIG_FILE: &str = "apkdrop";

impl Config {
    /// Load configuration from specified file path (extension optional)
    ///
    /// Missing files are allowed; environment variables prefixed with
    /// `APKDROP_` override file values (`APKDROP_SERVER__PORT=9000`).
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("APKDROP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("artifact.path", DEFAULT_ARTIFACT_PATH)?
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive", true)?
            .set_default("performance.connection_timeout", 300)?
            .set_default("performance.chunk_size", 65_536)? // 64KB
            .set_default("upload.profile", "fallback")?
            .set_default("upload.timeout", 300)?
            .set_default(
                "upload.manual_hosts",
                vec![
                    "https://file.io",
                    "https://transfer.sh",
                    "https://0x0.st",
                    "https://gofile.io",
                ],
            )?
            .set_default("upload.endpoints.gofile_api", "https://api.gofile.io")?
            .set_default(
                "upload.endpoints.gofile_upload",
                "https://{server}.gofile.io/uploadFile",
            )?
            .set_default("upload.endpoints.anonfiles", "https://api.anonfiles.com/upload")?
            .set_default("upload.endpoints.fileio", "https://file.io")?
            .set_default("upload.endpoints.transfer", "https://transfer.sh")?
            .set_default("upload.endpoints.zero_x0", "https://0x0.st")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

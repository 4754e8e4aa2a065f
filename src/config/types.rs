// Configuration types module
// Defines all configuration-related data structures

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub artifact: ArtifactConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub upload: UploadConfig,
}

/// Location of the package being distributed
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ArtifactConfig {
    pub path: String,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Access log format (combined, common or json)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "combined".to_string()
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    /// HTTP/1.1 persistent connections on or off
    pub keep_alive: bool,
    /// Upper bound for one connection, in seconds
    pub connection_timeout: u64,
    pub max_connections: Option<u64>,
    /// Size of each chunk read from disk while streaming a download
    pub chunk_size: usize,
}

/// Named sets of upload backends with their pacing
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// GoFile, then AnonFiles, back to back
    Primary,
    /// File.io, Transfer.sh, then 0x0.st with a pause between attempts
    Fallback,
}

/// Upload configuration
#[derive(Debug, Deserialize, Clone)]
pub struct UploadConfig {
    pub profile: Profile,
    /// Per-request timeout in seconds for backends that bound their upload
    pub timeout: u64,
    /// Pause between attempts in seconds; the profile decides when unset
    #[serde(default)]
    pub delay: Option<u64>,
    /// Explicit backend order, overriding the profile's list
    #[serde(default)]
    pub backends: Option<Vec<String>>,
    /// Hosting sites suggested when every automatic upload failed
    pub manual_hosts: Vec<String>,
    pub endpoints: EndpointsConfig,
}

/// Endpoint URLs for every supported backend
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EndpointsConfig {
    /// Base URL of the GoFile API used to pick an upload server
    pub gofile_api: String,
    /// GoFile upload URL; `{server}` is replaced by the picked server name
    pub gofile_upload: String,
    pub anonfiles: String,
    pub fileio: String,
    pub transfer: String,
    pub zero_x0: String,
}

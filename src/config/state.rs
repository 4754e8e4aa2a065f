// Application state module
// Shared, read-only state handed to every connection

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::artifact::Artifact;

use super::types::Config;

/// Bytes kept literal in the download path: RFC 3986 unreserved characters
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Application state
pub struct AppState {
    pub config: Config,
    pub artifact: Artifact,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            artifact: Artifact::new(&config.artifact.path),
            config: config.clone(),
        }
    }

    /// Request path under which the artifact is downloadable, percent-encoded
    pub fn download_path(&self) -> String {
        format!(
            "/{}",
            utf8_percent_encode(self.artifact.file_name(), PATH_SEGMENT)
        )
    }

    /// Whether a raw request path names the artifact, however it was encoded
    pub fn is_download_path(&self, path: &str) -> bool {
        path.strip_prefix('/').is_some_and(|segment| {
            percent_decode_str(segment).decode_utf8_lossy() == self.artifact.file_name()
        })
    }
}

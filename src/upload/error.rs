//! Upload error types

use std::path::PathBuf;
use thiserror::Error;

/// Longest response body excerpt kept in an error
const BODY_EXCERPT_LEN: usize = 300;

/// Why a single upload attempt produced no URL
#[derive(Debug, Error)]
pub enum UploadError {
    /// The artifact is missing; no request was sent
    #[error("file {} not found", .0.display())]
    MissingArtifact(PathBuf),

    #[error("failed to read artifact: {0}")]
    Io(#[from] std::io::Error),

    /// Connection, TLS or timeout failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error {status}: {body}")]
    Status { status: u16, body: String },

    /// 2xx response whose body reports failure or carries no URL
    #[error("upload rejected: {0}")]
    Rejected(String),
}

impl UploadError {
    pub fn status(status: u16, body: &str) -> Self {
        Self::Status {
            status,
            body: excerpt(body),
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(reason.into())
    }
}

/// Problems with the configured backend list, reported before any upload
#[derive(Debug, Error)]
pub enum BackendConfigError {
    #[error("unknown upload backend '{0}' (expected one of: gofile, anonfiles, fileio, transfer, 0x0)")]
    UnknownBackend(String),

    #[error("no upload backends configured")]
    Empty,

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

fn excerpt(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(BODY_EXCERPT_LEN) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_body_is_truncated() {
        let long = "x".repeat(1000);
        let UploadError::Status { status, body } = UploadError::status(502, &long) else {
            panic!("expected status error");
        };
        assert_eq!(status, 502);
        assert_eq!(body.len(), BODY_EXCERPT_LEN + 3);
        assert!(body.ends_with("..."));
    }

    #[test]
    fn test_display() {
        let err = UploadError::MissingArtifact(PathBuf::from("build/app.apk"));
        assert_eq!(err.to_string(), "file build/app.apk not found");
        assert_eq!(
            UploadError::status(500, " oops \n").to_string(),
            "HTTP error 500: oops"
        );
    }
}

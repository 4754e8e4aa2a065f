//! Package download handler
//!
//! Streams the artifact from disk in bounded chunks; nothing is buffered whole.

use crate::config::AppState;
use crate::http::{self, body, ResponseBody};
use crate::logger;
use hyper::Response;
use std::io;

const NOT_FOUND_MESSAGE: &str = "APK file not found";

/// Serve the artifact as an attachment, or 404 when it is missing
pub async fn serve_artifact(state: &AppState, is_head: bool) -> Response<ResponseBody> {
    let artifact = &state.artifact;
    match artifact.open().await {
        Ok((file, size)) => {
            let body = if is_head {
                drop(file);
                body::empty()
            } else {
                body::file_stream(file, size, state.config.performance.chunk_size)
            };
            http::build_download_response(body, artifact.file_name(), size)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            logger::log_warning(&format!(
                "Download requested but {} is missing",
                artifact.path().display()
            ));
            http::build_404_response(NOT_FOUND_MESSAGE)
        }
        Err(e) => {
            logger::log_error(&format!(
                "Failed to open '{}': {e}",
                artifact.path().display()
            ));
            http::build_500_response()
        }
    }
}

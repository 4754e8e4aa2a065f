//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, dispatch and access logging.

use crate::config::AppState;
use crate::handler::{download, page};
use crate::http::{self, ResponseBody};
use crate::logger::{self, AccessLogEntry};
use hyper::header::{CONTENT_LENGTH, USER_AGENT};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for HTTP request handling
///
/// Generic over the request body since no route reads it.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<ResponseBody>, Infallible> {
    let started = Instant::now();
    let method = req.method();
    let path = req.uri().path();
    let is_head = *method == Method::HEAD;

    logger::log_debug(&format!(
        "[Request] {} {} {:?}",
        method,
        req.uri(),
        req.version()
    ));

    let response = match check_http_method(method) {
        Some(resp) => resp,
        None => route_request(path, is_head, &state).await,
    };

    if state.config.logging.access_log {
        let mut entry = AccessLogEntry::new(
            peer_addr.ip().to_string(),
            method.to_string(),
            path.to_string(),
        );
        entry.http_version = format!("{:?}", req.version())
            .trim_start_matches("HTTP/")
            .to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = response
            .headers()
            .get(CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        entry.user_agent = req
            .headers()
            .get(USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method) -> Option<Response<ResponseBody>> {
    match *method {
        Method::GET | Method::HEAD => None,
        Method::OPTIONS => Some(http::build_options_response()),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// The download path serves the artifact; every other path gets the info page
async fn route_request(path: &str, is_head: bool, state: &AppState) -> Response<ResponseBody> {
    if state.is_download_path(path) {
        download::serve_artifact(state, is_head).await
    } else {
        page::serve_info_page(state, is_head).await
    }
}

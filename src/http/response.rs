//! HTTP response building module
//!
//! Builders for the handful of responses the download server sends.

use hyper::header::{ALLOW, CONTENT_DISPOSITION, CONTENT_LENGTH, CONTENT_TYPE};
use hyper::{Response, StatusCode};

use super::body::{self, ResponseBody};
use super::mime;

const ALLOWED_METHODS: &str = "GET, HEAD, OPTIONS";

/// Build 404 Not Found response
pub fn build_404_response(message: &'static str) -> Response<ResponseBody> {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header(CONTENT_TYPE, mime::TEXT_CONTENT_TYPE)
        .header(CONTENT_LENGTH, message.len())
        .body(body::full(message))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(body::full(message))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<ResponseBody> {
    Response::builder()
        .status(StatusCode::METHOD_NOT_ALLOWED)
        .header(CONTENT_TYPE, mime::TEXT_CONTENT_TYPE)
        .header(ALLOW, ALLOWED_METHODS)
        .body(body::full("405 Method Not Allowed"))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(body::full("405 Method Not Allowed"))
        })
}

/// Build OPTIONS response
pub fn build_options_response() -> Response<ResponseBody> {
    Response::builder()
        .status(StatusCode::NO_CONTENT)
        .header(ALLOW, ALLOWED_METHODS)
        .body(body::empty())
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            Response::new(body::empty())
        })
}

/// Build 500 response for local I/O failures
pub fn build_500_response() -> Response<ResponseBody> {
    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(CONTENT_TYPE, mime::TEXT_CONTENT_TYPE)
        .body(body::full("500 Internal Server Error"))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(body::full("500 Internal Server Error"))
        })
}

/// Build generic HTML response
pub fn build_html_response(content: String, is_head: bool) -> Response<ResponseBody> {
    let content_length = content.len();
    let body = if is_head {
        body::empty()
    } else {
        body::full(content)
    };

    Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, mime::HTML_CONTENT_TYPE)
        .header(CONTENT_LENGTH, content_length)
        .body(body)
        .unwrap_or_else(|e| {
            log_build_error("HTML", &e);
            Response::new(body::empty())
        })
}

/// Build the attachment response for a package download
///
/// `body` is empty for HEAD requests; `size` is always the full file size.
pub fn build_download_response(
    body: ResponseBody,
    file_name: &str,
    size: u64,
) -> Response<ResponseBody> {
    Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, mime::APK_CONTENT_TYPE)
        .header(CONTENT_DISPOSITION, mime::attachment_disposition(file_name))
        .header(CONTENT_LENGTH, size)
        .body(body)
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            build_500_response()
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

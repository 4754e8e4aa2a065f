//! Request helpers shared by the HTTP backends

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde_json::Value;

use super::UploadError;
use crate::artifact::Artifact;
use crate::http::mime::APK_CONTENT_TYPE;

/// Build a client; `None` leaves requests unbounded in time
pub fn build_client(timeout: Option<Duration>) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder().user_agent(concat!("apkdrop/", env!("CARGO_PKG_VERSION")));
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

/// Multipart form with the artifact in the `file` field
pub async fn file_form(artifact: &Artifact) -> Result<Form, UploadError> {
    let data = artifact.read().await?;
    let part = Part::bytes(data)
        .file_name(artifact.file_name().to_string())
        .mime_str(APK_CONTENT_TYPE)?;
    Ok(Form::new().part("file", part))
}

/// Read the body of a response, failing on non-2xx status
pub async fn success_body(response: Response) -> Result<String, UploadError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(UploadError::status(status.as_u16(), &body));
    }
    Ok(body)
}

pub fn parse_json(body: &str) -> Result<Value, UploadError> {
    serde_json::from_str(body)
        .map_err(|e| UploadError::rejected(format!("malformed response ({e}): {}", body.trim())))
}

/// String at a JSON pointer, e.g. `/data/file/url/full`
pub fn string_at(value: &Value, pointer: &str) -> Result<String, UploadError> {
    value
        .pointer(pointer)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .ok_or_else(|| UploadError::rejected(format!("response has no {pointer}: {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_at() {
        let value = json!({"data": {"file": {"url": {"full": "https://x/1"}}}});
        assert_eq!(string_at(&value, "/data/file/url/full").unwrap(), "https://x/1");
        assert!(matches!(
            string_at(&value, "/data/missing"),
            Err(UploadError::Rejected(_))
        ));
        assert!(string_at(&json!({"link": ""}), "/link").is_err());
        assert!(string_at(&json!({"link": 3}), "/link").is_err());
    }

    #[test]
    fn test_parse_json_rejects_html() {
        let err = parse_json("<html>maintenance</html>").unwrap_err();
        assert!(err.to_string().contains("malformed response"));
    }
}

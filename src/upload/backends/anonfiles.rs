//! AnonFiles backend

use async_trait::async_trait;
use reqwest::Client;

use crate::artifact::Artifact;
use crate::upload::request::{file_form, parse_json, string_at, success_body};
use crate::upload::{Backend, UploadError};

pub struct AnonFiles {
    client: Client,
    url: String,
}

impl AnonFiles {
    pub const NAME: &'static str = "AnonFiles.com";

    pub fn new(client: Client, url: &str) -> Self {
        Self {
            client,
            url: url.to_string(),
        }
    }
}

#[async_trait]
impl Backend for AnonFiles {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn upload(&self, artifact: &Artifact) -> Result<String, UploadError> {
        let form = file_form(artifact).await?;
        let response = self.client.post(&self.url).multipart(form).send().await?;
        parse_response(&success_body(response).await?)
    }
}

/// `{"status":true,"data":{"file":{"url":{"full":"..."}}}}`
pub fn parse_response(body: &str) -> Result<String, UploadError> {
    let value = parse_json(body)?;
    if value["status"].as_bool() != Some(true) {
        return Err(UploadError::rejected(format!("upload failed: {value}")));
    }
    string_at(&value, "/data/file/url/full")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success() {
        let body = r#"{"status":true,"data":{"file":{"url":{"full":"https://anonfiles.com/a1/app_apk","short":"https://anonfiles.com/a1"}}}}"#;
        assert_eq!(
            parse_response(body).unwrap(),
            "https://anonfiles.com/a1/app_apk"
        );
    }

    #[test]
    fn test_parse_failure() {
        let body = r#"{"status":false,"error":{"message":"The file is too large.","code":31}}"#;
        let err = parse_response(body).unwrap_err();
        assert!(err.to_string().contains("too large"));
        assert!(parse_response(r#"{"status":"true"}"#).is_err());
    }
}

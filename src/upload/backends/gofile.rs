//! GoFile.io backend
//!
//! Two steps: ask the API for an upload server, then post the file to it.

use async_trait::async_trait;
use reqwest::Client;

use crate::artifact::Artifact;
use crate::upload::request::{file_form, parse_json, string_at, success_body};
use crate::upload::{Backend, UploadError};

pub struct GoFile {
    client: Client,
    api_base: String,
    /// Upload URL with a `{server}` placeholder
    upload_template: String,
}

impl GoFile {
    pub const NAME: &'static str = "GoFile.io";

    pub fn new(client: Client, api_base: &str, upload_template: &str) -> Self {
        Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            upload_template: upload_template.to_string(),
        }
    }

    async fn pick_server(&self) -> Result<String, UploadError> {
        let url = format!("{}/getServer", self.api_base);
        let response = self.client.get(url).send().await?;
        parse_server(&success_body(response).await?)
    }
}

#[async_trait]
impl Backend for GoFile {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn upload(&self, artifact: &Artifact) -> Result<String, UploadError> {
        let server = self.pick_server().await?;
        let url = self.upload_template.replace("{server}", &server);
        let form = file_form(artifact).await?;
        let response = self.client.post(url).multipart(form).send().await?;
        parse_upload(&success_body(response).await?)
    }
}

/// `{"status":"ok","data":{"server":"store1"}}`
pub fn parse_server(body: &str) -> Result<String, UploadError> {
    let value = parse_json(body)?;
    if value["status"] != "ok" {
        return Err(UploadError::rejected(format!("GoFile API error: {value}")));
    }
    let server = string_at(&value, "/data/server")?;
    // The name is spliced into a host name
    if !server.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(UploadError::rejected(format!(
            "GoFile returned an invalid server name: {server}"
        )));
    }
    Ok(server)
}

/// `{"status":"ok","data":{"downloadPage":"https://gofile.io/d/abc"}}`
pub fn parse_upload(body: &str) -> Result<String, UploadError> {
    let value = parse_json(body)?;
    if value["status"] != "ok" {
        return Err(UploadError::rejected(format!("upload failed: {value}")));
    }
    string_at(&value, "/data/downloadPage")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_server() {
        assert_eq!(
            parse_server(r#"{"status":"ok","data":{"server":"store4"}}"#).unwrap(),
            "store4"
        );
        assert!(parse_server(r#"{"status":"error-rateLimit","data":{}}"#).is_err());
        assert!(parse_server(r#"{"status":"ok","data":{"server":"evil.com/x?"}}"#).is_err());
    }

    #[test]
    fn test_parse_upload() {
        let body = r#"{"status":"ok","data":{"downloadPage":"https://gofile.io/d/Xy12","code":"Xy12"}}"#;
        assert_eq!(parse_upload(body).unwrap(), "https://gofile.io/d/Xy12");

        let err = parse_upload(r#"{"status":"error-notPremium"}"#).unwrap_err();
        assert!(err.to_string().contains("error-notPremium"));

        assert!(parse_upload(r#"{"status":"ok","data":{}}"#).is_err());
    }
}

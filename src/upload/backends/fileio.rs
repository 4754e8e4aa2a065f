//! File.io backend

use async_trait::async_trait;
use reqwest::Client;

use crate::artifact::Artifact;
use crate::upload::request::{file_form, parse_json, string_at, success_body};
use crate::upload::{Backend, UploadError};

pub struct FileIo {
    client: Client,
    url: String,
}

impl FileIo {
    pub const NAME: &'static str = "File.io";

    pub fn new(client: Client, url: &str) -> Self {
        Self {
            client,
            url: url.to_string(),
        }
    }
}

#[async_trait]
impl Backend for FileIo {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn upload(&self, artifact: &Artifact) -> Result<String, UploadError> {
        let form = file_form(artifact).await?;
        let response = self.client.post(&self.url).multipart(form).send().await?;
        parse_response(&success_body(response).await?)
    }
}

/// `{"success":true,"link":"https://file.io/abc"}`
pub fn parse_response(body: &str) -> Result<String, UploadError> {
    let value = parse_json(body)?;
    if value.get("success").and_then(serde_json::Value::as_bool) != Some(true) {
        return Err(UploadError::rejected(format!("upload failed: {value}")));
    }
    string_at(&value, "/link")
}

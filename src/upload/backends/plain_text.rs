//! Backends that answer with the download URL as the raw response body
//! (Transfer.sh, 0x0.st)

use async_trait::async_trait;
use reqwest::Client;

use crate::artifact::Artifact;
use crate::upload::request::{file_form, success_body};
use crate::upload::{Backend, UploadError};

pub struct PlainText {
    name: &'static str,
    client: Client,
    url: String,
}

impl PlainText {
    pub const TRANSFER_SH: &'static str = "Transfer.sh";
    pub const ZERO_X0: &'static str = "0x0.st";

    pub fn new(name: &'static str, client: Client, url: &str) -> Self {
        Self {
            name,
            client,
            url: url.to_string(),
        }
    }
}

#[async_trait]
impl Backend for PlainText {
    fn name(&self) -> &str {
        self.name
    }

    async fn upload(&self, artifact: &Artifact) -> Result<String, UploadError> {
        let form = file_form(artifact).await?;
        let response = self.client.post(&self.url).multipart(form).send().await?;
        parse_response(&success_body(response).await?)
    }
}

pub fn parse_response(body: &str) -> Result<String, UploadError> {
    let url = body.trim();
    if url.is_empty() {
        return Err(UploadError::rejected("empty response body"));
    }
    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_response() {
        assert_eq!(
            parse_response("https://0x0.st/abc.apk\n").unwrap(),
            "https://0x0.st/abc.apk"
        );
        assert!(parse_response("  \n").is_err());
    }
}

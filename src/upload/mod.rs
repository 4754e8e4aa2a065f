//! Upload module
//!
//! Pushes the artifact to anonymous file hosts, one backend after another,
//! and falls back to manual instructions when none of them accepts it.

pub mod backends;
mod error;
pub mod fallback;
pub mod instructions;
pub mod profile;
pub mod request;

use async_trait::async_trait;

use crate::artifact::Artifact;
use crate::config::{Config, Profile};
use crate::logger;

pub use error::{BackendConfigError, UploadError};
pub use fallback::{FallbackRunner, UploadOutcome};
pub use instructions::ManualInstructions;

/// One file hosting service
#[async_trait]
pub trait Backend: Send + Sync {
    fn name(&self) -> &str;

    /// Perform exactly one upload attempt and return the download URL
    async fn upload(&self, artifact: &Artifact) -> Result<String, UploadError>;
}

/// Final result of an upload run
#[derive(Debug)]
pub enum UploadReport {
    Uploaded(UploadOutcome),
    /// Every backend failed; carries the rendered manual instructions
    Manual(String),
}

/// Run the configured fallback chain and report the outcome to the operator
pub async fn upload_artifact(
    config: &Config,
    profile: Option<Profile>,
) -> Result<UploadReport, BackendConfigError> {
    let runner = profile::build_runner(&config.upload, profile)?;
    let artifact = Artifact::new(&config.artifact.path);
    Ok(run_with(&runner, &artifact, &config.upload.manual_hosts).await)
}

async fn run_with(
    runner: &FallbackRunner,
    artifact: &Artifact,
    manual_hosts: &[String],
) -> UploadReport {
    logger::log_info(&format!(
        "Starting APK upload process: {}",
        runner.backend_names().join(" -> ")
    ));

    if let Some(outcome) = runner.run(artifact).await {
        logger::log_block(&format!("\nSUCCESS! Download URL: {}", outcome.url));
        return UploadReport::Uploaded(outcome);
    }

    let text = ManualInstructions::for_artifact(artifact, manual_hosts)
        .await
        .to_string();
    logger::log_block(&format!("\n{text}"));
    UploadReport::Manual(text)
}

//! Ordered, stop-on-first-success upload loop

use std::time::Duration;

use super::{Backend, UploadError};
use crate::artifact::Artifact;
use crate::logger;

/// URL obtained from the first backend that accepted the artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOutcome {
    pub backend: String,
    pub url: String,
}

/// Tries each backend once, in order, until one returns a URL
pub struct FallbackRunner {
    backends: Vec<Box<dyn Backend>>,
    delay: Duration,
}

impl FallbackRunner {
    /// `delay` is slept after each failed attempt that is followed by another
    pub fn new(backends: Vec<Box<dyn Backend>>, delay: Duration) -> Self {
        Self { backends, delay }
    }

    pub fn backend_names(&self) -> Vec<&str> {
        self.backends.iter().map(|b| b.name()).collect()
    }

    pub const fn delay(&self) -> Duration {
        self.delay
    }

    pub async fn run(&self, artifact: &Artifact) -> Option<UploadOutcome> {
        let last = self.backends.len().saturating_sub(1);

        for (index, backend) in self.backends.iter().enumerate() {
            let name = backend.name();
            logger::log_upload_attempt(name);

            match attempt(backend.as_ref(), artifact).await {
                Ok(url) => {
                    logger::log_upload_success(name, &url);
                    return Some(UploadOutcome {
                        backend: name.to_string(),
                        url,
                    });
                }
                Err(e) => logger::log_upload_failed(name, &e),
            }

            if index < last {
                logger::log_info(&format!("{name} failed, trying next service..."));
                if !self.delay.is_zero() {
                    tokio::time::sleep(self.delay).await;
                }
            }
        }

        None
    }
}

/// One attempt; a missing artifact fails locally without touching the backend
async fn attempt(backend: &dyn Backend, artifact: &Artifact) -> Result<String, UploadError> {
    if !artifact.exists().await {
        return Err(UploadError::MissingArtifact(artifact.path().to_path_buf()));
    }
    backend.upload(artifact).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::io::Write;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct MockBackend {
        name: &'static str,
        result: Option<&'static str>,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Backend for MockBackend {
        fn name(&self) -> &str {
            self.name
        }

        async fn upload(&self, _artifact: &Artifact) -> Result<String, UploadError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result
                .map(ToString::to_string)
                .ok_or_else(|| UploadError::status(503, "unavailable"))
        }
    }

    fn mock(
        name: &'static str,
        result: Option<&'static str>,
    ) -> (Box<dyn Backend>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let backend = MockBackend {
            name,
            result,
            calls: Arc::clone(&calls),
        };
        (Box::new(backend), calls)
    }

    fn artifact_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"PK\x03\x04 not really an apk").unwrap();
        file
    }

    #[tokio::test]
    async fn test_stops_at_first_success() {
        let file = artifact_file();
        let (a, a_calls) = mock("A", Some("https://x/1"));
        let (b, b_calls) = mock("B", None);

        let runner = FallbackRunner::new(vec![a, b], Duration::ZERO);
        let outcome = runner.run(&Artifact::new(file.path())).await;

        assert_eq!(
            outcome,
            Some(UploadOutcome {
                backend: "A".to_string(),
                url: "https://x/1".to_string(),
            })
        );
        assert_eq!(a_calls.load(Ordering::SeqCst), 1);
        assert_eq!(b_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_tries_in_declared_order() {
        let file = artifact_file();
        let (a, a_calls) = mock("A", None);
        let (b, b_calls) = mock("B", None);
        let (c, c_calls) = mock("C", Some("https://x/3"));
        let (d, d_calls) = mock("D", Some("https://x/4"));

        let runner = FallbackRunner::new(vec![a, b, c, d], Duration::ZERO);
        assert_eq!(runner.backend_names(), vec!["A", "B", "C", "D"]);

        let outcome = runner.run(&Artifact::new(file.path())).await.unwrap();
        assert_eq!(outcome.backend, "C");
        assert_eq!(outcome.url, "https://x/3");
        assert_eq!(a_calls.load(Ordering::SeqCst), 1);
        assert_eq!(b_calls.load(Ordering::SeqCst), 1);
        assert_eq!(c_calls.load(Ordering::SeqCst), 1);
        assert_eq!(d_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_artifact_never_calls_backends() {
        let dir = tempfile::tempdir().unwrap();
        let (a, a_calls) = mock("A", Some("https://x/1"));
        let (b, b_calls) = mock("B", Some("https://x/2"));

        let runner = FallbackRunner::new(vec![a, b], Duration::ZERO);
        let outcome = runner.run(&Artifact::new(dir.path().join("gone.apk"))).await;

        assert!(outcome.is_none());
        assert_eq!(a_calls.load(Ordering::SeqCst), 0);
        assert_eq!(b_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_all_failures_return_none() {
        let file = artifact_file();
        let (a, a_calls) = mock("A", None);
        let (b, b_calls) = mock("B", None);

        let runner = FallbackRunner::new(vec![a, b], Duration::ZERO);
        assert!(runner.run(&Artifact::new(file.path())).await.is_none());
        assert_eq!(a_calls.load(Ordering::SeqCst), 1);
        assert_eq!(b_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_runner() {
        let file = artifact_file();
        let runner = FallbackRunner::new(Vec::new(), Duration::ZERO);
        assert!(runner.run(&Artifact::new(file.path())).await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_only_between_attempts() {
        let file = artifact_file();
        let (a, _) = mock("A", None);
        let (b, _) = mock("B", None);
        let (c, _) = mock("C", None);

        let runner = FallbackRunner::new(vec![a, b, c], Duration::from_secs(2));
        let started = tokio::time::Instant::now();
        assert!(runner.run(&Artifact::new(file.path())).await.is_none());

        // Two pauses for three attempts, none after the last one
        assert_eq!(started.elapsed().as_secs(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_delay_after_success() {
        let file = artifact_file();
        let (a, _) = mock("A", None);
        let (b, _) = mock("B", Some("https://x/2"));
        let (c, _) = mock("C", None);

        let runner = FallbackRunner::new(vec![a, b, c], Duration::from_secs(2));
        let started = tokio::time::Instant::now();
        assert!(runner.run(&Artifact::new(file.path())).await.is_some());
        assert_eq!(started.elapsed().as_secs(), 2);
    }
}

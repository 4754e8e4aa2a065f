//! Manual upload instructions printed when every backend failed

use std::fmt;
use std::path::Path;

use crate::artifact::{format_size, Artifact};

/// Operator-facing fallback text
pub struct ManualInstructions<'a> {
    pub path: &'a Path,
    /// `None` when the artifact does not exist
    pub size: Option<u64>,
    pub hosts: &'a [String],
}

impl<'a> ManualInstructions<'a> {
    pub async fn for_artifact(artifact: &'a Artifact, hosts: &'a [String]) -> Self {
        let size = if artifact.exists().await {
            artifact.size().await.ok()
        } else {
            None
        };
        Self {
            path: artifact.path(),
            size,
            hosts,
        }
    }
}

impl fmt::Display for ManualInstructions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "All upload attempts failed.")?;
        writeln!(f)?;
        writeln!(f, "MANUAL UPLOAD INSTRUCTIONS:")?;
        writeln!(f, "1. Download the APK from your local machine:")?;
        writeln!(f, "   File: {}", self.path.display())?;
        match self.size {
            Some(bytes) => writeln!(f, "   Size: {}", format_size(bytes))?,
            None => writeln!(f, "   Size: unknown (file is missing, build it first)")?,
        }
        writeln!(f)?;
        writeln!(f, "2. Upload it to one of these services manually:")?;
        for host in self.hosts {
            writeln!(f, "   - {host}")?;
        }
        writeln!(f)?;
        write!(f, "3. Share the download link with the user.")
    }
}

//! Supported file hosting backends

pub mod anonfiles;
pub mod fileio;
pub mod gofile;
pub mod plain_text;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use super::request::build_client;
use super::{Backend, BackendConfigError};
use crate::config::EndpointsConfig;

pub use anonfiles::AnonFiles;
pub use fileio::FileIo;
pub use gofile::GoFile;
pub use plain_text::PlainText;

/// Backend identifiers accepted in `upload.backends`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    GoFile,
    AnonFiles,
    FileIo,
    TransferSh,
    ZeroX0,
}

impl BackendKind {
    /// GoFile uploads run without a request timeout
    pub const fn uses_timeout(self) -> bool {
        !matches!(self, Self::GoFile)
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::GoFile => GoFile::NAME,
            Self::AnonFiles => AnonFiles::NAME,
            Self::FileIo => FileIo::NAME,
            Self::TransferSh => PlainText::TRANSFER_SH,
            Self::ZeroX0 => PlainText::ZERO_X0,
        }
    }

    /// Instantiate the backend against the configured endpoints
    pub fn build(
        self,
        endpoints: &EndpointsConfig,
        timeout: Duration,
    ) -> Result<Box<dyn Backend>, BackendConfigError> {
        let client = build_client(self.uses_timeout().then_some(timeout))?;
        let backend: Box<dyn Backend> = match self {
            Self::GoFile => Box::new(GoFile::new(
                client,
                &endpoints.gofile_api,
                &endpoints.gofile_upload,
            )),
            Self::AnonFiles => Box::new(AnonFiles::new(client, &endpoints.anonfiles)),
            Self::FileIo => Box::new(FileIo::new(client, &endpoints.fileio)),
            Self::TransferSh => Box::new(PlainText::new(
                PlainText::TRANSFER_SH,
                client,
                &endpoints.transfer,
            )),
            Self::ZeroX0 => Box::new(PlainText::new(
                PlainText::ZERO_X0,
                client,
                &endpoints.zero_x0,
            )),
        };
        Ok(backend)
    }
}

impl FromStr for BackendKind {
    type Err = BackendConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gofile" | "gofile.io" => Ok(Self::GoFile),
            "anonfiles" | "anonfiles.com" => Ok(Self::AnonFiles),
            "fileio" | "file.io" => Ok(Self::FileIo),
            "transfer" | "transfer.sh" => Ok(Self::TransferSh),
            "0x0" | "0x0.st" => Ok(Self::ZeroX0),
            _ => Err(BackendConfigError::UnknownBackend(s.to_string())),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("gofile".parse::<BackendKind>().unwrap(), BackendKind::GoFile);
        assert_eq!("File.io".parse::<BackendKind>().unwrap(), BackendKind::FileIo);
        assert_eq!(" 0x0.st ".parse::<BackendKind>().unwrap(), BackendKind::ZeroX0);
        assert_eq!("transfer".parse::<BackendKind>().unwrap(), BackendKind::TransferSh);
        assert!(matches!(
            "dropbox".parse::<BackendKind>(),
            Err(BackendConfigError::UnknownBackend(name)) if name == "dropbox"
        ));
    }

    #[test]
    fn test_timeouts() {
        assert!(!BackendKind::GoFile.uses_timeout());
        assert!(BackendKind::AnonFiles.uses_timeout());
        assert!(BackendKind::ZeroX0.uses_timeout());
    }

    #[test]
    fn test_build_uses_display_name() {
        let cfg = crate::test_support::test_config("app.apk");
        let backend = BackendKind::TransferSh
            .build(&cfg.upload.endpoints, Duration::from_secs(5))
            .unwrap();
        assert_eq!(backend.name(), "Transfer.sh");
    }
}

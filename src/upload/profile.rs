//! Backend order and pacing per profile

use std::time::Duration;

use super::backends::BackendKind;
use super::fallback::FallbackRunner;
use super::BackendConfigError;
use crate::config::{Profile, UploadConfig};

impl Profile {
    /// Backends tried by this profile, in order
    pub const fn backends(self) -> &'static [BackendKind] {
        match self {
            Self::Primary => &[BackendKind::GoFile, BackendKind::AnonFiles],
            Self::Fallback => &[
                BackendKind::FileIo,
                BackendKind::TransferSh,
                BackendKind::ZeroX0,
            ],
        }
    }

    /// Pause between attempts unless `upload.delay` says otherwise
    pub const fn default_delay(self) -> Duration {
        match self {
            Self::Primary => Duration::ZERO,
            Self::Fallback => Duration::from_secs(2),
        }
    }
}

/// Backend list: `upload.backends` when set, otherwise the profile's
pub fn resolve_backends(
    config: &UploadConfig,
    profile: Profile,
) -> Result<Vec<BackendKind>, BackendConfigError> {
    let kinds = match &config.backends {
        Some(names) => names
            .iter()
            .map(|n| n.parse())
            .collect::<Result<Vec<BackendKind>, _>>()?,
        None => profile.backends().to_vec(),
    };
    if kinds.is_empty() {
        return Err(BackendConfigError::Empty);
    }
    Ok(kinds)
}

/// Build the fallback runner for `profile` (the configured one when `None`)
pub fn build_runner(
    config: &UploadConfig,
    profile: Option<Profile>,
) -> Result<FallbackRunner, BackendConfigError> {
    let profile = profile.unwrap_or(config.profile);
    let timeout = Duration::from_secs(config.timeout);
    let delay = config
        .delay
        .map_or_else(|| profile.default_delay(), Duration::from_secs);

    let backends = resolve_backends(config, profile)?
        .into_iter()
        .map(|kind| kind.build(&config.endpoints, timeout))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FallbackRunner::new(backends, delay))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_config;

    #[test]
    fn test_profile_defaults() {
        let cfg = test_config("app.apk").upload;

        let runner = build_runner(&cfg, None).unwrap();
        assert_eq!(runner.backend_names(), vec!["File.io", "Transfer.sh", "0x0.st"]);
        assert_eq!(runner.delay(), Duration::from_secs(2));

        let runner = build_runner(&cfg, Some(Profile::Primary)).unwrap();
        assert_eq!(runner.backend_names(), vec!["GoFile.io", "AnonFiles.com"]);
        assert_eq!(runner.delay(), Duration::ZERO);
    }

    #[test]
    fn test_explicit_backends_and_delay() {
        let mut cfg = test_config("app.apk").upload;
        cfg.backends = Some(vec!["0x0".to_string(), "gofile".to_string()]);
        cfg.delay = Some(7);

        let runner = build_runner(&cfg, Some(Profile::Primary)).unwrap();
        assert_eq!(runner.backend_names(), vec!["0x0.st", "GoFile.io"]);
        assert_eq!(runner.delay(), Duration::from_secs(7));
    }

    #[test]
    fn test_invalid_backend_lists() {
        let mut cfg = test_config("app.apk").upload;
        cfg.backends = Some(vec!["fileio".to_string(), "mega".to_string()]);
        assert!(matches!(
            build_runner(&cfg, None),
            Err(BackendConfigError::UnknownBackend(name)) if name == "mega"
        ));

        cfg.backends = Some(Vec::new());
        assert!(matches!(
            build_runner(&cfg, None),
            Err(BackendConfigError::Empty)
        ));
    }
}

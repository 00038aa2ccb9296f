//! Command implementations for the carbon CLI.
//!
//! - [`resolve`] - Print the build plan
//! - [`check`] - Validate the plan against the project tree

pub mod check;
pub mod resolve;

use std::path::PathBuf;

use carbon_config::BuildMode;

use crate::cli::PlanArgs;
use crate::config::Settings;
use crate::error::{CliError, Result};

pub use check::execute as check_execute;
pub use resolve::execute as resolve_execute;

/// Mode and context after merging CLI args over settings
#[derive(Debug, Clone)]
pub(crate) struct PlanSelection {
    pub mode: BuildMode,
    pub context: PathBuf,
}

impl PlanSelection {
    /// CLI args win over settings. A missing or unrecognized mode is an error.
    pub(crate) fn from_args(args: &PlanArgs, settings: &Settings) -> Result<Self> {
        let raw = args
            .mode
            .as_deref()
            .or(settings.mode.as_deref())
            .ok_or(CliError::MissingMode)?;
        let mode: BuildMode = raw.parse()?;

        let context = args
            .context
            .clone()
            .or_else(|| settings.context.clone())
            .unwrap_or_else(|| PathBuf::from("."));

        tracing::debug!(mode = %mode, context = %context.display(), "selected plan inputs");
        Ok(Self { mode, context })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carbon_config::ConfigError;

    fn args(mode: Option<&str>) -> PlanArgs {
        PlanArgs {
            mode: mode.map(String::from),
            context: None,
        }
    }

    #[test]
    fn cli_mode_wins_over_settings() {
        let settings = Settings {
            mode: Some("development".into()),
            ..Settings::default()
        };
        let selection = PlanSelection::from_args(&args(Some("production")), &settings).unwrap();
        assert_eq!(selection.mode, BuildMode::Production);
        assert_eq!(selection.context, PathBuf::from("."));
    }

    #[test]
    fn settings_mode_is_used_when_flag_absent() {
        let settings = Settings {
            mode: Some("production".into()),
            context: Some(PathBuf::from("web")),
            ..Settings::default()
        };
        let selection = PlanSelection::from_args(&args(None), &settings).unwrap();
        assert_eq!(selection.mode, BuildMode::Production);
        assert_eq!(selection.context, PathBuf::from("web"));
    }

    #[test]
    fn no_mode_anywhere_is_an_error() {
        let err = PlanSelection::from_args(&args(None), &Settings::default()).unwrap_err();
        assert!(matches!(err, CliError::MissingMode));
    }

    #[test]
    fn unrecognized_mode_is_not_defaulted() {
        let err =
            PlanSelection::from_args(&args(Some("staging")), &Settings::default()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Config(ConfigError::UnrecognizedMode(ref v)) if v == "staging"
        ));
    }
}

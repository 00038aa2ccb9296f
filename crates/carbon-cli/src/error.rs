//! Error handling for the carbon CLI.
//!
//! `CliError` wraps plan resolution errors from `carbon-config` along with
//! settings, I/O and serialization failures. `main` converts it into a
//! `miette` report.

use std::path::PathBuf;

use carbon_config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Plan resolution or validation failed
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// No mode came from the command line, environment or settings file
    #[error("no build mode given\n\nHint: Pass --mode development or --mode production, or set CARBON_MODE")]
    MissingMode,

    /// Settings file could not be merged or extracted
    #[error("invalid settings: {message}\n\nHint: {hint}")]
    Settings { message: String, hint: String },

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Attach a path to I/O failures
pub trait ResultExt<T> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }
}

/// Convert CliError to a miette report
pub fn cli_error_to_miette(err: CliError) -> miette::Report {
    match err {
        CliError::Config(e) => match e.hint() {
            Some(hint) => miette::miette!(help = hint.to_string(), "{}", e),
            None => miette::miette!("{}", e),
        },
        other => miette::miette!("{}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_is_transparent() {
        let err: CliError = ConfigError::UnrecognizedMode("staging".to_string()).into();
        assert!(matches!(err, CliError::Config(_)));
        assert!(err.to_string().starts_with("unrecognized build mode 'staging'"));
    }

    #[test]
    fn missing_mode_has_hint() {
        let msg = CliError::MissingMode.to_string();
        assert!(msg.contains("no build mode"));
        assert!(msg.contains("Hint:"));
    }

    #[test]
    fn with_path_maps_not_found() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let err = result.with_path("carbon.toml").unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(ref p) if p == &PathBuf::from("carbon.toml")));
    }

    #[test]
    fn miette_report_keeps_message() {
        let report = cli_error_to_miette(ConfigError::UnrecognizedMode("qa".into()).into());
        assert!(report.to_string().contains("'qa'"));
    }
}

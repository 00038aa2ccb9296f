//! Error types for build plan resolution and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Mode selection
    #[error("unrecognized build mode '{0}' (expected 'development' or 'production')")]
    UnrecognizedMode(String),

    // Schema validation errors (no filesystem checks)
    #[error("invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("plan validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    // Filesystem validation errors (for CLI use)
    #[error("entry path not found: {}", .path.display())]
    EntryNotFound { path: PathBuf },

    #[error("HTML template not found: {}", .path.display())]
    TemplateNotFound { path: PathBuf },

    #[error("favicon not found: {}", .path.display())]
    FaviconNotFound { path: PathBuf },

    #[error("failed to serialize build plan: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ConfigError {
    pub(crate) fn schema(message: impl Into<String>) -> Self {
        ConfigError::SchemaValidation {
            message: message.into(),
            hint: None,
        }
    }

    pub(crate) fn schema_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        ConfigError::SchemaValidation {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Actionable hint attached to the error, if any.
    pub fn hint(&self) -> Option<&str> {
        match self {
            ConfigError::UnrecognizedMode(_) => {
                Some("Pass --mode development or --mode production")
            }
            ConfigError::SchemaValidation { hint, .. } => hint.as_deref(),
            ConfigError::EntryNotFound { .. } => {
                Some("Check that the --context directory points at the project root")
            }
            _ => None,
        }
    }
}

//! Layered CLI settings.
//!
//! Priority: CLI args > `CARBON_*` environment > carbon.toml > defaults

use figment::{
    providers::{Env, Format as _, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use crate::error::{CliError, Result};

/// Settings file looked up in the working directory
pub const SETTINGS_FILE: &str = "carbon.toml";

/// Settings gathered from carbon.toml and the environment.
///
/// Free-form fields accept any scalar: the env provider types `CARBON_DEBUG=1`
/// as an integer and `CARBON_DEBUG=true` as a bool, and both are kept as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(
        default,
        deserialize_with = "scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub mode: Option<String>,

    #[serde(
        default,
        deserialize_with = "scalar_path",
        skip_serializing_if = "Option::is_none"
    )]
    pub context: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,

    #[serde(
        default,
        deserialize_with = "scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub node_env: Option<String>,

    #[serde(
        default,
        deserialize_with = "scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub debug: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    Bool(bool),
}

impl From<Scalar> for String {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Text(text) => text,
            Scalar::Signed(n) => n.to_string(),
            Scalar::Unsigned(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

fn scalar_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(String::from))
}

fn scalar_path<'de, D>(deserializer: D) -> std::result::Result<Option<PathBuf>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_string(deserializer)?.map(PathBuf::from))
}

impl Settings {
    /// Load settings from defaults, the settings file and the environment.
    ///
    /// An explicit `config_path` must exist; the default carbon.toml is optional.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        Self::figment(config_path)?.extract().map_err(|e| {
            CliError::Settings {
                message: e.to_string(),
                hint: format!("Check {SETTINGS_FILE} syntax and field types"),
            }
        })
    }

    fn figment(config_path: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::new().merge(Serialized::defaults(Settings::default()));

        let settings_file = match config_path {
            Some(path) if !path.exists() => {
                return Err(CliError::FileNotFound(path.to_path_buf()));
            }
            Some(path) => Some(path.to_path_buf()),
            None => {
                let default_path = Path::new(SETTINGS_FILE);
                default_path.exists().then(|| default_path.to_path_buf())
            }
        };

        if let Some(path) = settings_file {
            tracing::debug!(path = %path.display(), "loading settings file");
            figment = figment.merge(Toml::file(path));
        }

        // CARBON_MODE, CARBON_CONTEXT, CARBON_NODE_ENV, ...
        Ok(figment.merge(Env::prefixed("CARBON_")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_file_is_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(
            &path,
            r#"
mode = "production"
context = "web"
format = "summary"
node_env = "production"
"#,
        )
        .unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.context, Some(PathBuf::from("web")));
        assert_eq!(settings.format, Some(OutputFormat::Summary));
        assert_eq!(settings.node_env.as_deref(), Some("production"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = Settings::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn scalar_values_are_read_as_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "debug = 1\nnode_env = true\ncontext = 123\n").unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.debug.as_deref(), Some("1"));
        assert_eq!(settings.node_env.as_deref(), Some("true"));
        assert_eq!(settings.context, Some(PathBuf::from("123")));
    }

    #[test]
    fn bad_field_type_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "format = \"yaml\"\n").unwrap();

        let err = Settings::load(Some(&path)).unwrap_err();
        assert!(matches!(err, CliError::Settings { .. }));
    }
}

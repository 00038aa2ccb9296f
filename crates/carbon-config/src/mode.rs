//! Deployment mode selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::plan::SourceMapPolicy;

/// API the client talks to during local development.
pub const LOCAL_API_BASE_URL: &str = "http://localhost:3000";

/// API the deployed client talks to.
pub const DEPLOYED_API_BASE_URL: &str = "https://carbon-footprint.herokuapp.com";

/// Deployment mode a build plan is resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    pub const ALL: [BuildMode; 2] = [BuildMode::Development, BuildMode::Production];

    pub fn as_str(self) -> &'static str {
        match self {
            BuildMode::Development => "development",
            BuildMode::Production => "production",
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, BuildMode::Production)
    }

    /// Base URL of the API backing this mode.
    pub fn api_base_url(self) -> &'static str {
        match self {
            BuildMode::Development => LOCAL_API_BASE_URL,
            BuildMode::Production => DEPLOYED_API_BASE_URL,
        }
    }

    pub fn source_map_policy(self) -> SourceMapPolicy {
        match self {
            BuildMode::Development => SourceMapPolicy::InlineFull,
            BuildMode::Production => SourceMapPolicy::ExternalOptimized,
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match. Anything else is rejected rather than
/// treated as development.
impl FromStr for BuildMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(BuildMode::Development),
            "production" => Ok(BuildMode::Production),
            other => Err(ConfigError::UnrecognizedMode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_modes() {
        assert_eq!(
            "development".parse::<BuildMode>().unwrap(),
            BuildMode::Development
        );
        assert_eq!(
            "production".parse::<BuildMode>().unwrap(),
            BuildMode::Production
        );
    }

    #[test]
    fn rejects_everything_else() {
        for value in ["staging", "", "Production", " development", "prod", "test"] {
            let err = value.parse::<BuildMode>().unwrap_err();
            assert!(
                matches!(&err, ConfigError::UnrecognizedMode(v) if v == value),
                "{value:?} should be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for mode in BuildMode::ALL {
            assert_eq!(mode.to_string().parse::<BuildMode>().unwrap(), mode);
        }
    }

    #[test]
    fn api_base_url_per_mode() {
        assert_eq!(BuildMode::Development.api_base_url(), "http://localhost:3000");
        assert_eq!(
            BuildMode::Production.api_base_url(),
            "https://carbon-footprint.herokuapp.com"
        );
    }

    #[test]
    fn serializes_lowercase() {
        let value = serde_json::to_value(BuildMode::Production).unwrap();
        assert_eq!(value, serde_json::json!("production"));
    }
}

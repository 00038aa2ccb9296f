//! Pluggable plan validation strategies
//!
//! Separates structural checks (no I/O) from filesystem checks (for CLI use).

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::plan::BuildPlan;

/// Trait for pluggable plan validation strategies
pub trait PlanValidator {
    fn validate(&self, plan: &BuildPlan) -> Result<()>;
}

/// Structural validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use carbon_config::{resolve, BuildMode, PlanValidator, SchemaValidator};
///
/// let plan = resolve(BuildMode::Production);
/// SchemaValidator.validate(&plan).unwrap();
/// ```
pub struct SchemaValidator;

impl PlanValidator for SchemaValidator {
    fn validate(&self, plan: &BuildPlan) -> Result<()> {
        let mode = plan.mode();

        if plan.api_base_url() != mode.api_base_url() {
            return Err(ConfigError::schema(format!(
                "API base URL '{}' does not belong to {} mode",
                plan.api_base_url(),
                mode
            )));
        }

        let Some(first) = plan.entry_points().first() else {
            return Err(ConfigError::schema_with_hint(
                "no entry points specified",
                "A plan needs the hot-reload client and the application entry",
            ));
        };

        match first.hot_reload_base_url() {
            Some(url) if url == plan.api_base_url() => {}
            Some(url) => {
                return Err(ConfigError::schema(format!(
                    "hot-reload client points at '{url}' but the API is '{}'",
                    plan.api_base_url()
                )));
            }
            None => {
                return Err(ConfigError::schema_with_hint(
                    format!("first entry point is '{}'", first.specifier()),
                    "The hot-reload client must precede the application entry",
                ));
            }
        }

        if !plan.entry_points().iter().any(|e| e.module_path().is_some()) {
            return Err(ConfigError::schema("no application entry point"));
        }

        if plan.output().filename.trim().is_empty() {
            return Err(ConfigError::schema("output filename cannot be empty"));
        }

        let optimization = plan.optimization();
        if optimization.enabled() != mode.is_production() {
            return Err(ConfigError::schema(format!(
                "optimization is {} in {} mode",
                if optimization.enabled() { "enabled" } else { "disabled" },
                mode
            )));
        }
        if optimization.enabled() == optimization.stages().is_empty() {
            return Err(ConfigError::schema(
                "optimization stages must be present exactly when optimization is enabled",
            ));
        }

        if plan.source_map_policy() != mode.source_map_policy() {
            return Err(ConfigError::schema(format!(
                "source map policy '{}' does not belong to {} mode",
                plan.source_map_policy().devtool(),
                mode
            )));
        }

        for rule in plan.rules() {
            rule.test.compile()?;
            if let Some(exclude) = &rule.exclude {
                exclude.compile()?;
            }
            if rule.pipeline.is_empty() {
                return Err(ConfigError::schema(format!(
                    "rule '{}' has an empty pipeline",
                    rule.test.as_str()
                )));
            }
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Checks that the application entry, HTML template and favicon exist under
/// the project root.
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl PlanValidator for FsValidator {
    fn validate(&self, plan: &BuildPlan) -> Result<()> {
        SchemaValidator.validate(plan)?;

        for entry in plan.entry_points() {
            if let Some(path) = entry.module_path() {
                let path = self.root.join(path);
                if !path.is_file() {
                    return Err(ConfigError::EntryNotFound { path });
                }
            }
        }

        if let Some(html) = plan.html_document() {
            let template = self.root.join(&html.template);
            if !template.is_file() {
                return Err(ConfigError::TemplateNotFound { path: template });
            }
            if let Some(favicon) = &html.favicon {
                let path = self.root.join(favicon);
                if !path.is_file() {
                    return Err(ConfigError::FaviconNotFound { path });
                }
            }
        }

        Ok(())
    }
}

/// Convenience function for structural validation
pub fn validate_schema(plan: &BuildPlan) -> Result<()> {
    SchemaValidator.validate(plan)
}

/// Convenience function for filesystem validation
pub fn validate_fs(plan: &BuildPlan, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(plan)
}

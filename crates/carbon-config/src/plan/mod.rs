//! The declarative build plan handed to the bundling engine.

mod artifact;
mod entry;
mod optimization;
mod plugins;
mod rules;
mod types;

use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

pub use artifact::{Artifact, ArtifactKind};
pub use entry::{EntryPoint, HOT_CLIENT_MODULE, HOT_RELOAD_PATH};
pub use optimization::{
    CompressionAlgorithm, DeadCodeOptions, OptimizationPlan, OptimizationStage,
};
pub use plugins::{DefineValues, HtmlDocumentOptions, InjectPosition, PluginSpec};
pub use rules::{Pattern, Stage, TransformRule};
pub use types::{ModuleResolution, OutputTarget, SourceMapPolicy};

use crate::error::{ConfigError, Result};
use crate::mode::BuildMode;

/// Complete build plan for one invocation
///
/// Produced by [`crate::resolve`] and immutable afterwards: fields are only
/// reachable through accessors. A plan serializes for the engine but cannot
/// be read back, so every plan in circulation came from the resolver.
///
/// ```compile_fail
/// let plan: carbon_config::BuildPlan = serde_json::from_str("{}").unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildPlan {
    pub(crate) mode: BuildMode,
    pub(crate) api_base_url: String,
    pub(crate) context: PathBuf,
    pub(crate) entry_points: Vec<EntryPoint>,
    pub(crate) output: OutputTarget,
    pub(crate) source_maps: SourceMapPolicy,
    pub(crate) resolution: ModuleResolution,
    pub(crate) rules: Vec<TransformRule>,
    pub(crate) plugins: Vec<PluginSpec>,
    pub(crate) optimization: OptimizationPlan,
}

impl BuildPlan {
    pub fn mode(&self) -> BuildMode {
        self.mode
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Directory every relative path in the plan is resolved against
    pub fn context(&self) -> &Path {
        &self.context
    }

    pub fn entry_points(&self) -> &[EntryPoint] {
        &self.entry_points
    }

    pub fn output(&self) -> &OutputTarget {
        &self.output
    }

    pub fn source_map_policy(&self) -> SourceMapPolicy {
        self.source_maps
    }

    pub fn resolution(&self) -> &ModuleResolution {
        &self.resolution
    }

    pub fn rules(&self) -> &[TransformRule] {
        &self.rules
    }

    pub fn plugins(&self) -> &[PluginSpec] {
        &self.plugins
    }

    pub fn optimization(&self) -> &OptimizationPlan {
        &self.optimization
    }

    pub fn optimization_enabled(&self) -> bool {
        self.optimization.enabled()
    }

    pub fn optimization_stages(&self) -> &[OptimizationStage] {
        self.optimization.stages()
    }

    pub fn hot_reload_entry(&self) -> Option<&EntryPoint> {
        self.entry_points.iter().find(|entry| entry.is_hot_reload())
    }

    pub fn html_document(&self) -> Option<&HtmlDocumentOptions> {
        self.plugins.iter().find_map(|plugin| match plugin {
            PluginSpec::HtmlDocument(options) => Some(options),
            _ => None,
        })
    }

    /// Filename of the extracted stylesheet, if styles are extracted
    pub fn stylesheet_filename(&self) -> Option<&str> {
        self.plugins.iter().find_map(|plugin| match plugin {
            PluginSpec::ExtractStylesheet { filename } => Some(filename.as_str()),
            _ => None,
        })
    }

    /// First rule that applies to `path`, if any
    ///
    /// ```
    /// use carbon_config::{resolve, BuildMode};
    /// use std::path::Path;
    ///
    /// let plan = resolve(BuildMode::Development);
    /// let rule = plan.rule_for(Path::new("client/styles/app.scss")).unwrap().unwrap();
    /// assert_eq!(rule.stage_names(), vec!["sass", "css", "extract-stylesheet"]);
    /// ```
    pub fn rule_for(&self, path: &Path) -> Result<Option<&TransformRule>> {
        for rule in &self.rules {
            if rule.matches(path)? {
                return Ok(Some(rule));
            }
        }
        Ok(None)
    }

    /// Files the engine emits for this plan, relative to the context
    pub fn artifacts(&self) -> Vec<Artifact> {
        let dir = &self.output.dir;
        let mut artifacts = vec![Artifact::new(
            self.output.bundle_path(),
            ArtifactKind::ScriptBundle,
        )];

        if self.source_maps.is_external() {
            artifacts.push(Artifact::new(
                dir.join(format!("{}.map", self.output.filename)),
                ArtifactKind::SourceMap,
            ));
        }

        if let Some(stylesheet) = self.stylesheet_filename() {
            artifacts.push(Artifact::new(dir.join(stylesheet), ArtifactKind::Stylesheet));
        }

        if let Some(html) = self.html_document() {
            artifacts.push(Artifact::new(
                dir.join(&html.filename),
                ArtifactKind::HtmlDocument,
            ));
            if let Some(favicon) = html.favicon.as_ref().and_then(|f| f.file_name()) {
                artifacts.push(Artifact::new(dir.join(favicon), ArtifactKind::Favicon));
            }
        }

        if let Some(algorithm) = self.optimization.compression() {
            let compressed: Vec<Artifact> = artifacts
                .iter()
                .filter(|artifact| artifact.kind.is_compressible())
                .map(|artifact| artifact.compressed(algorithm))
                .collect();
            artifacts.extend(compressed);
        }

        artifacts
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(ConfigError::from)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(ConfigError::from)
    }
}

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

use crate::error::{ConfigError, Result};

/// Regular expression matched against a module path
///
/// Serialized as its source string. The compiled regex is built on first use
/// and reused afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Pattern {
    source: String,
    compiled: OnceLock<Regex>,
}

impl Pattern {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            compiled: OnceLock::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The compiled regex, built on the first call
    ///
    /// An invalid source is reported on every call and never cached.
    pub fn compile(&self) -> Result<&Regex> {
        if let Some(regex) = self.compiled.get() {
            return Ok(regex);
        }
        let regex = Regex::new(&self.source).map_err(|err| ConfigError::InvalidPattern {
            pattern: self.source.clone(),
            message: err.to_string(),
        })?;
        Ok(self.compiled.get_or_init(|| regex))
    }

    pub fn is_match(&self, path: &str) -> Result<bool> {
        Ok(self.compile()?.is_match(path))
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}

impl From<String> for Pattern {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}

impl From<Pattern> for String {
    fn from(pattern: Pattern) -> Self {
        pattern.source
    }
}

/// A single processing stage applied to matching files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "stage", rename_all = "kebab-case")]
pub enum Stage {
    /// Sass/SCSS preprocessing
    Sass { source_map: bool, minimize: bool },
    /// CSS import/url resolution
    Css { source_map: bool, minimize: bool },
    /// Pull the processed styles out of the script into a standalone stylesheet
    ExtractStylesheet { filename: String },
    /// Language downleveling
    Babel { presets: Vec<String> },
    /// Binary pass-through, emitted under a name pattern
    File { name: String },
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Sass { .. } => "sass",
            Stage::Css { .. } => "css",
            Stage::ExtractStylesheet { .. } => "extract-stylesheet",
            Stage::Babel { .. } => "babel",
            Stage::File { .. } => "file",
        }
    }
}

/// File pattern → processing pipeline association
///
/// `pipeline` lists stages in the order they are applied to a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformRule {
    pub test: Pattern,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Pattern>,

    pub pipeline: Vec<Stage>,
}

impl TransformRule {
    pub fn new(test: &str, pipeline: Vec<Stage>) -> Self {
        Self {
            test: Pattern::new(test),
            exclude: None,
            pipeline,
        }
    }

    pub fn excluding(mut self, exclude: &str) -> Self {
        self.exclude = Some(Pattern::new(exclude));
        self
    }

    /// Whether this rule applies to `path`
    pub fn matches(&self, path: &Path) -> Result<bool> {
        let normalized = path.to_string_lossy().replace('\\', "/");
        if !self.test.is_match(&normalized)? {
            return Ok(false);
        }
        match &self.exclude {
            Some(exclude) => Ok(!exclude.is_match(&normalized)?),
            None => Ok(true),
        }
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.pipeline.iter().map(Stage::name).collect()
    }
}

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where generated asset tags are injected in the HTML document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InjectPosition {
    Head,
    #[default]
    Body,
}

/// HTML entry document generated from a template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlDocumentOptions {
    /// Template path, relative to the plan context
    pub template: PathBuf,

    #[serde(default)]
    pub inject: InjectPosition,

    /// Output filename inside the output directory
    pub filename: String,

    /// Append a compilation hash to injected asset URLs
    pub hash: bool,

    /// Favicon path, relative to the plan context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<PathBuf>,
}

/// Values substituted for compile-time identifiers
///
/// Captured by the caller; resolution never reads the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefineValues {
    #[serde(default)]
    pub node_env: Option<String>,

    #[serde(default)]
    pub debug: Option<String>,
}

impl DefineValues {
    pub fn new(node_env: Option<String>, debug: Option<String>) -> Self {
        Self { node_env, debug }
    }

    /// Identifier → replacement source text, in a stable order
    ///
    /// Present values become JSON string literals; absent ones become `undefined`.
    pub fn replacements(&self) -> IndexMap<String, String> {
        let mut replacements = IndexMap::with_capacity(2);
        replacements.insert(
            "process.env.NODE_ENV".to_string(),
            literal(self.node_env.as_deref()),
        );
        replacements.insert(
            "process.env.DEBUG".to_string(),
            literal(self.debug.as_deref()),
        );
        replacements
    }
}

fn literal(value: Option<&str>) -> String {
    match value {
        Some(value) => serde_json::Value::String(value.to_string()).to_string(),
        None => "undefined".to_string(),
    }
}

/// Engine plugin, one variant per kind with its own configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "plugin", rename_all = "kebab-case")]
pub enum PluginSpec {
    HtmlDocument(HtmlDocumentOptions),
    ExtractStylesheet { filename: String },
    HotModuleReplacement,
    NoEmitOnErrors,
    Define { replacements: IndexMap<String, String> },
}

impl PluginSpec {
    pub fn name(&self) -> &'static str {
        match self {
            PluginSpec::HtmlDocument(_) => "html-document",
            PluginSpec::ExtractStylesheet { .. } => "extract-stylesheet",
            PluginSpec::HotModuleReplacement => "hot-module-replacement",
            PluginSpec::NoEmitOnErrors => "no-emit-on-errors",
            PluginSpec::Define { .. } => "define",
        }
    }
}

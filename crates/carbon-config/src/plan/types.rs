use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Source map generation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceMapPolicy {
    /// Full source map embedded in the bundle (base64)
    InlineFull,
    /// Separate optimized .map file next to the bundle
    ExternalOptimized,
}

impl SourceMapPolicy {
    /// Name of the equivalent devtool setting understood by the engine
    pub fn devtool(self) -> &'static str {
        match self {
            SourceMapPolicy::InlineFull => "inline-source-map",
            SourceMapPolicy::ExternalOptimized => "source-map",
        }
    }

    pub fn is_external(self) -> bool {
        matches!(self, SourceMapPolicy::ExternalOptimized)
    }
}

/// Where the bundled artifact is written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputTarget {
    /// Output directory (relative to the plan context)
    pub dir: PathBuf,

    /// Script bundle filename
    pub filename: String,

    /// Public base path used to resolve assets at runtime
    pub public_path: String,
}

impl OutputTarget {
    /// Path of the script bundle relative to the plan context
    pub fn bundle_path(&self) -> PathBuf {
        self.dir.join(&self.filename)
    }
}

/// Module lookup settings handed to the engine's resolver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleResolution {
    /// Directories searched for bare module specifiers, in order
    pub modules: Vec<String>,

    /// Extensions tried when an import omits one, in order
    pub extensions: Vec<String>,
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::plan::CompressionAlgorithm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    ScriptBundle,
    SourceMap,
    Stylesheet,
    HtmlDocument,
    Favicon,
    Compressed,
}

impl ArtifactKind {
    /// Text assets get a compressed copy when compression is planned
    pub fn is_compressible(self) -> bool {
        matches!(
            self,
            ArtifactKind::ScriptBundle | ArtifactKind::Stylesheet | ArtifactKind::HtmlDocument
        )
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ArtifactKind::ScriptBundle => "script bundle",
            ArtifactKind::SourceMap => "source map",
            ArtifactKind::Stylesheet => "stylesheet",
            ArtifactKind::HtmlDocument => "html document",
            ArtifactKind::Favicon => "favicon",
            ArtifactKind::Compressed => "compressed",
        };
        f.write_str(label)
    }
}

/// A file the engine is expected to emit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub path: PathBuf,
    pub kind: ArtifactKind,
}

impl Artifact {
    pub fn new(path: impl Into<PathBuf>, kind: ArtifactKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    pub(crate) fn compressed(&self, algorithm: CompressionAlgorithm) -> Self {
        let mut name = self.path.clone().into_os_string();
        name.push(".");
        name.push(algorithm.extension());
        Self::new(PathBuf::from(name), ArtifactKind::Compressed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compressed_copy_appends_extension() {
        let artifact = Artifact::new("public/dist/bundle.js", ArtifactKind::ScriptBundle);
        let gz = artifact.compressed(CompressionAlgorithm::Gzip);
        assert_eq!(gz.path, PathBuf::from("public/dist/bundle.js.gz"));
        assert_eq!(gz.kind, ArtifactKind::Compressed);
    }

    #[test]
    fn only_text_assets_are_compressible() {
        assert!(ArtifactKind::ScriptBundle.is_compressible());
        assert!(ArtifactKind::HtmlDocument.is_compressible());
        assert!(!ArtifactKind::Favicon.is_compressible());
        assert!(!ArtifactKind::SourceMap.is_compressible());
    }
}

use serde::{Deserialize, Serialize};

/// Compressor settings for dead-code elimination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadCodeOptions {
    /// Drop unreferenced functions and variables
    pub unused: bool,
    /// Drop unreachable code
    pub dead_code: bool,
    /// Simplify `if`/ternary expressions
    pub conditionals: bool,
    /// Fold constant expressions
    pub evaluate: bool,
    /// Join consecutive statements with the comma operator
    pub sequences: bool,
    /// Simplify boolean expressions
    pub booleans: bool,
    /// Report dropped code during the build
    pub warnings: bool,
}

impl DeadCodeOptions {
    pub fn aggressive() -> Self {
        Self {
            unused: true,
            dead_code: true,
            conditionals: true,
            evaluate: true,
            sequences: true,
            booleans: true,
            warnings: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionAlgorithm {
    #[default]
    Gzip,
}

impl CompressionAlgorithm {
    /// Extension appended to the compressed copy of an asset
    pub fn extension(self) -> &'static str {
        match self {
            CompressionAlgorithm::Gzip => "gz",
        }
    }
}

/// Stage appended to the plan for production builds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "stage", rename_all = "kebab-case")]
pub enum OptimizationStage {
    DeadCodeElimination(DeadCodeOptions),
    StripComments,
    StripConsole { drop_debugger: bool },
    /// Secondary compression of emitted assets
    Compression {
        algorithm: CompressionAlgorithm,
        /// Assets smaller than this are left uncompressed
        threshold_bytes: u64,
    },
}

impl OptimizationStage {
    pub fn name(&self) -> &'static str {
        match self {
            OptimizationStage::DeadCodeElimination(_) => "dead-code-elimination",
            OptimizationStage::StripComments => "strip-comments",
            OptimizationStage::StripConsole { .. } => "strip-console",
            OptimizationStage::Compression { .. } => "compression",
        }
    }
}

/// Whether optimization runs, and which stages it applies
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationPlan {
    pub(crate) enabled: bool,
    pub(crate) stages: Vec<OptimizationStage>,
}

impl OptimizationPlan {
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Minification followed by gzip compression of the emitted assets.
    pub fn production() -> Self {
        Self {
            enabled: true,
            stages: vec![
                OptimizationStage::DeadCodeElimination(DeadCodeOptions::aggressive()),
                OptimizationStage::StripComments,
                OptimizationStage::StripConsole {
                    drop_debugger: true,
                },
                OptimizationStage::Compression {
                    algorithm: CompressionAlgorithm::Gzip,
                    threshold_bytes: 0,
                },
            ],
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn stages(&self) -> &[OptimizationStage] {
        &self.stages
    }

    pub fn compression(&self) -> Option<CompressionAlgorithm> {
        self.stages.iter().find_map(|stage| match stage {
            OptimizationStage::Compression { algorithm, .. } => Some(*algorithm),
            _ => None,
        })
    }

    pub fn has_stage(&self, name: &str) -> bool {
        self.stages.iter().any(|stage| stage.name() == name)
    }
}

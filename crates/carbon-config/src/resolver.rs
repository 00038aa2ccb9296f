//! Mode → build plan resolution.
//!
//! Resolution is a pure function of its inputs: the mode, the context
//! directory, and any define values the caller captured. No I/O happens here.

use std::path::PathBuf;

use tracing::debug;

use crate::error::Result;
use crate::mode::BuildMode;
use crate::plan::{
    BuildPlan, DefineValues, EntryPoint, HtmlDocumentOptions, InjectPosition, ModuleResolution,
    OptimizationPlan, OutputTarget, PluginSpec, Stage, TransformRule,
};

pub const APP_ENTRY: &str = "client/index.js";
pub const OUTPUT_DIR: &str = "public/dist";
pub const BUNDLE_FILENAME: &str = "bundle.js";
pub const STYLESHEET_FILENAME: &str = "style.css";
pub const HTML_TEMPLATE: &str = "public/index.html";
pub const HTML_FILENAME: &str = "index.html";
pub const FAVICON: &str = "public/favicon.ico";

const BABEL_PRESETS: [&str; 4] = ["es2015", "react", "stage-2", "react-hmre"];

/// Resolves build plans for a project rooted at `context`
///
/// # Example
///
/// ```
/// use carbon_config::{BuildMode, DefineValues, Resolver};
///
/// let plan = Resolver::new("/srv/carbon")
///     .with_defines(DefineValues::new(Some("production".into()), None))
///     .resolve(BuildMode::Production);
///
/// assert!(plan.optimization_enabled());
/// assert_eq!(plan.context(), std::path::Path::new("/srv/carbon"));
/// ```
#[derive(Debug, Clone)]
pub struct Resolver {
    context: PathBuf,
    defines: DefineValues,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Resolver {
    pub fn new(context: impl Into<PathBuf>) -> Self {
        Self {
            context: context.into(),
            defines: DefineValues::default(),
        }
    }

    pub fn with_defines(mut self, defines: DefineValues) -> Self {
        self.defines = defines;
        self
    }

    pub fn resolve(&self, mode: BuildMode) -> BuildPlan {
        let api_base_url = mode.api_base_url();

        let optimization = match mode {
            BuildMode::Development => OptimizationPlan::disabled(),
            BuildMode::Production => OptimizationPlan::production(),
        };

        let plan = BuildPlan {
            mode,
            api_base_url: api_base_url.to_string(),
            context: self.context.clone(),
            entry_points: vec![
                EntryPoint::hot_reload(api_base_url),
                EntryPoint::module(APP_ENTRY),
            ],
            output: OutputTarget {
                dir: PathBuf::from(OUTPUT_DIR),
                filename: BUNDLE_FILENAME.to_string(),
                public_path: "/".to_string(),
            },
            source_maps: mode.source_map_policy(),
            resolution: module_resolution(),
            rules: transform_rules(),
            plugins: self.plugins(),
            optimization,
        };

        debug!(
            mode = %mode,
            api = api_base_url,
            rules = plan.rules.len(),
            plugins = plan.plugins.len(),
            optimization_stages = plan.optimization.stages().len(),
            "resolved build plan"
        );

        plan
    }

    /// Parse `mode` and resolve; unrecognized values are an error, never a default.
    pub fn resolve_str(&self, mode: &str) -> Result<BuildPlan> {
        let mode: BuildMode = mode.parse()?;
        Ok(self.resolve(mode))
    }

    fn plugins(&self) -> Vec<PluginSpec> {
        vec![
            PluginSpec::HtmlDocument(HtmlDocumentOptions {
                template: PathBuf::from(HTML_TEMPLATE),
                inject: InjectPosition::Body,
                filename: HTML_FILENAME.to_string(),
                hash: true,
                favicon: Some(PathBuf::from(FAVICON)),
            }),
            PluginSpec::ExtractStylesheet {
                filename: STYLESHEET_FILENAME.to_string(),
            },
            PluginSpec::HotModuleReplacement,
            PluginSpec::NoEmitOnErrors,
            PluginSpec::Define {
                replacements: self.defines.replacements(),
            },
        ]
    }
}

/// Resolve a plan with the default context and no define values
pub fn resolve(mode: BuildMode) -> BuildPlan {
    Resolver::default().resolve(mode)
}

/// Parse and resolve in one step
///
/// ```
/// use carbon_config::{resolve_str, ConfigError};
///
/// assert!(resolve_str("production").is_ok());
/// assert!(matches!(resolve_str("staging"), Err(ConfigError::UnrecognizedMode(_))));
/// ```
pub fn resolve_str(mode: &str) -> Result<BuildPlan> {
    Resolver::default().resolve_str(mode)
}

fn module_resolution() -> ModuleResolution {
    ModuleResolution {
        modules: vec!["./node_modules".to_string()],
        extensions: [".js", ".jsx", ".json", "*"]
            .into_iter()
            .map(String::from)
            .collect(),
    }
}

fn transform_rules() -> Vec<TransformRule> {
    vec![
        // SCSS + CSS
        TransformRule::new(
            r"\.s?css$",
            vec![
                Stage::Sass {
                    source_map: true,
                    minimize: true,
                },
                Stage::Css {
                    source_map: true,
                    minimize: true,
                },
                Stage::ExtractStylesheet {
                    filename: STYLESHEET_FILENAME.to_string(),
                },
            ],
        ),
        TransformRule::new(
            r"\.js$",
            vec![Stage::Babel {
                presets: BABEL_PRESETS.iter().map(|p| p.to_string()).collect(),
            }],
        )
        .excluding("(node_modules|bower_components)"),
        TransformRule::new(
            r"\.svg$",
            vec![Stage::File {
                name: "assets/svg/[name].[ext]".to_string(),
            }],
        ),
        TransformRule::new(
            r"\.(jpe?g|png|gif)$",
            vec![Stage::File {
                name: "assets/img/[name].[ext]".to_string(),
            }],
        ),
    ]
}

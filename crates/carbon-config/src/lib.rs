//! Build plan resolution for the carbon footprint web client.
//!
//! A [`BuildPlan`] is a declarative description of one bundling run: entry
//! points, output location, transform rules, plugins and optimization
//! stages. It is derived from a [`BuildMode`] and handed to an external
//! bundling engine.
//!
//! ```
//! use carbon_config::{resolve, BuildMode, SourceMapPolicy};
//!
//! let plan = resolve(BuildMode::Development);
//! assert_eq!(plan.api_base_url(), "http://localhost:3000");
//! assert_eq!(plan.source_map_policy(), SourceMapPolicy::InlineFull);
//! assert!(plan.optimization_stages().is_empty());
//! ```

pub mod error;
pub mod mode;
pub mod plan;
pub mod resolver;
pub mod validation;

// Re-export main types
pub use error::*;
pub use mode::*;
pub use plan::*;
pub use resolver::{resolve, resolve_str, Resolver};

pub use validation::{validate_fs, validate_schema, FsValidator, PlanValidator, SchemaValidator};

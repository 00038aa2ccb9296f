//! Carbon CLI - resolve and check build plans for the carbon footprint client.
//!
//! - [`cli`] - Argument definitions
//! - [`config`] - Layered settings (carbon.toml, `CARBON_*` environment)
//! - [`commands`] - `resolve` and `check`
//! - [`error`] - Error types and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - Status lines and plan summaries

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};

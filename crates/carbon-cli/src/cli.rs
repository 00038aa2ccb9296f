//! Command-line interface definition.
//!
//! - `carbon resolve` - Print the build plan for a mode
//! - `carbon check` - Resolve and verify the plan against the project tree

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Resolve build plans for the carbon footprint client
#[derive(Parser, Debug)]
#[command(
    name = "carbon",
    version,
    about = "Resolve build plans for the carbon footprint client",
    long_about = "Carbon turns a deployment mode (development or production) into the\n\
                  declarative build plan consumed by the bundling engine, and checks\n\
                  that the files the plan references exist."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress status messages and logs except errors (the plan is still printed)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to a carbon.toml settings file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the build plan for a mode
    Resolve(ResolveArgs),

    /// Resolve the plan and check the files it references
    Check(CheckArgs),
}

/// Mode and project selection shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct PlanArgs {
    /// Deployment mode: development or production
    ///
    /// Any other value is rejected; there is no default mode.
    #[arg(short, long, env = "CARBON_MODE")]
    pub mode: Option<String>,

    /// Project root that plan paths are relative to
    #[arg(long, value_name = "DIR")]
    pub context: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub plan: PlanArgs,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Value substituted for process.env.NODE_ENV
    #[arg(long, value_name = "VALUE")]
    pub node_env: Option<String>,

    /// Value substituted for process.env.DEBUG
    #[arg(long, value_name = "VALUE")]
    pub debug: Option<String>,

    /// Write the JSON plan to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    #[command(flatten)]
    pub plan: PlanArgs,
}

/// How `carbon resolve` prints the plan
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    #[value(name = "json")]
    Json,

    /// Human-readable overview
    #[value(name = "summary")]
    Summary,
}

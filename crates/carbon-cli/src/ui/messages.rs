//! Status message functions for terminal output.
//!
//! Success, info and warning lines are dropped under `--quiet`; errors are
//! always printed.

use owo_colors::OwoColorize;

use super::{colors_enabled, quiet};

/// Print a success message to stderr.
///
/// # Arguments
///
/// * `message` - Message to display
///
/// # Examples
///
/// ```no_run
/// use carbon_cli::ui::success;
///
/// success("All checks passed!");
/// ```
pub fn success(message: &str) {
    if quiet() {
        return;
    }
    if colors_enabled() {
        eprintln!("{} {}", "✓".green().bold(), message);
    } else {
        eprintln!("✓ {message}");
    }
}

/// Print an info message to stderr.
///
/// # Arguments
///
/// * `message` - Message to display
///
/// # Examples
///
/// ```no_run
/// use carbon_cli::ui::info;
///
/// info("Checking production plan in ....");
/// ```
pub fn info(message: &str) {
    if quiet() {
        return;
    }
    if colors_enabled() {
        eprintln!("{} {}", "ℹ".blue().bold(), message);
    } else {
        eprintln!("ℹ {message}");
    }
}

/// Print a warning message to stderr.
///
/// # Arguments
///
/// * `message` - Message to display
///
/// # Examples
///
/// ```no_run
/// use carbon_cli::ui::warning;
///
/// warning("NODE_ENV is not set for a production plan");
/// ```
pub fn warning(message: &str) {
    if quiet() {
        return;
    }
    if colors_enabled() {
        eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
    } else {
        eprintln!("⚠ {message}");
    }
}

/// Print an error message to stderr.
///
/// Not affected by `--quiet`.
///
/// # Arguments
///
/// * `message` - Message to display
///
/// # Examples
///
/// ```no_run
/// use carbon_cli::ui::error;
///
/// error("HTML template not found: public/index.html");
/// ```
pub fn error(message: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    } else {
        eprintln!("✗ {message}");
    }
}

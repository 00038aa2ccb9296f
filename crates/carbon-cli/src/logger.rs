//! Logging setup for the carbon CLI.
//!
//! Logs are `tracing` events written to stderr by a compact fmt layer, so the
//! plan on stdout stays machine-readable.
//!
//! # Example
//!
//! ```rust,no_run
//! use carbon_cli::logger::init_logger;
//! use tracing::{debug, info};
//!
//! init_logger(false, false, false);
//!
//! info!("resolving plan");
//! debug!(mode = "production", "selected mode");
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "carbon=debug,carbon_config=debug,carbon_cli=debug";
const QUIET_FILTER: &str = "carbon=error,carbon_config=error,carbon_cli=error";
const DEFAULT_FILTER: &str = "carbon=info,carbon_config=info,carbon_cli=info";

/// Build the filter for the given verbosity flags.
///
/// The level is chosen in this order:
/// 1. `verbose`: DEBUG for carbon crates
/// 2. `quiet`: ERROR only
/// 3. `RUST_LOG`
/// 4. INFO for carbon crates
///
/// # Examples
///
/// ```
/// use carbon_cli::logger::filter_for;
///
/// let filter = filter_for(true, false);
/// assert!(filter.to_string().contains("carbon_config=debug"));
/// ```
pub fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the global subscriber. Call once, before any logging.
///
/// A second call is a no-op.
///
/// # Arguments
///
/// * `verbose` - Enable debug-level logging (overrides `quiet`)
/// * `quiet` - Only show error-level logs
/// * `no_color` - Disable ANSI colors in log lines
///
/// # Examples
///
/// ```rust,no_run
/// use carbon_cli::logger::init_logger;
///
/// // Default logging (INFO level, colored)
/// init_logger(false, false, false);
///
/// // Quiet mode for scripts
/// init_logger(false, true, true);
/// ```
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    // try_init: a subscriber may already be installed (tests)
    let _ = tracing_subscriber::registry()
        .with(filter_for(verbose, quiet))
        .with(fmt_layer)
        .try_init();
}

//! Terminal output: status lines on stderr and the plan summary.

mod format;
mod messages;

use std::sync::atomic::{AtomicBool, Ordering};

pub use format::render_summary;
pub use messages::{error, info, success, warning};

static COLORS: AtomicBool = AtomicBool::new(true);
static QUIET: AtomicBool = AtomicBool::new(false);

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR, then falls back to terminal detection.
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    console::user_attended_stderr()
}

/// Configure status output once, before any command runs.
///
/// # Arguments
///
/// * `no_color` - Disable colors regardless of the terminal
/// * `quiet` - Drop every status line except errors
///
/// # Examples
///
/// ```no_run
/// use carbon_cli::ui;
///
/// // Piped output in CI
/// ui::init(true, false);
///
/// // `carbon --quiet check`
/// ui::init(false, true);
/// ```
pub fn init(no_color: bool, quiet: bool) {
    COLORS.store(!no_color && should_use_color(), Ordering::Relaxed);
    QUIET.store(quiet, Ordering::Relaxed);
}

pub(crate) fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}

pub(crate) fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

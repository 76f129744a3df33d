//! Supporting helpers: colored stderr prefixes for diagnostics.

use owo_colors::OwoColorize;

fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Prefix for fatal diagnostics on stderr.
pub fn error_prefix() -> String {
    if colors_enabled() {
        "✖ error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

/// Prefix for recoverable problems (missing root directories).
pub fn warn_prefix() -> String {
    if colors_enabled() {
        "▲ warning:".yellow().bold().to_string()
    } else {
        "warning:".to_string()
    }
}

/// Prefix for advisory notes (defaults in effect).
pub fn note_prefix() -> String {
    if colors_enabled() {
        "◆ note:".blue().bold().to_string()
    } else {
        "note:".to_string()
    }
}

/// Prefix for informational progress lines.
pub fn info_prefix() -> String {
    if colors_enabled() {
        "◆ info:".blue().to_string()
    } else {
        "info:".to_string()
    }
}

//! Consolidated styling module for terminal output.
//!
//! Two separate concerns live here:
//! - Diagnostic messages (errors, hints, warnings) use the anstyle ecosystem,
//!   with anstream auto-detecting color support on stderr.
//! - Summary output uses [`StyleCode`] lists from the user's config, rendered
//!   as raw SGR escapes so that shell prompts keep their colors when captured.

mod constants;
mod sgr;

pub use constants::*;
pub use sgr::{RESET, StyleCode, escape_sequence};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

// ============================================================================
// Re-export from anstream (auto-detecting output)
// ============================================================================

/// Auto-detecting eprintln that respects NO_COLOR, CLICOLOR_FORCE, and terminal capabilities
pub use anstream::eprintln;

// ============================================================================
// Width helpers
// ============================================================================

/// Visible width of plain text (unicode-aware, no ANSI codes expected).
pub fn text_width(text: &str) -> usize {
    text.width()
}

/// Keep the longest prefix of `text` whose visible width is at most `max_width`.
///
/// Cuts on character boundaries; a wide character that would straddle the
/// limit is dropped rather than split.
pub fn truncate_to_width(text: &str, max_width: usize) -> &str {
    let mut width = 0;
    for (idx, ch) in text.char_indices() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width {
            return &text[..idx];
        }
        width += ch_width;
    }
    text
}

/// Get terminal width, defaulting to 80 if detection fails.
///
/// `COLUMNS` takes precedence so that prompts and tests can pin the width.
pub fn get_terminal_width() -> usize {
    if let Some(cols) = std::env::var("COLUMNS")
        .ok()
        .and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
    {
        return cols;
    }

    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| w as usize)
        .unwrap_or(80)
}

/// Formats text with a gutter (single dimmed bar) on each line.
///
/// Used for quoted content inside error messages, such as git's stderr or
/// the underlying cause of a configuration error.
pub fn format_with_gutter(content: &str) -> String {
    content
        .lines()
        .map(|line| format!("{GUTTER}\u{2502}{GUTTER:#} {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

//! Style constants and emojis for diagnostic output
//!
//! Use `cformat!` with HTML-like tags for user-facing messages:
//!
//! ```
//! use color_print::cformat;
//!
//! let branch = "feature";
//! let msg = cformat!("<red>Unknown target <bold>{branch}</></>");
//! ```
//!
//! A few `Style` constants remain for programmatic use where computed styles
//! are needed at runtime (error `Display` impls, gutters).

use std::fmt;

use anstyle::{AnsiColor, Color, Style};
use color_print::cformat;

/// Error style (red) - use as `{ERROR}text{ERROR:#}`
pub const ERROR: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red)));

/// Bold error style, for names inside an error message
pub const ERROR_BOLD: Style = ERROR.bold();

/// Gutter style for quoted content (git stderr, config parse errors)
pub const GUTTER: Style = Style::new().dimmed();

/// Error emoji: `cformat!("{ERROR_EMOJI} <red>message</>")`
pub const ERROR_EMOJI: &str = "❌";

/// Warning emoji: `cformat!("{WARNING_EMOJI} <yellow>message</>")`
pub const WARNING_EMOJI: &str = "🟡";

/// Hint emoji: `cformat!("{HINT_EMOJI} <dim>message</>")`
pub const HINT_EMOJI: &str = "💡";

// ============================================================================
// Formatted Message Type
// ============================================================================

/// A message that has already been formatted with emoji and styling.
///
/// Message functions take `impl AsRef<str>` and return `FormattedMessage`.
/// Since `FormattedMessage` does NOT implement `AsRef<str>`, formatting a
/// message twice is a compile error.
///
/// ```compile_fail
/// use gitsummary::styling::error_message;
///
/// let msg = error_message("first error");
/// let double = error_message(msg);
/// ```
#[derive(Debug, Clone)]
pub struct FormattedMessage(String);

impl FormattedMessage {
    /// Borrow the inner string for inspection (e.g., in tests).
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormattedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Format an error message with emoji and red styling
pub fn error_message(content: impl AsRef<str>) -> FormattedMessage {
    FormattedMessage(cformat!("{ERROR_EMOJI} <red>{}</>", content.as_ref()))
}

/// Format a warning message with emoji and yellow styling
pub fn warning_message(content: impl AsRef<str>) -> FormattedMessage {
    FormattedMessage(cformat!("{WARNING_EMOJI} <yellow>{}</>", content.as_ref()))
}

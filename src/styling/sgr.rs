//! Named style tokens and their SGR escape codes.
//!
//! Config files name styles (`"bright"`, `"fg-green"`, `"bg-black"`); this
//! module owns the static name → code table and the escape sequence format.
//! Several codes combine into a single escape: `["bright", "fg-red"]` renders
//! as `ESC[1;31m`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Escape that resets every attribute; appended after each styled run.
pub const RESET: &str = "\x1b[0m";

/// Separator between codes inside one escape sequence.
const CODE_SEPARATOR: &str = ";";

/// A named style that can appear in a config `style = [...]` list.
///
/// Unknown names fail deserialization, which surfaces as a configuration
/// error before any output is produced.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum StyleCode {
    Normal,
    Bright,
    Dim,
    Blink,
    Overline,
    Reverse,
    StrikeThrough,
    Underline,
    FgBlack,
    FgRed,
    FgGreen,
    FgYellow,
    FgBlue,
    FgMagenta,
    FgCyan,
    FgWhite,
    BgBlack,
    BgRed,
    BgGreen,
    BgYellow,
    BgBlue,
    BgMagenta,
    BgCyan,
    BgWhite,
}

impl StyleCode {
    /// The numeric SGR parameter for this style.
    pub const fn code(self) -> u8 {
        match self {
            StyleCode::Normal => 0,
            StyleCode::Bright => 1,
            StyleCode::Dim => 2,
            StyleCode::Underline => 4,
            StyleCode::Blink => 5,
            StyleCode::Reverse => 7,
            StyleCode::StrikeThrough => 9,
            StyleCode::Overline => 53,
            StyleCode::FgBlack => 30,
            StyleCode::FgRed => 31,
            StyleCode::FgGreen => 32,
            StyleCode::FgYellow => 33,
            StyleCode::FgBlue => 34,
            StyleCode::FgMagenta => 35,
            StyleCode::FgCyan => 36,
            StyleCode::FgWhite => 37,
            StyleCode::BgBlack => 40,
            StyleCode::BgRed => 41,
            StyleCode::BgGreen => 42,
            StyleCode::BgYellow => 43,
            StyleCode::BgBlue => 44,
            StyleCode::BgMagenta => 45,
            StyleCode::BgCyan => 46,
            StyleCode::BgWhite => 47,
        }
    }
}

/// Build the single escape sequence selecting every style in `styles`.
///
/// Returns an empty string for an empty list so unstyled text stays raw.
pub fn escape_sequence(styles: &[StyleCode]) -> String {
    if styles.is_empty() {
        return String::new();
    }
    let codes: Vec<String> = styles.iter().map(|s| s.code().to_string()).collect();
    format!("\x1b[{}m", codes.join(CODE_SEPARATOR))
}

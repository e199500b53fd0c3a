//! Width-bounded rendering of a [`TokenLine`].
//!
//! When a line is too wide, the branch name is shortened and marked with
//! [`ELLIPSIS`]. If the branch name is too short to absorb the overflow,
//! the line collapses to the branch name alone. A line without a branch
//! name that does not fit is replaced by [`OVERFLOW_PLACEHOLDER`].

use super::tokens::{DisplayToken, TokenLine};
use crate::styling::{RESET, escape_sequence, text_width, truncate_to_width};

pub(crate) const ELLIPSIS: &str = "...";

/// Shown in place of a line that cannot be shortened to fit.
pub(crate) const OVERFLOW_PLACEHOLDER: &str = "[gitsummary: too narrow]";

/// Render `line` to a string no wider than `max_width` columns.
///
/// In test mode the line is emitted as is, whatever its width.
pub fn render(line: &TokenLine, max_width: usize, test_mode: bool) -> String {
    let visible = line.visible_length();
    if test_mode || visible <= max_width {
        return concat(line.tokens());
    }

    let excess = visible - max_width + text_width(ELLIPSIS);
    let Some(branch) = line.branch_name() else {
        log::debug!("Line of width {visible} exceeds {max_width} and has no branch name");
        return OVERFLOW_PLACEHOLDER.to_string();
    };

    let branch_width = branch.visible_length();
    if branch_width >= excess {
        let kept = truncate_to_width(&branch.text, branch_width - excess);
        let mut shortened = line.clone();
        if let Some(token) = shortened.branch_name_mut() {
            token.text = format!("{kept}{ELLIPSIS}");
        }
        concat(shortened.tokens())
    } else {
        styled(&DisplayToken::new(
            &branch.styles,
            truncate_to_width(&branch.text, max_width),
        ))
    }
}

fn concat(tokens: &[DisplayToken]) -> String {
    tokens.iter().map(styled).collect()
}

fn styled(token: &DisplayToken) -> String {
    if token.text.is_empty() {
        String::new()
    } else if token.styles.is_empty() {
        token.text.clone()
    } else {
        format!("{}{}{RESET}", escape_sequence(&token.styles), token.text)
    }
}

/// Width and styling choices shared by every line of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub max_width: usize,
    pub test_mode: bool,
    /// `false` drops all styles before rendering (`--no-style`).
    pub styled: bool,
}

impl RenderOptions {
    pub fn render(&self, line: TokenLine) -> String {
        let line = if self.styled { line } else { line.strip_styles() };
        render(&line, self.max_width, self.test_mode)
    }
}

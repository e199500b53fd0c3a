//! Styled text pieces that make up one line of output.

use crate::styling::{StyleCode, text_width};

/// A run of text and the styles it is displayed with.
///
/// Escape sequences are never stored in `text`; the renderer derives them
/// from `styles`, so `text` is exactly what occupies the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayToken {
    pub styles: Vec<StyleCode>,
    pub text: String,
}

impl DisplayToken {
    pub fn new(styles: &[StyleCode], text: impl Into<String>) -> Self {
        Self {
            styles: styles.to_vec(),
            text: text.into(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(&[], text)
    }

    /// Style-only tokens (empty text) take up no columns.
    pub fn contributes_to_visible_length(&self) -> bool {
        !self.text.is_empty()
    }

    pub fn visible_length(&self) -> usize {
        text_width(&self.text)
    }
}

/// An ordered sequence of tokens forming one output line.
///
/// At most one token is the branch name; the renderer shortens that token
/// first when the line is too wide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenLine {
    tokens: Vec<DisplayToken>,
    branch_name: Option<usize>,
}

impl TokenLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: DisplayToken) {
        self.tokens.push(token);
    }

    /// Append the branch-name token.
    pub fn push_branch_name(&mut self, token: DisplayToken) {
        debug_assert!(self.branch_name.is_none(), "line already has a branch name");
        self.branch_name = Some(self.tokens.len());
        self.tokens.push(token);
    }

    pub fn tokens(&self) -> &[DisplayToken] {
        &self.tokens
    }

    pub fn branch_name(&self) -> Option<&DisplayToken> {
        self.branch_name.map(|i| &self.tokens[i])
    }

    pub(crate) fn branch_name_mut(&mut self) -> Option<&mut DisplayToken> {
        self.branch_name.map(|i| &mut self.tokens[i])
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.iter().all(|t| !t.contributes_to_visible_length())
    }

    /// Terminal columns the line occupies, escapes excluded.
    pub fn visible_length(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| t.contributes_to_visible_length())
            .map(DisplayToken::visible_length)
            .sum()
    }

    /// Drop every style, keeping text and the branch-name mark.
    pub fn strip_styles(mut self) -> Self {
        for token in &mut self.tokens {
            token.styles.clear();
        }
        self
    }

    /// Remove trailing whitespace from the end of the line.
    pub fn trim_end(&mut self) {
        for token in self.tokens.iter_mut().rev() {
            let trimmed = token.text.trim_end().len();
            token.text.truncate(trimmed);
            if !token.text.is_empty() {
                break;
            }
        }
    }
}

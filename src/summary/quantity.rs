//! The quantities a compact summary can show, and how each is displayed.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::styling::StyleCode;

/// One displayable fact about the working copy.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    clap::ValueEnum,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Quantity {
    /// Current branch name, or the detached commit's description.
    Branch,
    /// Remote-tracking branch of the current branch.
    Remote,
    /// Merge target of the current branch.
    Target,
    Stashes,
    Staged,
    Modified,
    Unmerged,
    Untracked,
    AheadRemote,
    BehindRemote,
    AheadTarget,
    BehindTarget,
}

/// Whether a quantity holds a count or a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum QuantityKind {
    Numeric,
    String,
}

impl Quantity {
    pub const fn kind(self) -> QuantityKind {
        match self {
            Quantity::Branch | Quantity::Remote | Quantity::Target => QuantityKind::String,
            _ => QuantityKind::Numeric,
        }
    }
}

/// When a quantity appears in the compact summary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, strum::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Visibility {
    /// Numeric: prefix, value and suffix when non-zero.
    Num,
    /// Numeric: prefix alone when non-zero.
    Boolean,
    /// String: the value when present.
    Yes,
    /// Never shown.
    No,
}

impl Visibility {
    pub const fn allowed(kind: QuantityKind) -> &'static [Visibility] {
        match kind {
            QuantityKind::Numeric => &[Visibility::Num, Visibility::Boolean, Visibility::No],
            QuantityKind::String => &[Visibility::Yes, Visibility::No],
        }
    }

    pub fn is_allowed_for(self, kind: QuantityKind) -> bool {
        Self::allowed(kind).contains(&self)
    }
}

/// Display settings for one quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityFormat {
    pub show: Visibility,
    pub prefix: String,
    pub suffix: String,
    pub style: Vec<StyleCode>,
}

impl QuantityFormat {
    fn new(show: Visibility, prefix: &str, style: &[StyleCode]) -> Self {
        Self {
            show,
            prefix: prefix.to_string(),
            suffix: String::new(),
            style: style.to_vec(),
        }
    }

    /// Built-in display settings, used for any quantity the config leaves out.
    pub fn builtin(quantity: Quantity) -> Self {
        use StyleCode::*;
        use Visibility::*;
        match quantity {
            Quantity::Branch => Self::new(Yes, "", &[FgMagenta]),
            Quantity::Remote | Quantity::Target => Self::new(No, "", &[]),
            Quantity::AheadRemote => Self::new(Num, "↑", &[]),
            Quantity::BehindRemote => Self::new(Num, "↓", &[]),
            Quantity::AheadTarget | Quantity::BehindTarget => Self::new(No, "", &[]),
            Quantity::Stashes => Self::new(Boolean, "$", &[]),
            Quantity::Staged => Self::new(Num, "+", &[FgGreen]),
            Quantity::Modified => Self::new(Num, "*", &[FgRed]),
            Quantity::Unmerged => Self::new(Num, "!", &[FgRed]),
            Quantity::Untracked => Self::new(Boolean, "%", &[]),
        }
    }
}

/// Display settings for every quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityFormats {
    // Indexed by `Quantity as usize`
    formats: Vec<QuantityFormat>,
}

impl QuantityFormats {
    pub fn get(&self, quantity: Quantity) -> &QuantityFormat {
        &self.formats[quantity as usize]
    }

    pub fn set(&mut self, quantity: Quantity, format: QuantityFormat) {
        self.formats[quantity as usize] = format;
    }
}

impl Default for QuantityFormats {
    fn default() -> Self {
        Self {
            formats: Quantity::iter().map(QuantityFormat::builtin).collect(),
        }
    }
}

/// Text placed between consecutive visible quantities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separator {
    pub text: String,
    pub style: Vec<StyleCode>,
}

impl Default for Separator {
    fn default() -> Self {
        Self {
            text: " ".to_string(),
            style: Vec::new(),
        }
    }
}

/// Sections of the compact summary when none are configured.
pub const DEFAULT_PROMPT_SECTIONS: &[Quantity] = &[
    Quantity::Branch,
    Quantity::AheadRemote,
    Quantity::BehindRemote,
    Quantity::Stashes,
    Quantity::Staged,
    Quantity::Modified,
    Quantity::Unmerged,
    Quantity::Untracked,
];

//! The config file as written on disk.
//!
//! Every field is optional; whatever is left out falls back to the built-in
//! defaults when [`Config`](super::Config) is built from it.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::Deserialize;

use crate::styling::StyleCode;
use crate::summary::{FullSection, Quantity, Visibility};

#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigFile {
    /// Regexes ranking branches in the full view; earlier matches sort first.
    pub branch_order: Option<Vec<String>>,
    /// Target for branches no rule matches. `""` means no target.
    pub default_target: Option<String>,
    /// Ordered merge-target rules; the first matching pattern wins.
    pub rules: Option<Vec<RuleEntry>>,
    #[serde(default)]
    pub full: FullTable,
    #[serde(default)]
    pub prompt: PromptTable,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct RuleEntry {
    pub pattern: String,
    /// `""` means no target.
    pub target: String,
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct FullTable {
    pub sections: Option<Vec<FullSection>>,
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PromptTable {
    pub sections: Option<Vec<Quantity>>,
    pub separator: Option<SeparatorEntry>,
    /// Keyed by quantity name, e.g. `[prompt.quantities.ahead-remote]`.
    #[serde(default)]
    pub quantities: BTreeMap<String, QuantityEntry>,
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SeparatorEntry {
    pub text: Option<String>,
    pub style: Option<Vec<StyleCode>>,
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct QuantityEntry {
    pub show: Option<Visibility>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub style: Option<Vec<StyleCode>>,
}

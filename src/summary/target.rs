//! Merge-target classification.
//!
//! Each branch is mapped to the branch it is expected to merge into. Rules
//! are regular expressions tried in order; the first match wins, and a
//! terminal default covers everything else.

use std::sync::LazyLock;

use config::ConfigError;
use regex::Regex;

/// Rules used when the config file has no `[[rules]]`.
pub const BUILTIN_RULES: &[(&str, &str)] = &[
    ("^master$", ""),
    ("^develop$", "master"),
    ("^hotfix-", "master"),
    ("^release-", "master"),
];

pub const BUILTIN_DEFAULT_TARGET: &str = "develop";

static BUILTIN: LazyLock<TargetRules> = LazyLock::new(|| {
    TargetRules::compile(BUILTIN_RULES.iter().copied(), BUILTIN_DEFAULT_TARGET)
        .expect("built-in target patterns are valid")
});

/// The branch a branch merges into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Branch(String),
    /// The branch has no merge target (e.g. `master` itself).
    NoTarget,
}

impl Target {
    /// Build a target from its config spelling, where `""` means no target.
    pub fn from_name(name: &str) -> Self {
        if name.is_empty() {
            Target::NoTarget
        } else {
            Target::Branch(name.to_string())
        }
    }

    pub fn branch(&self) -> Option<&str> {
        match self {
            Target::Branch(name) => Some(name),
            Target::NoTarget => None,
        }
    }
}

#[derive(Debug, Clone)]
struct TargetRule {
    pattern: Regex,
    target: Target,
}

/// Ordered first-match rules plus a default.
#[derive(Debug, Clone)]
pub struct TargetRules {
    rules: Vec<TargetRule>,
    default: Target,
}

impl TargetRules {
    /// Compile `(pattern, target)` pairs. An invalid pattern is a
    /// configuration error naming the pattern.
    pub fn compile<'a>(
        rules: impl IntoIterator<Item = (&'a str, &'a str)>,
        default_target: &str,
    ) -> Result<Self, ConfigError> {
        let rules = rules
            .into_iter()
            .map(|(pattern, target)| {
                let pattern = Regex::new(pattern).map_err(|e| {
                    ConfigError::Message(format!("Invalid rule pattern {pattern:?}: {e}"))
                })?;
                Ok(TargetRule {
                    pattern,
                    target: Target::from_name(target),
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;
        Ok(Self {
            rules,
            default: Target::from_name(default_target),
        })
    }

    /// The target for `branch`: first matching rule, else the default.
    pub fn resolve(&self, branch: &str) -> &Target {
        match self.rules.iter().find(|rule| rule.pattern.is_match(branch)) {
            Some(rule) => {
                log::debug!("{branch}: matched rule {} -> {:?}", rule.pattern, rule.target);
                &rule.target
            }
            None => &self.default,
        }
    }
}

impl Default for TargetRules {
    fn default() -> Self {
        BUILTIN.clone()
    }
}

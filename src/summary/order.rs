//! Deterministic display order for branches.

use std::cmp::Ordering;

use config::ConfigError;
use regex::Regex;

/// Order used when the config file has no `branch-order`.
const BUILTIN_BRANCH_ORDER: &[&str] = &["^master$", "^develop$"];

/// Branches matching an earlier pattern sort first; ties and unmatched
/// branches sort by name.
#[derive(Debug, Clone)]
pub struct BranchOrder {
    patterns: Vec<Regex>,
}

impl BranchOrder {
    pub fn compile<S: AsRef<str>>(patterns: &[S]) -> Result<Self, ConfigError> {
        let patterns = patterns
            .iter()
            .map(|p| {
                Regex::new(p.as_ref()).map_err(|e| {
                    ConfigError::Message(format!(
                        "Invalid branch-order pattern {:?}: {e}",
                        p.as_ref()
                    ))
                })
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { patterns })
    }

    /// Index of the first matching pattern, `None` if none match.
    pub fn rank(&self, name: &str) -> Option<usize> {
        self.patterns.iter().position(|p| p.is_match(name))
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let key = |name: &str| self.rank(name).unwrap_or(usize::MAX);
        key(a).cmp(&key(b)).then_with(|| a.cmp(b))
    }

    pub fn sort<T>(&self, items: &mut [T], name: impl Fn(&T) -> &str) {
        items.sort_by(|a, b| self.compare(name(a), name(b)));
    }
}

impl Default for BranchOrder {
    fn default() -> Self {
        Self::compile(BUILTIN_BRANCH_ORDER).expect("built-in branch-order patterns are valid")
    }
}

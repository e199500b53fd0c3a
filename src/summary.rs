//! The working copy summary: query, classify, assemble, render.
//!
//! [`Summary::collect`] runs every [`VcsQuery`](crate::git::VcsQuery) once;
//! everything after that works on the collected values and never touches
//! git again.

mod assemble;
mod branch;
mod fields;
mod full;
mod order;
mod quantity;
mod render;
mod target;
#[cfg(test)]
pub(crate) mod testing;
mod tokens;

pub use assemble::{QuantityValue, assemble, check_visibility};
pub use branch::{Branch, BranchSet, Divergence};
pub use fields::format_fields;
pub use full::{DEFAULT_FULL_SECTIONS, FullSection, full_view};
pub use order::BranchOrder;
pub use quantity::{
    DEFAULT_PROMPT_SECTIONS, Quantity, QuantityFormat, QuantityFormats, QuantityKind, Separator,
    Visibility,
};
pub use render::{RenderOptions, render};
pub use target::{BUILTIN_DEFAULT_TARGET, BUILTIN_RULES, Target, TargetRules};
pub use tokens::{DisplayToken, TokenLine};

use config::ConfigError;

use crate::git::{FileStatuses, Stash, StatusCounts, VcsQuery};

/// Everything shown about one working copy at one point in time.
#[derive(Debug, Clone)]
pub struct Summary {
    pub branches: BranchSet,
    pub statuses: FileStatuses,
    pub stashes: Vec<Stash>,
}

impl Summary {
    pub fn collect(
        vcs: &impl VcsQuery,
        rules: &TargetRules,
        order: &BranchOrder,
    ) -> anyhow::Result<Self> {
        let branches = BranchSet::resolve(vcs, rules, order)?;
        let statuses = vcs.file_statuses()?;
        let stashes = vcs.stashes()?;
        Ok(Self {
            branches,
            statuses,
            stashes,
        })
    }

    pub fn counts(&self) -> StatusCounts {
        StatusCounts::new(&self.statuses, &self.stashes)
    }

    /// The value of `quantity` for the current branch.
    pub fn value(&self, quantity: Quantity) -> QuantityValue {
        let counts = self.counts();
        let current = self.branches.current();
        let remote = current.and_then(|b| b.remote_divergence);
        let target = current.and_then(|b| b.target_divergence);
        match quantity {
            Quantity::Branch => QuantityValue::Text(Some(self.branches.head_name().to_string())),
            Quantity::Remote => QuantityValue::Text(current.and_then(|b| b.remote.clone())),
            Quantity::Target => {
                QuantityValue::Text(current.and_then(|b| b.target.branch()).map(str::to_owned))
            }
            Quantity::Stashes => QuantityValue::Count(Some(counts.stashes)),
            Quantity::Staged => QuantityValue::Count(Some(counts.staged)),
            Quantity::Modified => QuantityValue::Count(Some(counts.modified)),
            Quantity::Unmerged => QuantityValue::Count(Some(counts.unmerged)),
            Quantity::Untracked => QuantityValue::Count(Some(counts.untracked)),
            Quantity::AheadRemote => QuantityValue::Count(remote.map(|d| d.ahead)),
            Quantity::BehindRemote => QuantityValue::Count(remote.map(|d| d.behind)),
            Quantity::AheadTarget => QuantityValue::Count(target.map(|d| d.ahead)),
            Quantity::BehindTarget => QuantityValue::Count(target.map(|d| d.behind)),
        }
    }

    /// Assemble the compact one-line summary.
    pub fn prompt_line(
        &self,
        sections: &[Quantity],
        formats: &QuantityFormats,
        separator: &Separator,
    ) -> Result<TokenLine, ConfigError> {
        assemble(sections, |quantity| self.value(quantity), formats, separator)
    }

    /// The machine-readable compact form.
    pub fn fields(&self, quantities: &[Quantity]) -> String {
        format_fields(quantities, |quantity| self.value(quantity))
    }

    /// The multi-section view, one string per line.
    pub fn full_view(&self, sections: &[FullSection], options: &RenderOptions) -> Vec<String> {
        full_view(self, sections, options)
    }
}

//! Per-branch relationships: upstream and merge-target divergence.

use std::collections::HashSet;

use super::order::BranchOrder;
use super::target::{Target, TargetRules};
use crate::git::{HeadRef, VcsQuery, branch_refname};

/// Commits on one side only of a symmetric difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Divergence {
    pub ahead: usize,
    pub behind: usize,
}

impl Divergence {
    /// Count commits on `a` but not `b` (ahead) and the reverse (behind).
    pub fn between(vcs: &impl VcsQuery, a: &str, b: &str) -> anyhow::Result<Self> {
        let (ahead, behind) = vcs.ahead_behind(a, b)?;
        Ok(Self { ahead, behind })
    }

    pub fn is_even(&self) -> bool {
        self.ahead == 0 && self.behind == 0
    }
}

/// A branch and how it relates to its upstream and merge target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub name: String,
    pub is_current: bool,
    pub remote: Option<String>,
    /// Present exactly when `remote` is.
    pub remote_divergence: Option<Divergence>,
    pub target: Target,
    /// Present exactly when `target` names a branch.
    pub target_divergence: Option<Divergence>,
}

impl Branch {
    /// Stand-in for a detached HEAD: current, with no upstream and no target.
    fn detached(description: &str) -> Self {
        Self {
            name: description.to_string(),
            is_current: true,
            remote: None,
            remote_divergence: None,
            target: Target::NoTarget,
            target_divergence: None,
        }
    }

    /// Whether the branch has commits its upstream lacks, or vice versa.
    pub fn differs_from_remote(&self) -> bool {
        self.remote_divergence.is_some_and(|d| !d.is_even())
    }
}

/// Every local branch, in display order, plus what HEAD points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchSet {
    pub branches: Vec<Branch>,
    pub head: HeadRef,
}

impl BranchSet {
    /// Query branches and compute their relationships.
    ///
    /// A repository without commits has no branches and yields an empty set.
    /// A detached HEAD appears as an extra branch named by its description.
    pub fn resolve(
        vcs: &impl VcsQuery,
        rules: &TargetRules,
        order: &BranchOrder,
    ) -> anyhow::Result<Self> {
        let locals = vcs.local_branches()?;
        let head = vcs.head()?;
        let local_names: HashSet<&str> = locals.iter().map(|b| b.name.as_str()).collect();

        let mut branches = locals
            .iter()
            .map(|local| {
                let name = local.name.as_str();
                let refname = local.refname();
                let remote_divergence = local
                    .upstream
                    .as_ref()
                    .map(|upstream| Divergence::between(vcs, &refname, &upstream.refname))
                    .transpose()?;

                let target = match rules.resolve(name) {
                    Target::Branch(target)
                        if target != name && local_names.contains(target.as_str()) =>
                    {
                        Target::Branch(target.clone())
                    }
                    Target::Branch(target) => {
                        log::debug!("{name}: target {target} is not another local branch");
                        Target::NoTarget
                    }
                    Target::NoTarget => Target::NoTarget,
                };
                let target_divergence = target
                    .branch()
                    .map(|target| Divergence::between(vcs, &refname, &branch_refname(target)))
                    .transpose()?;

                Ok::<_, anyhow::Error>(Branch {
                    name: local.name.clone(),
                    is_current: matches!(&head, HeadRef::Branch(current) if current == name),
                    remote: local.upstream.as_ref().map(|u| u.name.clone()),
                    remote_divergence,
                    target,
                    target_divergence,
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        if let HeadRef::Detached(description) = &head {
            branches.push(Branch::detached(description));
        }
        order.sort(&mut branches, |b| b.name.as_str());

        Ok(Self { branches, head })
    }

    /// The checked-out branch, if it exists yet.
    pub fn current(&self) -> Option<&Branch> {
        self.branches.iter().find(|b| b.is_current)
    }

    /// The name shown for HEAD: branch name (even if unborn) or detached
    /// description.
    pub fn head_name(&self) -> &str {
        match &self.head {
            HeadRef::Branch(name) | HeadRef::Detached(name) => name,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }
}

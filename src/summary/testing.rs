//! In-memory [`VcsQuery`] for driving the summary pipeline in tests.

use std::collections::HashMap;

use anyhow::anyhow;

use crate::git::{BRANCH_REF_PREFIX, FileStatuses, HeadRef, LocalBranch, Stash, Upstream, VcsQuery};

const REMOTE_REF_PREFIX: &str = "refs/remotes/";

pub(crate) struct FakeVcs {
    branches: Vec<LocalBranch>,
    head: HeadRef,
    divergences: HashMap<(String, String), (usize, usize)>,
    statuses: FileStatuses,
    stashes: Vec<Stash>,
}

impl FakeVcs {
    pub fn new(head: &str) -> Self {
        Self::with_head(HeadRef::Branch(head.into()))
    }

    pub fn detached(description: &str) -> Self {
        Self::with_head(HeadRef::Detached(description.into()))
    }

    fn with_head(head: HeadRef) -> Self {
        Self {
            branches: Vec::new(),
            head,
            divergences: HashMap::new(),
            statuses: FileStatuses::default(),
            stashes: Vec::new(),
        }
    }

    /// Add a local branch; `upstream` is its short name, e.g. `origin/main`.
    pub fn branch(mut self, name: &str, upstream: Option<&str>) -> Self {
        let upstream = upstream.map(|u| Upstream::new(u, format!("{REMOTE_REF_PREFIX}{u}")));
        self.branches.push(LocalBranch::new(name, upstream));
        self
    }

    /// Record the answer for `a...b`, both given as short names.
    pub fn divergence(mut self, a: &str, b: &str, ahead: usize, behind: usize) -> Self {
        self.divergences.insert((a.into(), b.into()), (ahead, behind));
        self
    }

    pub fn statuses(mut self, statuses: FileStatuses) -> Self {
        self.statuses = statuses;
        self
    }

    pub fn stash(mut self, name: &str, description: &str) -> Self {
        self.stashes.push(Stash {
            name: name.into(),
            description: description.into(),
        });
        self
    }
}

impl VcsQuery for FakeVcs {
    fn local_branches(&self) -> anyhow::Result<Vec<LocalBranch>> {
        Ok(self.branches.clone())
    }

    fn head(&self) -> anyhow::Result<HeadRef> {
        Ok(self.head.clone())
    }

    fn ahead_behind(&self, a: &str, b: &str) -> anyhow::Result<(usize, usize)> {
        let (Some(short_a), Some(short_b)) = (short_name(a), short_name(b)) else {
            return Err(anyhow!("unqualified ref in query: {a}...{b}"));
        };
        self.divergences
            .get(&(short_a.to_string(), short_b.to_string()))
            .copied()
            .ok_or_else(|| anyhow!("unexpected query: {a}...{b}"))
    }

    fn file_statuses(&self) -> anyhow::Result<FileStatuses> {
        Ok(self.statuses.clone())
    }

    fn stashes(&self) -> anyhow::Result<Vec<Stash>> {
        Ok(self.stashes.clone())
    }
}

fn short_name(refname: &str) -> Option<&str> {
    refname
        .strip_prefix(BRANCH_REF_PREFIX)
        .or_else(|| refname.strip_prefix(REMOTE_REF_PREFIX))
}

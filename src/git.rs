//! Git queries behind a small facade.
//!
//! The summary pipeline only needs a handful of facts from version control:
//! local branches with their upstreams, what HEAD points at, ahead/behind
//! counts between two refs, file statuses, and stashes. [`VcsQuery`] is that
//! surface; [`Repository`] implements it by shelling out to `git`.

mod error;
mod repository;

pub use error::GitError;
pub use repository::Repository;

/// Namespace of local branch refs.
pub const BRANCH_REF_PREFIX: &str = "refs/heads/";

/// The full ref of local branch `name`.
///
/// Revisions are always passed to git fully qualified: a bare `develop`
/// resolves to `refs/tags/develop` first when such a tag exists.
pub fn branch_refname(name: &str) -> String {
    format!("{BRANCH_REF_PREFIX}{name}")
}

/// The remote-tracking branch a local branch follows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upstream {
    /// Display name such as `origin/main`.
    pub name: String,
    /// Full ref such as `refs/remotes/origin/main`.
    pub refname: String,
}

impl Upstream {
    pub fn new(name: impl Into<String>, refname: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            refname: refname.into(),
        }
    }
}

/// A local branch and the remote branch it tracks, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalBranch {
    pub name: String,
    /// `None` when no upstream is configured or the configured upstream ref
    /// no longer exists.
    pub upstream: Option<Upstream>,
}

impl LocalBranch {
    pub fn new(name: impl Into<String>, upstream: Option<Upstream>) -> Self {
        Self {
            name: name.into(),
            upstream,
        }
    }

    pub fn refname(&self) -> String {
        branch_refname(&self.name)
    }
}

/// What HEAD currently points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadRef {
    /// A branch, possibly unborn (no commits yet).
    Branch(String),
    /// A commit, described in human-readable form (`v1.2-3-gabc1234`).
    Detached(String),
}

/// One changed file as reported by `git status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    /// Status letter(s): `M`, `A`, `D`, `R`, `C`, `T`, or an unmerged pair like `UU`.
    pub code: String,
    /// Rename/copy similarity score, e.g. `100` for an exact rename.
    pub score: Option<String>,
    pub path: String,
    /// The source path for renames and copies.
    pub orig_path: Option<String>,
}

impl FileChange {
    pub fn new(code: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            score: None,
            path: path.into(),
            orig_path: None,
        }
    }

    /// Status column text: `M`, `R(100)`.
    pub fn code_label(&self) -> String {
        match &self.score {
            Some(score) => format!("{}({score})", self.code),
            None => self.code.clone(),
        }
    }

    /// Path column text: `path`, or `old -> new` for renames and copies.
    pub fn path_label(&self) -> String {
        match &self.orig_path {
            Some(orig) => format!("{orig} -> {}", self.path),
            None => self.path.clone(),
        }
    }
}

/// Working copy file statuses, split the way the summary displays them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileStatuses {
    /// Index differs from HEAD.
    pub staged: Vec<FileChange>,
    /// Working directory differs from the index.
    pub modified: Vec<FileChange>,
    pub unmerged: Vec<FileChange>,
    pub untracked: Vec<String>,
    /// Records `git status` produced that we could not parse.
    pub unknown: Vec<String>,
}

/// A stash entry: `stash@{0}` plus its reflog subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stash {
    pub name: String,
    pub description: String,
}

/// Number of stashes and of files in each status category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub stashes: usize,
    pub staged: usize,
    pub modified: usize,
    pub unmerged: usize,
    pub untracked: usize,
}

impl StatusCounts {
    pub fn new(statuses: &FileStatuses, stashes: &[Stash]) -> Self {
        Self {
            stashes: stashes.len(),
            staged: statuses.staged.len(),
            modified: statuses.modified.len(),
            unmerged: statuses.unmerged.len(),
            untracked: statuses.untracked.len(),
        }
    }
}

/// The version-control queries the summary consumes.
///
/// Every method is a blocking, point-in-time query. Any error aborts the
/// whole summary: partial output would not be internally consistent.
pub trait VcsQuery {
    /// Local branches, in whatever order the backend enumerates them.
    fn local_branches(&self) -> anyhow::Result<Vec<LocalBranch>>;

    /// The currently checked-out ref.
    fn head(&self) -> anyhow::Result<HeadRef>;

    /// `(ahead, behind)`: commits reachable from `a` but not `b`, and from `b`
    /// but not `a`. Both are full refnames (`refs/heads/...`,
    /// `refs/remotes/...`).
    fn ahead_behind(&self, a: &str, b: &str) -> anyhow::Result<(usize, usize)>;

    fn file_statuses(&self) -> anyhow::Result<FileStatuses>;

    fn stashes(&self) -> anyhow::Result<Vec<Stash>>;
}

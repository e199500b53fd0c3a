//! Repository context for git operations.

use std::path::PathBuf;

use super::error::says_not_a_repository;
use super::{FileStatuses, GitError, HeadRef, LocalBranch, Stash, VcsQuery};
use crate::shell_exec::Cmd;

mod branches;
mod status;

/// A git working copy, queried by running `git` with the path as working
/// directory.
///
/// ```no_run
/// use gitsummary::git::{Repository, VcsQuery};
///
/// let repo = Repository::discover(".")?;
/// let head = repo.head()?;
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Repository {
    path: PathBuf,
}

impl Repository {
    /// Create a repository context at the specified path without checking it.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a repository context at `path`, failing with
    /// [`GitError::NotARepository`] when it is not inside a working copy.
    pub fn discover(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let repo = Self::at(path);
        repo.git_dir()?;
        Ok(repo)
    }

    /// Get the git directory (`.git`, or the worktree's gitdir).
    pub fn git_dir(&self) -> anyhow::Result<PathBuf> {
        let stdout = self.run_command(&["rev-parse", "--git-dir"])?;
        Ok(self.path.join(stdout.trim()))
    }

    fn git(&self, args: &[&str]) -> Cmd {
        Cmd::new("git")
            .args(args.iter().copied())
            .current_dir(&self.path)
            // Status queries run on every prompt; never contend for index.lock
            .env("GIT_OPTIONAL_LOCKS", "0")
    }

    /// Run a git command in this repository's context and return its stdout.
    ///
    /// Non-zero exits become [`GitError::CommandFailed`], except git's
    /// "not a git repository" complaint which becomes
    /// [`GitError::NotARepository`].
    pub fn run_command(&self, args: &[&str]) -> anyhow::Result<String> {
        match self.run_command_allow_miss(args)? {
            Some(stdout) => Ok(stdout),
            None => Err(GitError::CommandFailed {
                command: format!("git {}", args.join(" ")),
                error: String::new(),
            }
            .into()),
        }
    }

    /// Like [`run_command`](Self::run_command), but a quiet exit status of 1
    /// (git's "no such thing" answer for `--quiet` lookups) yields `None`.
    pub(crate) fn run_command_allow_miss(&self, args: &[&str]) -> anyhow::Result<Option<String>> {
        let cmd = self.git(args);
        let command = cmd.display();
        let output = cmd.run().map_err(|e| GitError::CommandFailed {
            command: command.clone(),
            error: e.to_string(),
        })?;

        if output.status.success() {
            return Ok(Some(String::from_utf8_lossy(&output.stdout).into_owned()));
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        if says_not_a_repository(&stderr) {
            return Err(GitError::not_a_repository(&self.path).into());
        }
        if output.status.code() == Some(1) && stderr.trim().is_empty() {
            return Ok(None);
        }
        Err(GitError::CommandFailed {
            command,
            error: stderr.into_owned(),
        }
        .into())
    }
}

impl VcsQuery for Repository {
    fn local_branches(&self) -> anyhow::Result<Vec<LocalBranch>> {
        self.list_local_branches()
    }

    fn head(&self) -> anyhow::Result<HeadRef> {
        self.head_ref()
    }

    fn ahead_behind(&self, a: &str, b: &str) -> anyhow::Result<(usize, usize)> {
        self.count_ahead_behind(a, b)
    }

    fn file_statuses(&self) -> anyhow::Result<FileStatuses> {
        self.list_file_statuses()
    }

    fn stashes(&self) -> anyhow::Result<Vec<Stash>> {
        self.list_stashes()
    }
}

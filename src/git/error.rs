//! Git query errors.
//!
//! Uses anyhow for error propagation. `GitError` is a minimal enum for the
//! failures main.rs needs to recognize and print with styling. All of them
//! are fatal: the summary is only meaningful if every query succeeded.

use std::path::{Path, PathBuf};

use color_print::cformat;

use crate::styling::{ERROR, ERROR_BOLD, ERROR_EMOJI, HINT_EMOJI, format_with_gutter};

#[derive(Debug)]
pub enum GitError {
    /// The directory is not inside a git working copy.
    NotARepository { path: PathBuf },
    /// A git command exited non-zero or could not be spawned.
    CommandFailed { command: String, error: String },
    /// Git printed something we could not interpret.
    ParseError { command: String, output: String },
}

impl std::fmt::Display for GitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GitError::NotARepository { path } => {
                write!(
                    f,
                    "{ERROR_EMOJI} {ERROR}Not a git repository: {ERROR_BOLD}{}{ERROR_BOLD:#}{ERROR:#}\n\n{}",
                    path.display(),
                    not_a_repository_hint()
                )
            }
            GitError::CommandFailed { command, error } => {
                write!(
                    f,
                    "{ERROR_EMOJI} {ERROR}Command failed: {ERROR_BOLD}{command}{ERROR_BOLD:#}{ERROR:#}"
                )?;
                let trimmed = error.trim();
                if !trimmed.is_empty() {
                    write!(f, "\n{}", format_with_gutter(trimmed))?;
                }
                Ok(())
            }
            GitError::ParseError { command, output } => {
                write!(
                    f,
                    "{ERROR_EMOJI} {ERROR}Unexpected output from {ERROR_BOLD}{command}{ERROR_BOLD:#}{ERROR:#}"
                )?;
                let trimmed = output.trim();
                if !trimmed.is_empty() {
                    write!(f, "\n{}", format_with_gutter(trimmed))?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for GitError {}

impl GitError {
    pub fn not_a_repository(path: &Path) -> Self {
        GitError::NotARepository {
            path: path.to_path_buf(),
        }
    }
}

/// Hint shown below a "not a git repository" error.
fn not_a_repository_hint() -> String {
    cformat!("{HINT_EMOJI} <dim>Run gitsummary inside a working copy, or pass <bold>-C</> with a path to one</>")
}

/// Whether git's stderr says the directory is not under version control.
pub(crate) fn says_not_a_repository(stderr: &str) -> bool {
    stderr.to_ascii_lowercase().contains("not a git repository")
}

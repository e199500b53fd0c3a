//! Branch-related operations for Repository.

use super::Repository;
use crate::git::{BRANCH_REF_PREFIX, GitError, HeadRef, LocalBranch, Upstream};

/// Field separator in the `for-each-ref` format below.
const FIELD_SEPARATOR: char = '\0';

/// `upstream:track` value for an upstream whose ref was deleted.
const TRACK_GONE: &str = "gone";

impl Repository {
    /// Every local branch with its upstream, in refname order.
    pub(super) fn list_local_branches(&self) -> anyhow::Result<Vec<LocalBranch>> {
        let stdout = self.run_command(&[
            "for-each-ref",
            "--format=%(refname:lstrip=2)%00%(upstream)%00%(upstream:short)%00%(upstream:track,nobracket)",
            "refs/heads",
        ])?;
        Ok(parse_local_branches(&stdout))
    }

    /// The checked-out branch, or a description of the detached commit.
    ///
    /// An unborn branch (no commits yet) still reports its name.
    pub(super) fn head_ref(&self) -> anyhow::Result<HeadRef> {
        // Not --short: it yields `heads/x` when a tag `x` also exists
        if let Some(stdout) = self.run_command_allow_miss(&["symbolic-ref", "--quiet", "HEAD"])? {
            return Ok(parse_symbolic_ref(&stdout));
        }
        let stdout = self.run_command(&["describe", "--tags", "--always", "HEAD"])?;
        Ok(HeadRef::Detached(stdout.trim().to_string()))
    }

    /// Commits only on `a`, and commits only on `b`. Both must be full refnames.
    pub(super) fn count_ahead_behind(&self, a: &str, b: &str) -> anyhow::Result<(usize, usize)> {
        let range = format!("{a}...{b}");
        let args = ["rev-list", "--left-right", "--count", range.as_str(), "--"];
        let stdout = self.run_command(&args)?;
        parse_ahead_behind(&stdout).ok_or_else(|| {
            GitError::ParseError {
                command: format!("git {}", args.join(" ")),
                output: stdout,
            }
            .into()
        })
    }
}

fn parse_local_branches(output: &str) -> Vec<LocalBranch> {
    output
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| {
            let mut fields = line.split(FIELD_SEPARATOR);
            let name = fields.next().unwrap_or_default();
            let refname = fields.next().unwrap_or_default();
            let short = fields.next().unwrap_or_default();
            let track = fields.next().unwrap_or_default();
            let upstream = if refname.is_empty() {
                None
            } else if track == TRACK_GONE {
                log::debug!("Ignoring upstream {short} of {name}: ref is gone");
                None
            } else {
                Some(Upstream::new(short, refname))
            };
            LocalBranch::new(name, upstream)
        })
        .collect()
}

fn parse_symbolic_ref(output: &str) -> HeadRef {
    let refname = output.trim();
    let name = refname.strip_prefix(BRANCH_REF_PREFIX).unwrap_or(refname);
    HeadRef::Branch(name.to_string())
}

/// Parse `rev-list --left-right --count` output: `"<left>\t<right>\n"`.
fn parse_ahead_behind(output: &str) -> Option<(usize, usize)> {
    let mut counts = output.split_whitespace().map(str::parse::<usize>);
    let ahead = counts.next()?.ok()?;
    let behind = counts.next()?.ok()?;
    counts.next().is_none().then_some((ahead, behind))
}

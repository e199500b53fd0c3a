//! Working copy status and stash queries for Repository.
//!
//! Status comes from `git status --porcelain=2 -z`. Each record is
//! NUL-terminated; renames and copies carry their source path in the
//! following record. Record layouts (space separated):
//!
//! ```text
//! 1 XY sub mH mI mW hH hI path
//! 2 XY sub mH mI mW hH hI Xscore path      (then: origPath)
//! u XY sub m1 m2 m3 mW h1 h2 h3 path
//! ? path
//! ```

use super::Repository;
use crate::git::{FileChange, FileStatuses, Stash};

/// `X`/`Y` value meaning "unchanged" in porcelain v2.
const UNCHANGED: char = '.';

impl Repository {
    pub(super) fn list_file_statuses(&self) -> anyhow::Result<FileStatuses> {
        let stdout = self.run_command(&["status", "--porcelain=2", "-z"])?;
        Ok(parse_porcelain_v2(&stdout))
    }

    pub(super) fn list_stashes(&self) -> anyhow::Result<Vec<Stash>> {
        let stdout = self.run_command(&["stash", "list", "--format=%gd%x00%gs"])?;
        Ok(parse_stashes(&stdout))
    }
}

/// One porcelain v2 record, reduced to what the summary shows.
#[derive(Debug, PartialEq)]
enum Record {
    Changed {
        staged: Option<FileChange>,
        modified: Option<FileChange>,
    },
    Unmerged(FileChange),
    Untracked(String),
    Skipped,
}

fn parse_porcelain_v2(output: &str) -> FileStatuses {
    let mut statuses = FileStatuses::default();
    let mut records = output.split('\0').filter(|r| !r.is_empty());

    while let Some(record) = records.next() {
        let parsed = match record.as_bytes()[0] {
            b'1' => parse_changed(record, 9, None),
            b'2' => {
                let orig_path = records.next();
                parse_changed(record, 10, orig_path)
            }
            b'u' => parse_unmerged(record),
            b'?' => record.get(2..).map(|path| Record::Untracked(path.to_string())),
            // Ignored files only appear with --ignored, headers with --branch
            b'!' | b'#' => Some(Record::Skipped),
            _ => None,
        };

        match parsed {
            Some(Record::Changed { staged, modified }) => {
                statuses.staged.extend(staged);
                statuses.modified.extend(modified);
            }
            Some(Record::Unmerged(change)) => statuses.unmerged.push(change),
            Some(Record::Untracked(path)) => statuses.untracked.push(path),
            Some(Record::Skipped) => {}
            None => {
                log::debug!("Unrecognized status record: {record:?}");
                statuses.unknown.push(record.to_string());
            }
        }
    }

    statuses
}

/// Parse a `1` (ordinary) or `2` (rename/copy) record.
fn parse_changed(record: &str, field_count: usize, orig_path: Option<&str>) -> Option<Record> {
    let fields: Vec<&str> = record.splitn(field_count, ' ').collect();
    if fields.len() != field_count {
        return None;
    }
    let mut xy = fields[1].chars();
    let (x, y) = (xy.next()?, xy.next()?);
    let path = fields[field_count - 1];
    // Score field is `R100` / `C75`; only present on `2` records
    let score = orig_path.and(fields[8].get(1..));

    let change = |code: char| {
        (code != UNCHANGED).then(|| {
            let mut change = FileChange::new(code.to_string(), path);
            if matches!(code, 'R' | 'C') {
                change.score = score.map(str::to_owned);
                change.orig_path = orig_path.map(str::to_owned);
            }
            change
        })
    };
    Some(Record::Changed {
        staged: change(x),
        modified: change(y),
    })
}

fn parse_unmerged(record: &str) -> Option<Record> {
    let fields: Vec<&str> = record.splitn(11, ' ').collect();
    if fields.len() != 11 {
        return None;
    }
    Some(Record::Unmerged(FileChange::new(fields[1], fields[10])))
}

fn parse_stashes(output: &str) -> Vec<Stash> {
    output
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| {
            let (name, description) = line.split_once('\0').unwrap_or((line, ""));
            Stash {
                name: name.to_string(),
                description: description.to_string(),
            }
        })
        .collect()
}

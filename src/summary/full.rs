//! The multi-section view: stashes, file statuses and the branch table.
//!
//! ```text
//! Stashes   stash@{0} WIP on feature: 1a2b3c4 fix
//!
//! Staged    M      src/lib.rs
//!           R(100) old.txt -> new.txt
//!
//!             Remote     Target
//!   master     .  .
//! * feature   +1  .      +3  -2   develop
//! ```
//!
//! Every section is a table with one variable-width column (a path, stash
//! description or branch name) that is shortened with an ellipsis so the
//! line fits the width.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Summary;
use super::branch::{Branch, Divergence};
use super::render::{ELLIPSIS, RenderOptions};
use super::tokens::{DisplayToken, TokenLine};
use crate::git::FileChange;
use crate::styling::{StyleCode, text_width, truncate_to_width};

/// A section of the full view.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    clap::ValueEnum,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum FullSection {
    Stashes,
    Staged,
    Modified,
    Unmerged,
    Untracked,
    Branches,
}

pub const DEFAULT_FULL_SECTIONS: &[FullSection] = &[
    FullSection::Stashes,
    FullSection::Staged,
    FullSection::Modified,
    FullSection::Unmerged,
    FullSection::Untracked,
    FullSection::Branches,
];

const COLUMN_GAP: &str = " ";

/// Width of each half of an ahead/behind cell: `+999`, `>999`.
const COUNT_WIDTH: usize = 4;

/// Counts above this are shown as `>999`.
const COUNT_LIMIT: usize = 999;

impl FullSection {
    fn title(self) -> &'static str {
        match self {
            FullSection::Stashes => "Stashes",
            FullSection::Staged => "Staged",
            FullSection::Modified => "Modified",
            FullSection::Unmerged => "Unmerged",
            FullSection::Untracked => "Untracked",
            FullSection::Branches => "",
        }
    }
}

struct Cell {
    text: String,
    styles: Vec<StyleCode>,
}

impl Cell {
    fn new(styles: &[StyleCode], text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            styles: styles.to_vec(),
        }
    }

    fn plain(text: impl Into<String>) -> Self {
        Self::new(&[], text)
    }
}

struct Row {
    cells: Vec<Cell>,
    /// The variable column holds a branch name.
    is_branch: bool,
}

struct Table {
    rows: Vec<Row>,
    variable: usize,
}

impl Table {
    fn natural_widths(&self) -> Vec<usize> {
        let columns = self.rows.first().map_or(0, |r| r.cells.len());
        (0..columns)
            .map(|i| {
                self.rows
                    .iter()
                    .map(|r| text_width(&r.cells[i].text))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn render(&self, mut widths: Vec<usize>, options: &RenderOptions) -> Vec<String> {
        let gaps = widths.len().saturating_sub(1) * text_width(COLUMN_GAP);
        let fixed: usize = widths
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != self.variable)
            .map(|(_, w)| w)
            .sum::<usize>()
            + gaps;
        if !options.test_mode {
            // When even the fixed columns overflow, leave the line to the renderer
            if let Some(budget) = options.max_width.checked_sub(fixed).filter(|b| *b > 0) {
                widths[self.variable] = widths[self.variable].min(budget);
            }
        }

        self.rows
            .iter()
            .map(|row| {
                let mut line = TokenLine::new();
                for (i, cell) in row.cells.iter().enumerate() {
                    if i > 0 {
                        line.push(DisplayToken::plain(COLUMN_GAP));
                    }
                    let text = if i == self.variable {
                        fit(&cell.text, widths[i])
                    } else {
                        pad(&cell.text, widths[i])
                    };
                    let token = DisplayToken::new(&cell.styles, text);
                    if i == self.variable && row.is_branch {
                        line.push_branch_name(token);
                    } else {
                        line.push(token);
                    }
                }
                line.trim_end();
                options.render(line)
            })
            .collect()
    }
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text_width(text));
    format!("{text}{}", " ".repeat(fill))
}

/// Pad `text` to `width`, or shorten it with an ellipsis.
fn fit(text: &str, width: usize) -> String {
    if text_width(text) <= width {
        return pad(text, width);
    }
    let ellipsis = text_width(ELLIPSIS);
    if width >= ellipsis {
        let kept = truncate_to_width(text, width - ellipsis);
        pad(&format!("{kept}{ELLIPSIS}"), width)
    } else {
        pad(truncate_to_width(text, width), width)
    }
}

/// `+n` / `-n` cell half; `.` for zero, blank when absent.
fn count_cell(count: Option<usize>, sign: char) -> String {
    match count {
        None => String::new(),
        Some(0) => ".".to_string(),
        Some(n) if n > COUNT_LIMIT => format!(">{COUNT_LIMIT}"),
        Some(n) => format!("{sign}{n}"),
    }
}

/// Ahead right-aligned, two spaces, behind left-aligned: `  +3  -12 `.
fn divergence_cell(divergence: Option<Divergence>) -> String {
    let ahead = count_cell(divergence.map(|d| d.ahead), '+');
    let behind = count_cell(divergence.map(|d| d.behind), '-');
    format!("{ahead:>COUNT_WIDTH$}  {behind:<COUNT_WIDTH$}")
}

fn titled_rows(
    section: FullSection,
    items: impl IntoIterator<Item = Vec<Cell>>,
) -> Vec<Row> {
    items
        .into_iter()
        .enumerate()
        .map(|(i, cells)| {
            let title = if i == 0 { section.title() } else { "" };
            let mut row = vec![Cell::plain(title)];
            row.extend(cells);
            Row {
                cells: row,
                is_branch: false,
            }
        })
        .collect()
}

fn change_cells(change: &FileChange, style: StyleCode) -> Vec<Cell> {
    vec![
        Cell::new(&[style], change.code_label()),
        Cell::new(&[style], change.path_label()),
    ]
}

fn status_table(summary: &Summary, section: FullSection) -> Table {
    let statuses = &summary.statuses;
    let rows = match section {
        FullSection::Stashes => titled_rows(
            section,
            summary.stashes.iter().map(|stash| {
                vec![
                    Cell::new(&[StyleCode::FgGreen], stash.name.as_str()),
                    Cell::plain(stash.description.as_str()),
                ]
            }),
        ),
        FullSection::Staged => titled_rows(
            section,
            statuses.staged.iter().map(|c| change_cells(c, StyleCode::FgGreen)),
        ),
        FullSection::Modified => titled_rows(
            section,
            statuses.modified.iter().map(|c| change_cells(c, StyleCode::FgRed)),
        ),
        FullSection::Unmerged => titled_rows(
            section,
            statuses.unmerged.iter().map(|c| change_cells(c, StyleCode::FgRed)),
        ),
        FullSection::Untracked => titled_rows(
            section,
            statuses
                .untracked
                .iter()
                .map(|path| vec![Cell::new(&[StyleCode::FgYellow], path.as_str())]),
        ),
        FullSection::Branches => Vec::new(),
    };
    let variable = if section == FullSection::Untracked { 1 } else { 2 };
    Table { rows, variable }
}

fn branch_row(branch: &Branch) -> Row {
    let emphasis: &[StyleCode] = if branch.differs_from_remote() {
        &[StyleCode::Bright]
    } else {
        &[]
    };
    let mut indicator_styles = vec![StyleCode::FgMagenta];
    indicator_styles.extend_from_slice(emphasis);

    Row {
        cells: vec![
            Cell::new(&indicator_styles, if branch.is_current { "*" } else { "" }),
            Cell::new(emphasis, branch.name.as_str()),
            Cell::new(emphasis, divergence_cell(branch.remote_divergence)),
            Cell::plain(divergence_cell(branch.target_divergence)),
            Cell::plain(branch.target.branch().unwrap_or_default()),
        ],
        is_branch: true,
    }
}

fn branch_table(summary: &Summary) -> Table {
    if summary.branches.is_empty() {
        return Table {
            rows: Vec::new(),
            variable: 1,
        };
    }
    let header = Row {
        cells: vec![
            Cell::plain(""),
            Cell::plain(""),
            Cell::plain("  Remote"),
            Cell::plain("  Target"),
            Cell::plain(""),
        ],
        is_branch: false,
    };
    let rows = std::iter::once(header)
        .chain(summary.branches.branches.iter().map(branch_row))
        .collect();
    Table { rows, variable: 1 }
}

/// Render the requested sections, in order, as output lines.
///
/// Empty sections are skipped; a blank line separates the rest. Status
/// records git produced that could not be parsed are listed at the end.
pub fn full_view(summary: &Summary, sections: &[FullSection], options: &RenderOptions) -> Vec<String> {
    let tables: Vec<(FullSection, Table)> = sections
        .iter()
        .map(|&section| match section {
            FullSection::Branches => (section, branch_table(summary)),
            _ => (section, status_table(summary, section)),
        })
        .filter(|(_, table)| !table.rows.is_empty())
        .collect();

    // Status titles line up across sections
    let title_width = tables
        .iter()
        .filter(|(section, _)| *section != FullSection::Branches)
        .map(|(section, _)| text_width(section.title()))
        .max()
        .unwrap_or(0);

    let mut lines = Vec::new();
    for (section, table) in &tables {
        let mut widths = table.natural_widths();
        if *section != FullSection::Branches {
            widths[0] = title_width;
        }
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.extend(table.render(widths, options));
    }

    let unknown = &summary.statuses.unknown;
    if !unknown.is_empty() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push("git returned some unexpected output:".to_string());
        lines.push(String::new());
        lines.extend(unknown.iter().cloned());
        lines.push(String::new());
        lines.push("Please report this to the gitsummary maintainers.".to_string());
    }

    lines
}

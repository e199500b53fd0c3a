//! Subcommand handlers.
//!
//! Summary output goes to stdout unfiltered: its escapes come from the
//! configured styles, and prompts capture stdout, so auto-detecting color
//! support there would strip them. `--no-style` is the way to turn them off.

mod fields;
mod prompt;
mod repo;

pub(crate) use fields::handle_fields;
pub(crate) use prompt::handle_prompt;
pub(crate) use repo::handle_repo;

use gitsummary::config::Config;
use gitsummary::git::Repository;
use gitsummary::summary::Summary;

/// Query the repository in the current directory.
fn collect_summary(config: &Config) -> anyhow::Result<Summary> {
    let repo = Repository::discover(std::env::current_dir()?)?;
    Summary::collect(&repo, &config.target_rules, &config.branch_order)
}

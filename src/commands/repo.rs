use std::io::Write;

use gitsummary::config::{Config, check_unique};
use gitsummary::summary::{FullSection, RenderOptions};

use super::collect_summary;

pub(crate) fn handle_repo(
    config: &Config,
    options: &RenderOptions,
    sections: Option<Vec<FullSection>>,
) -> anyhow::Result<()> {
    let sections = match sections {
        Some(sections) => {
            check_unique("the --sections flag", &sections)?;
            sections
        }
        None => config.full_sections.clone(),
    };

    let summary = collect_summary(config)?;
    let mut stdout = std::io::stdout().lock();
    for line in summary.full_view(&sections, options) {
        writeln!(stdout, "{line}")?;
    }
    Ok(())
}

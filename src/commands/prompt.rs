use std::io::Write;

use gitsummary::config::{Config, check_unique};
use gitsummary::summary::{Quantity, RenderOptions};

use super::collect_summary;

pub(crate) fn handle_prompt(
    config: &Config,
    options: &RenderOptions,
    sections: Option<Vec<Quantity>>,
) -> anyhow::Result<()> {
    let sections = match sections {
        Some(sections) => {
            check_unique("the --sections flag", &sections)?;
            sections
        }
        None => config.prompt.sections.clone(),
    };

    let summary = collect_summary(config)?;
    let line = summary.prompt_line(&sections, &config.prompt.formats, &config.prompt.separator)?;
    writeln!(std::io::stdout().lock(), "{}", options.render(line))?;
    Ok(())
}

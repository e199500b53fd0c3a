use std::io::Write;

use gitsummary::config::Config;
use gitsummary::summary::Quantity;

use super::collect_summary;

/// Quantities may repeat here: `fields ahead-remote ahead-remote` is
/// harmless and scripts index fields by position.
pub(crate) fn handle_fields(config: &Config, quantities: &[Quantity]) -> anyhow::Result<()> {
    let summary = collect_summary(config)?;
    writeln!(std::io::stdout().lock(), "{}", summary.fields(quantities))?;
    Ok(())
}

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use gitsummary::summary::{FullSection, Quantity};

/// A compact summary of a git working copy
#[derive(Parser)]
#[command(name = "gitsummary", version, about, long_about = None)]
pub(crate) struct Cli {
    /// Run as if started in <DIR>
    #[arg(short = 'C', global = true, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Config file [default: $GITSUMMARY_CONFIG_PATH, then the user config dir]
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log every git command to stderr
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Maximum line width [default: terminal width]
    #[arg(long, global = true, value_name = "COLUMNS")]
    pub width: Option<usize>,

    /// Print the summary without colors or other styles
    #[arg(long, global = true)]
    pub no_style: bool,

    /// Never shorten lines to fit the width
    #[arg(long, global = true, hide = true)]
    pub test_mode: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Stashes, file statuses and branches (the default)
    Repo {
        /// Sections to show, in order
        #[arg(long, value_delimiter = ',', value_name = "SECTION")]
        sections: Option<Vec<FullSection>>,
    },

    /// One styled line, for a shell prompt
    Prompt {
        /// Quantities to show, in order
        #[arg(long, value_delimiter = ',', value_name = "QUANTITY")]
        sections: Option<Vec<Quantity>>,
    },

    /// Space-separated values for scripts; `.` marks an absent value
    Fields {
        #[arg(required = true, value_name = "QUANTITY")]
        quantities: Vec<Quantity>,
    },
}

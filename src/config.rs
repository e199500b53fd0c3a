//! Configuration: where the file lives, what it may contain, and the
//! validated form the rest of the crate uses.
//!
//! ```toml
//! branch-order = ["^main$", "^develop$"]
//! default-target = "develop"
//!
//! [[rules]]
//! pattern = "^main$"
//! target = ""
//!
//! [prompt]
//! sections = ["branch", "staged", "modified"]
//!
//! [prompt.quantities.staged]
//! show = "num"
//! prefix = "+"
//! style = ["bright", "fg-green"]
//! ```
//!
//! Everything is validated once, at load time: patterns compile, styles and
//! visibilities are known and fit their quantity, sections are unique. Any
//! problem is a [`ConfigError`] before a single git command runs.

mod file;
mod path;
mod schema;

use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use color_print::cformat;
use config::ConfigError;

pub use file::ConfigFile;
pub use path::{get_config_path, is_config_path_explicit, set_config_path};
pub use schema::find_unknown_keys;

use crate::styling::{eprintln, warning_message};
use crate::summary::{
    BUILTIN_DEFAULT_TARGET, BUILTIN_RULES, BranchOrder, DEFAULT_FULL_SECTIONS,
    DEFAULT_PROMPT_SECTIONS, FullSection, Quantity, QuantityFormat, QuantityFormats, Separator,
    TargetRules, check_visibility,
};

/// Validated configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub branch_order: BranchOrder,
    pub target_rules: TargetRules,
    pub full_sections: Vec<FullSection>,
    pub prompt: PromptConfig,
}

/// Settings for the compact one-line summary.
#[derive(Debug, Clone)]
pub struct PromptConfig {
    pub sections: Vec<Quantity>,
    pub formats: QuantityFormats,
    pub separator: Separator,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            branch_order: BranchOrder::default(),
            target_rules: TargetRules::default(),
            full_sections: DEFAULT_FULL_SECTIONS.to_vec(),
            prompt: PromptConfig {
                sections: DEFAULT_PROMPT_SECTIONS.to_vec(),
                formats: QuantityFormats::default(),
                separator: Separator::default(),
            },
        }
    }
}

impl Config {
    /// Load from the configured path (see [`get_config_path`]).
    ///
    /// No path, or a missing file that was not named with --config, gives
    /// the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match get_config_path() {
            Some(path) => Self::load_from(&path, is_config_path_explicit()),
            None => {
                log::debug!("No config directory; using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from `path`. A missing file is an error only when `required`.
    pub fn load_from(path: &Path, required: bool) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => {
                log::debug!("No config at {}; using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ConfigError::Message(format!(
                    "Failed to read {}: {e}",
                    path.display()
                )));
            }
        };
        log::debug!("Loading config from {}", path.display());

        for key in find_unknown_keys(&contents) {
            eprintln!(
                "{}",
                warning_message(cformat!(
                    "Unknown key <bold>{key}</> in {}; ignoring it",
                    path.display()
                ))
            );
        }

        Self::from_toml(&contents)
            .map_err(|e| ConfigError::Message(format!("{}: {e}", path.display())))
    }

    /// Parse and validate TOML config text.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile =
            toml::from_str(contents).map_err(|e| ConfigError::Message(e.to_string()))?;
        Self::from_file(file)
    }

    pub fn from_file(file: ConfigFile) -> Result<Self, ConfigError> {
        let branch_order = match &file.branch_order {
            Some(patterns) => BranchOrder::compile(patterns)?,
            None => BranchOrder::default(),
        };

        // Rules and default target fall back independently
        let default_target = file
            .default_target
            .as_deref()
            .unwrap_or(BUILTIN_DEFAULT_TARGET);
        let target_rules = match &file.rules {
            Some(rules) => TargetRules::compile(
                rules.iter().map(|r| (r.pattern.as_str(), r.target.as_str())),
                default_target,
            )?,
            None => TargetRules::compile(BUILTIN_RULES.iter().copied(), default_target)?,
        };

        let full_sections = file
            .full
            .sections
            .unwrap_or_else(|| DEFAULT_FULL_SECTIONS.to_vec());
        check_unique("[full] sections", &full_sections)?;

        let prompt_sections = file
            .prompt
            .sections
            .unwrap_or_else(|| DEFAULT_PROMPT_SECTIONS.to_vec());
        check_unique("[prompt] sections", &prompt_sections)?;

        let mut formats = QuantityFormats::default();
        for (name, entry) in file.prompt.quantities {
            let quantity = Quantity::from_str(&name).map_err(|_| {
                ConfigError::Message(format!("Unknown quantity [prompt.quantities.{name}]"))
            })?;
            let builtin = QuantityFormat::builtin(quantity);
            let format = QuantityFormat {
                show: entry.show.unwrap_or(builtin.show),
                prefix: entry.prefix.unwrap_or(builtin.prefix),
                suffix: entry.suffix.unwrap_or(builtin.suffix),
                style: entry.style.unwrap_or(builtin.style),
            };
            check_visibility(quantity, format.show, quantity.kind())?;
            formats.set(quantity, format);
        }

        let separator = match file.prompt.separator {
            Some(entry) => {
                let builtin = Separator::default();
                Separator {
                    text: entry.text.unwrap_or(builtin.text),
                    style: entry.style.unwrap_or(builtin.style),
                }
            }
            None => Separator::default(),
        };

        Ok(Self {
            branch_order,
            target_rules,
            full_sections,
            prompt: PromptConfig {
                sections: prompt_sections,
                formats,
                separator,
            },
        })
    }
}

/// Fail on a section listed twice. `origin` names where the list came from,
/// e.g. `[full] sections` or `the --sections flag`.
pub fn check_unique<T: PartialEq + Display>(
    origin: &str,
    sections: &[T],
) -> Result<(), ConfigError> {
    for (i, section) in sections.iter().enumerate() {
        if sections[..i].contains(section) {
            return Err(ConfigError::Message(format!(
                "Section {section} appears more than once in {origin}"
            )));
        }
    }
    Ok(())
}

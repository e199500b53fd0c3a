use std::io::Write;
use std::process;

use clap::Parser;
use color_print::cformat;
use config::ConfigError;
use gitsummary::config::{Config, set_config_path};
use gitsummary::git::GitError;
use gitsummary::styling::{eprintln, error_message, format_with_gutter, get_terminal_width};
use gitsummary::summary::RenderOptions;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{handle_fields, handle_prompt, handle_repo};

/// Exit code for failed git queries and other runtime errors.
const EXIT_QUERY_ERROR: i32 = 1;

/// Exit code for invalid configuration.
const EXIT_CONFIG_ERROR: i32 = 2;

fn init_logging(verbose: u8) {
    // -v enables debug logging; otherwise respect RUST_LOG (defaulting to off)
    let mut builder = if verbose >= 1 {
        let mut b = env_logger::Builder::new();
        b.filter_level(log::LevelFilter::Debug);
        b
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"))
    };

    builder
        .format(|buf, record| {
            let msg = record.args().to_string();

            // Commands start with $, make only the command bold (not $ or [dir])
            if let Some(rest) = msg.strip_prefix("$ ") {
                if let Some(bracket_pos) = rest.find(" [") {
                    let command = &rest[..bracket_pos];
                    let dir = &rest[bracket_pos..];
                    writeln!(buf, "{}", cformat!("$ <bold>{command}</>{dir}"))
                } else {
                    writeln!(buf, "{}", cformat!("$ <bold>{rest}</>"))
                }
            } else if msg.starts_with("  ! ") {
                // Error output - show in red
                writeln!(buf, "{}", cformat!("<red>{msg}</>"))
            } else {
                writeln!(buf, "{}", cformat!("<dim>{msg}</>"))
            }
        })
        .init();
}

fn print_config_error(err: &ConfigError) {
    eprintln!("{}", error_message("Invalid configuration"));
    eprintln!("{}", format_with_gutter(&err.to_string()));
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Change working directory from -C flag if provided.
    if let Some(ref path) = cli.directory {
        std::env::set_current_dir(path).unwrap_or_else(|e| {
            eprintln!(
                "{}",
                error_message(format!(
                    "Cannot change to directory '{}': {}",
                    path.display(),
                    e
                ))
            );
            process::exit(EXIT_QUERY_ERROR);
        });
    }

    // Initialize config path from --config flag if provided
    if let Some(path) = cli.config {
        set_config_path(path);
    }

    let config = Config::load().unwrap_or_else(|e| {
        print_config_error(&e);
        process::exit(EXIT_CONFIG_ERROR);
    });

    let options = RenderOptions {
        max_width: cli.width.unwrap_or_else(get_terminal_width),
        test_mode: cli.test_mode,
        styled: !cli.no_style,
    };

    let result = match cli.command {
        None => handle_repo(&config, &options, None),
        Some(Commands::Repo { sections }) => handle_repo(&config, &options, sections),
        Some(Commands::Prompt { sections }) => handle_prompt(&config, &options, sections),
        Some(Commands::Fields { quantities }) => handle_fields(&config, &quantities),
    };

    if let Err(e) = result {
        // GitError produces styled output via Display
        if let Some(err) = e.downcast_ref::<GitError>() {
            eprintln!("{}", err);
        } else if let Some(err) = e.downcast_ref::<ConfigError>() {
            print_config_error(err);
            process::exit(EXIT_CONFIG_ERROR);
        } else {
            // With context: context as header, causes in the gutter
            let msg = e.to_string();
            let chain: Vec<String> = e.chain().skip(1).map(|e| e.to_string()).collect();
            eprintln!("{}", error_message(&msg));
            if !chain.is_empty() {
                eprintln!("{}", format_with_gutter(&chain.join("\n")));
            }
        }
        process::exit(EXIT_QUERY_ERROR);
    }
}

//! `sfcrime` - CLI for the mock crime dashboard data
//!
//! This binary is the presentation layer: it builds a session, runs the
//! requested query and prints the rendered result.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::Path;

use anyhow::Context;
use clap::Parser;

use sfcrime::cli::{render, Cli, Command, ConfigCommand, GenerateCommand, QueryCommand};
use sfcrime::{init_logging, Config, Session};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Validation checks its own target, independent of the config in effect
    if let Some(path) = cli.validate_target() {
        return handle_validate(&path);
    }

    // Load configuration
    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    match cli.command {
        Command::Generate(cmd) => handle_generate(&config, &cmd),
        Command::Dashboard(cmd) => handle_query(&config, &cmd, true),
        Command::Summary(cmd) => handle_query(&config, &cmd, false),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn handle_generate(config: &Config, cmd: &GenerateCommand) -> anyhow::Result<()> {
    let params = cmd.generation.apply(config.generation_params());
    let session = Session::new(params).context("generating incident table")?;
    print!("{}", render::records(session.table(), cmd.limit, cmd.format)?);
    Ok(())
}

fn handle_query(config: &Config, cmd: &QueryCommand, full: bool) -> anyhow::Result<()> {
    let params = cmd.generation.apply(config.generation_params());
    let session = Session::new(params).context("generating incident table")?;
    let criteria = cmd
        .filter
        .resolve(config.default_criteria(session.params()));
    let view = session.query(&criteria);

    if full {
        print!("{}", render::dashboard(&view, cmd.format)?);
    } else {
        print!("{}", render::summary(&view.summary, cmd.format)?);
    }
    Ok(())
}

fn handle_validate(path: &Path) -> anyhow::Result<()> {
    println!("Validating configuration: {}", path.display());
    Config::validate_file(path)
        .with_context(|| format!("configuration {} is invalid", path.display()))?;
    println!("Configuration is valid.");
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                print!("{}", render::config(config)?);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            handle_validate(&file.unwrap_or_else(Config::default_config_path))?;
        }
    }
    Ok(())
}

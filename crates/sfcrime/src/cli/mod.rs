//! Command-line interface for sfcrime.
//!
//! This module provides the CLI structure and the text renderers the
//! `sfcrime` binary binds data-layer results to.

mod commands;
pub mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ConfigCommand, FilterArgs, GenerateCommand, GenerationArgs, OutputFormat, QueryCommand,
};

/// sfcrime - Mock San Francisco crime dashboard data
///
/// Generates a deterministic synthetic incident table and answers the
/// dashboard's filter and aggregation queries against it.
#[derive(Debug, Parser)]
#[command(name = "sfcrime")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the generated incident table
    Generate(GenerateCommand),

    /// Show the monthly series, district totals and summary metrics
    Dashboard(QueryCommand),

    /// Show the summary metrics only
    Summary(QueryCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                2 => crate::logging::Verbosity::Debug,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }

    /// The file `config validate` should check, if that is the command.
    ///
    /// `--file` wins over the global `--config`, which wins over the default
    /// path.
    #[must_use]
    pub fn validate_target(&self) -> Option<PathBuf> {
        match &self.command {
            Command::Config(ConfigCommand::Validate { file }) => Some(
                file.clone()
                    .or_else(|| self.config.clone())
                    .unwrap_or_else(crate::Config::default_config_path),
            ),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::Verbosity;
    use crate::record::{Category, District};
    use crate::table::YearRange;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "sfcrime");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(parse(&["sfcrime", "-q", "summary"]).verbosity(), Verbosity::Quiet);
        assert_eq!(parse(&["sfcrime", "summary"]).verbosity(), Verbosity::Normal);
        assert_eq!(parse(&["sfcrime", "-v", "summary"]).verbosity(), Verbosity::Verbose);
        assert_eq!(parse(&["sfcrime", "-vv", "summary"]).verbosity(), Verbosity::Debug);
        assert_eq!(parse(&["sfcrime", "-vvv", "summary"]).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_parse_generate() {
        let cli = parse(&["sfcrime", "generate", "--seed", "3", "--limit", "10", "-f", "json"]);
        match cli.command {
            Command::Generate(cmd) => {
                assert_eq!(cmd.generation.seed, Some(3));
                assert_eq!(cmd.limit, Some(10));
                assert_eq!(cmd.format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_dashboard_filters() {
        let cli = parse(&[
            "sfcrime",
            "dashboard",
            "--years",
            "2022..2023",
            "--category",
            "robbery,vehicle-theft",
            "--category",
            "Assault",
            "--district",
            "Mission",
        ]);
        match cli.command {
            Command::Dashboard(cmd) => {
                assert_eq!(cmd.filter.years, Some(YearRange::new(2022, 2023).unwrap()));
                assert_eq!(
                    cmd.filter.categories,
                    vec![Category::Robbery, Category::VehicleTheft, Category::Assault]
                );
                assert_eq!(cmd.filter.districts, vec![District::Mission]);
                assert_eq!(cmd.format, OutputFormat::Table);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_generation_dates() {
        let cli = parse(&["sfcrime", "summary", "--start", "2021-01-01", "--end", "2021-01-02"]);
        assert!(matches!(
            cli.command,
            Command::Summary(QueryCommand {
                generation: GenerationArgs {
                    start: Some(_),
                    end: Some(_),
                    ..
                },
                ..
            })
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_category() {
        let result = Cli::try_parse_from(["sfcrime", "summary", "--category", "Arson"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_bad_year_range() {
        let result = Cli::try_parse_from(["sfcrime", "summary", "--years", "2024..2021"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_no_categories_conflicts_with_category() {
        let result = Cli::try_parse_from([
            "sfcrime",
            "summary",
            "--no-categories",
            "--category",
            "Robbery",
        ]);
        assert!(result.is_err());
        let cli = parse(&["sfcrime", "summary", "--no-categories"]);
        assert!(matches!(
            cli.command,
            Command::Summary(QueryCommand {
                filter: FilterArgs {
                    no_categories: true,
                    ..
                },
                ..
            })
        ));
    }

    #[test]
    fn test_validate_target_precedence() {
        let cli = parse(&["sfcrime", "-c", "/global.toml", "config", "validate", "--file", "/own.toml"]);
        assert_eq!(cli.validate_target(), Some(PathBuf::from("/own.toml")));

        let cli = parse(&["sfcrime", "-c", "/global.toml", "config", "validate"]);
        assert_eq!(cli.validate_target(), Some(PathBuf::from("/global.toml")));

        let cli = parse(&["sfcrime", "config", "validate"]);
        assert_eq!(cli.validate_target(), Some(crate::Config::default_config_path()));

        let cli = parse(&["sfcrime", "-c", "/global.toml", "config", "show"]);
        assert_eq!(cli.validate_target(), None);
    }

    #[test]
    fn test_parse_with_config() {
        let cli = parse(&["sfcrime", "-c", "/custom/config.toml", "config", "show"]);
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Show { json: false })
        ));
    }
}

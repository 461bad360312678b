//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands and how their
//! flags resolve against configured defaults.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};

use crate::record::{Category, District};
use crate::table::{FilterCriteria, GenerationParams, YearRange};

/// Flags that override the configured generation parameters.
#[derive(Debug, Default, Args)]
pub struct GenerationArgs {
    /// RNG seed for the synthetic table
    #[arg(long)]
    pub seed: Option<u64>,

    /// First day of the generated range (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub start: Option<NaiveDate>,

    /// Last day of the generated range (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub end: Option<NaiveDate>,
}

impl GenerationArgs {
    /// Apply the flags that were given on top of `params`.
    #[must_use]
    pub fn apply(&self, mut params: GenerationParams) -> GenerationParams {
        if let Some(seed) = self.seed {
            params.seed = seed;
        }
        if let Some(start) = self.start {
            params.start_date = start;
        }
        if let Some(end) = self.end {
            params.end_date = end;
        }
        params
    }
}

/// Filter selections.
#[derive(Debug, Default, Args)]
pub struct FilterArgs {
    /// Inclusive year range (e.g. 2021..2024, 2021-2024 or 2022)
    #[arg(short, long, value_name = "RANGE", value_parser = parse_year_range)]
    pub years: Option<YearRange>,

    /// Crime category to include (repeatable or comma-separated)
    #[arg(
        long = "category",
        value_name = "CATEGORY",
        value_delimiter = ',',
        value_parser = parse_category
    )]
    pub categories: Vec<Category>,

    /// Police district to include (repeatable or comma-separated)
    #[arg(
        long = "district",
        value_name = "DISTRICT",
        value_delimiter = ',',
        value_parser = parse_district
    )]
    pub districts: Vec<District>,

    /// Select no categories at all
    #[arg(long, conflicts_with = "categories")]
    pub no_categories: bool,

    /// Select no districts at all
    #[arg(long, conflicts_with = "districts")]
    pub no_districts: bool,
}

impl FilterArgs {
    /// Resolve the flags against `defaults`.
    ///
    /// An absent flag keeps the default selection; `--no-*` selects nothing.
    #[must_use]
    pub fn resolve(&self, mut defaults: FilterCriteria) -> FilterCriteria {
        if let Some(years) = self.years {
            defaults.years = years;
        }
        if self.no_categories {
            defaults.categories.clear();
        } else if !self.categories.is_empty() {
            defaults.categories = self.categories.iter().copied().collect();
        }
        if self.no_districts {
            defaults.districts.clear();
        } else if !self.districts.is_empty() {
            defaults.districts = self.districts.iter().copied().collect();
        }
        defaults
    }
}

fn parse_year_range(s: &str) -> Result<YearRange, String> {
    s.parse().map_err(|e: crate::Error| e.to_string())
}

fn parse_category(s: &str) -> Result<Category, String> {
    s.parse().map_err(|e: crate::Error| e.to_string())
}

fn parse_district(s: &str) -> Result<District, String> {
    s.parse().map_err(|e: crate::Error| e.to_string())
}

/// Generate command arguments.
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Generation overrides
    #[command(flatten)]
    pub generation: GenerationArgs,

    /// Print at most this many rows
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments shared by the dashboard and summary commands.
#[derive(Debug, Args)]
pub struct QueryCommand {
    /// Generation overrides
    #[command(flatten)]
    pub generation: GenerationArgs,

    /// Filter selections
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Comma-separated lines
    Plain,
    /// Aligned table
    #[default]
    Table,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::test_support::date;

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }

    #[test]
    fn test_generation_args_apply() {
        let args = GenerationArgs {
            seed: Some(9),
            start: Some(date(2022, 1, 1)),
            end: None,
        };
        let params = args.apply(GenerationParams::default());
        assert_eq!(params.seed, 9);
        assert_eq!(params.start_date, date(2022, 1, 1));
        assert_eq!(params.end_date, date(2024, 12, 31));
    }

    #[test]
    fn test_generation_args_default_keeps_params() {
        let params = GenerationArgs::default().apply(GenerationParams::default());
        assert_eq!(params, GenerationParams::default());
    }

    #[test]
    fn test_filter_args_absent_keeps_defaults() {
        let defaults = FilterCriteria::all_for(&GenerationParams::default());
        let resolved = FilterArgs::default().resolve(defaults.clone());
        assert_eq!(resolved, defaults);
    }

    #[test]
    fn test_filter_args_override() {
        let args = FilterArgs {
            years: Some(YearRange::single(2023)),
            categories: vec![Category::Robbery, Category::Robbery],
            districts: vec![District::Park],
            ..FilterArgs::default()
        };
        let resolved = args.resolve(FilterCriteria::all_for(&GenerationParams::default()));
        assert_eq!(resolved.years, YearRange::single(2023));
        assert_eq!(resolved.categories.len(), 1);
        assert!(resolved.districts.contains(&District::Park));
        assert_eq!(resolved.districts.len(), 1);
    }

    #[test]
    fn test_filter_args_select_nothing() {
        let args = FilterArgs {
            no_categories: true,
            no_districts: true,
            ..FilterArgs::default()
        };
        let resolved = args.resolve(FilterCriteria::all_for(&GenerationParams::default()));
        assert!(resolved.categories.is_empty());
        assert!(resolved.districts.is_empty());
    }

    #[test]
    fn test_value_parsers_report_errors() {
        assert!(parse_category("Arson").unwrap_err().contains("Arson"));
        assert!(parse_district("Marina").unwrap_err().contains("Marina"));
        assert!(parse_year_range("soon").is_err());
        assert_eq!(parse_category("vehicle-theft"), Ok(Category::VehicleTheft));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }
}

//! Configuration management for sfcrime.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::record::{Category, District};
use crate::table::generate::{default_end_date, default_start_date, DEFAULT_ROWS_PER_DAY};
use crate::table::{FilterCriteria, GenerationParams, YearRange};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "sfcrime";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "SFCRIME_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `SFCRIME_`, nested keys split on `__`)
/// 2. TOML config file at `~/.config/sfcrime/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Table generation configuration.
    pub generation: GenerationConfig,
    /// Default filter selections.
    pub query: QueryConfig,
}

/// Table generation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// RNG seed.
    pub seed: u64,
    /// First day of the generated range.
    pub start_date: NaiveDate,
    /// Last day of the generated range.
    pub end_date: NaiveDate,
    /// Rows generated per day.
    pub rows_per_day: usize,
}

/// Default filter selections, used when the command line does not say otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Year range. Defaults to the year span of the generated range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years: Option<YearRange>,
    /// Selected categories.
    pub categories: Vec<Category>,
    /// Selected districts.
    pub districts: Vec<District>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            start_date: default_start_date(),
            end_date: default_end_date(),
            rows_per_day: DEFAULT_ROWS_PER_DAY,
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            years: None,
            categories: Category::ALL.to_vec(),
            districts: District::ALL.to_vec(),
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// A missing file is not an error; defaults and environment apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);
        let config: Config = Self::figment(&config_file).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate one specific configuration file.
    ///
    /// Unlike [`Config::load_from`], a missing file is an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if the file does not exist, or the
    /// loading/validation error otherwise.
    pub fn validate_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        Self::load_from(Some(path.to_path_buf()))
    }

    fn figment(config_file: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.generation.end_date < self.generation.start_date {
            return Err(Error::config_validation(format!(
                "generation.end_date ({}) cannot be before generation.start_date ({})",
                self.generation.end_date, self.generation.start_date
            )));
        }

        if self.generation.rows_per_day == 0 {
            return Err(Error::config_validation(
                "generation.rows_per_day must be greater than 0",
            ));
        }

        if let Some(years) = &self.query.years {
            years
                .validate()
                .map_err(|e| Error::config_validation(format!("query.years: {e}")))?;
        }

        Ok(())
    }

    /// Generation parameters sampling from the full closed label sets.
    #[must_use]
    pub fn generation_params(&self) -> GenerationParams {
        GenerationParams {
            seed: self.generation.seed,
            start_date: self.generation.start_date,
            end_date: self.generation.end_date,
            rows_per_day: self.generation.rows_per_day,
            categories: Category::ALL.to_vec(),
            districts: District::ALL.to_vec(),
        }
    }

    /// Default filter selections for a table generated from `params`.
    #[must_use]
    pub fn default_criteria(&self, params: &GenerationParams) -> FilterCriteria {
        let years = self
            .query
            .years
            .unwrap_or_else(|| FilterCriteria::all_for(params).years);
        FilterCriteria::new(
            years,
            self.query.categories.iter().copied(),
            self.query.districts.iter().copied(),
        )
    }
}

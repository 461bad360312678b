//! Error types for sfcrime.
//!
//! This module defines all error types used throughout the sfcrime crate.
//! An empty filter selection is deliberately absent: it yields empty
//! aggregates and "no data" metrics rather than an error.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for sfcrime operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Generation Errors ===
    /// The generation date range ends before it starts.
    #[error("invalid date range: end date {end} is before start date {start}")]
    InvalidRange {
        /// First day of the requested range.
        start: NaiveDate,
        /// Last day of the requested range.
        end: NaiveDate,
    },

    /// A label set handed to the generator has nothing to sample from.
    #[error("cannot generate incidents from an empty {kind} set")]
    EmptyLabelSet {
        /// Which label set was empty (`category` or `district`).
        kind: &'static str,
    },

    // === Query Errors ===
    /// A year range whose lower bound exceeds its upper bound.
    #[error("invalid year range: {min} is after {max}")]
    InvalidYearRange {
        /// Lower bound.
        min: i32,
        /// Upper bound.
        max: i32,
    },

    /// A year range string that could not be parsed.
    #[error("cannot parse year range '{0}' (expected e.g. 2021..2024, 2021-2024 or 2022)")]
    YearRangeParse(String),

    /// A crime category label outside the closed set.
    #[error("unknown crime category: '{0}'")]
    UnknownCategory(String),

    /// A police district label outside the closed set.
    #[error("unknown police district: '{0}'")]
    UnknownDistrict(String),

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file to validate does not exist.
    #[error("configuration file not found: {}", path.display())]
    ConfigNotFound {
        /// Path that was checked.
        path: std::path::PathBuf,
    },

    /// Formatting rendered output failed.
    #[error("formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for sfcrime operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Check if this error was caused by bad user input (labels, ranges)
    /// rather than by the environment.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidRange { .. }
                | Self::EmptyLabelSet { .. }
                | Self::InvalidYearRange { .. }
                | Self::YearRangeParse(_)
                | Self::UnknownCategory(_)
                | Self::UnknownDistrict(_)
        )
    }
}

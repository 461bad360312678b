//! Deterministic generation of the synthetic incident table.
//!
//! The same parameters always produce an identical table: the RNG is a
//! ChaCha8 stream seeded from the configured `u64` seed.

use chrono::NaiveDate;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::IncidentTable;
use crate::error::{Error, Result};
use crate::record::{Category, District, IncidentRecord};

/// Default number of rows generated per day of the date range.
pub const DEFAULT_ROWS_PER_DAY: usize = 5;

/// Smallest incident count a row can carry.
pub const MIN_INCIDENTS: u32 = 1;

/// Largest incident count a row can carry.
pub const MAX_INCIDENTS: u32 = 9;

/// Inputs to table generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// RNG seed.
    pub seed: u64,
    /// First day of the date axis (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the date axis (inclusive).
    pub end_date: NaiveDate,
    /// Rows generated per day of the axis.
    pub rows_per_day: usize,
    /// Categories to sample from.
    pub categories: Vec<Category>,
    /// Districts to sample from.
    pub districts: Vec<District>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            seed: 0,
            start_date: default_start_date(),
            end_date: default_end_date(),
            rows_per_day: DEFAULT_ROWS_PER_DAY,
            categories: Category::ALL.to_vec(),
            districts: District::ALL.to_vec(),
        }
    }
}

/// 2021-01-01.
#[must_use]
pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// 2024-12-31.
#[must_use]
pub fn default_end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or(NaiveDate::MAX)
}

impl GenerationParams {
    /// Replace the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the date range.
    #[must_use]
    pub fn with_range(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    /// Check the parameters without generating anything.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if the range is inverted and
    /// [`Error::EmptyLabelSet`] if there is nothing to sample from.
    pub fn validate(&self) -> Result<()> {
        if self.end_date < self.start_date {
            return Err(Error::InvalidRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        if self.categories.is_empty() {
            return Err(Error::EmptyLabelSet { kind: "category" });
        }
        if self.districts.is_empty() {
            return Err(Error::EmptyLabelSet { kind: "district" });
        }
        Ok(())
    }

    /// One entry per day of the inclusive range.
    #[must_use]
    pub fn date_axis(&self) -> Vec<NaiveDate> {
        self.start_date
            .iter_days()
            .take_while(|d| *d <= self.end_date)
            .collect()
    }
}

/// Generate the table described by `params`.
///
/// Each of the `rows_per_day × days` rows independently samples, with
/// replacement, a date from the axis, a category, a district and an
/// incident count in `[MIN_INCIDENTS, MAX_INCIDENTS]`.
///
/// # Errors
///
/// See [`GenerationParams::validate`].
pub fn generate(params: &GenerationParams) -> Result<IncidentTable> {
    params.validate()?;

    let axis = params.date_axis();
    let row_count = params.rows_per_day.saturating_mul(axis.len());
    let mut rng = ChaCha8Rng::seed_from_u64(params.seed);

    let mut rows = Vec::with_capacity(row_count);
    for _ in 0..row_count {
        let date = axis[rng.random_range(0..axis.len())];
        let category = params.categories[rng.random_range(0..params.categories.len())];
        let district = params.districts[rng.random_range(0..params.districts.len())];
        let incidents = rng.random_range(MIN_INCIDENTS..=MAX_INCIDENTS);
        rows.push(IncidentRecord {
            date,
            category,
            district,
            incidents,
        });
    }

    debug!(
        seed = params.seed,
        days = axis.len(),
        rows = rows.len(),
        "generated incident table"
    );
    Ok(IncidentTable::from(rows))
}

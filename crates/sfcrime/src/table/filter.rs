//! Filter criteria: an inclusive year range plus category and district sets.

use std::collections::BTreeSet;
use std::str::FromStr;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use super::GenerationParams;
use crate::error::{Error, Result};
use crate::record::{Category, District, IncidentRecord};

/// Inclusive `[min, max]` range of calendar years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearRange {
    min: i32,
    max: i32,
}

impl YearRange {
    /// Create a range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidYearRange`] if `min > max`.
    pub fn new(min: i32, max: i32) -> Result<Self> {
        if min > max {
            return Err(Error::InvalidYearRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// A range covering a single year.
    #[must_use]
    pub fn single(year: i32) -> Self {
        Self {
            min: year,
            max: year,
        }
    }

    /// Lower bound.
    #[must_use]
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Check if `year` lies within the range.
    #[must_use]
    pub fn contains(&self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }

    /// Check the bounds of a range that bypassed [`YearRange::new`],
    /// e.g. one deserialized from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidYearRange`] if `min > max`.
    pub fn validate(&self) -> Result<()> {
        Self::new(self.min, self.max).map(|_| ())
    }
}

impl std::fmt::Display for YearRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}..{}", self.min, self.max)
        }
    }
}

impl FromStr for YearRange {
    type Err = Error;

    /// Accepts `2021..2024`, `2021..=2024`, `2021-2024` and `2022`.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let parse_year =
            |part: &str| part.trim().parse::<i32>().map_err(|_| Error::YearRangeParse(s.to_string()));

        let bounds = trimmed
            .split_once("..=")
            .or_else(|| trimmed.split_once(".."))
            .or_else(|| trimmed.split_once('-'));

        match bounds {
            Some((lo, hi)) => Self::new(parse_year(lo)?, parse_year(hi)?),
            None => Ok(Self::single(parse_year(trimmed)?)),
        }
    }
}

/// The triple of user selections a table is filtered by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Inclusive year range.
    pub years: YearRange,
    /// Selected categories. Empty selects nothing.
    pub categories: BTreeSet<Category>,
    /// Selected districts. Empty selects nothing.
    pub districts: BTreeSet<District>,
}

impl FilterCriteria {
    /// Create criteria from explicit selections.
    pub fn new(
        years: YearRange,
        categories: impl IntoIterator<Item = Category>,
        districts: impl IntoIterator<Item = District>,
    ) -> Self {
        Self {
            years,
            categories: categories.into_iter().collect(),
            districts: districts.into_iter().collect(),
        }
    }

    /// Everything selected: the year span of the generation range and
    /// every label the generator samples from.
    #[must_use]
    pub fn all_for(params: &GenerationParams) -> Self {
        let years = YearRange {
            min: params.start_date.year(),
            max: params.end_date.year().max(params.start_date.year()),
        };
        Self::new(
            years,
            params.categories.iter().copied(),
            params.districts.iter().copied(),
        )
    }

    /// Check if a row satisfies all three predicates.
    #[must_use]
    pub fn matches(&self, record: &IncidentRecord) -> bool {
        self.years.contains(record.date.year())
            && self.categories.contains(&record.category)
            && self.districts.contains(&record.district)
    }
}

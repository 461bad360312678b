//! The synthetic incident table and the pure operations over it.
//!
//! The table is generated once per [`Session`](crate::Session) and is never
//! mutated afterwards. Filtering produces a new table that preserves the
//! source insertion order, so the aggregations computed from it are
//! deterministic:
//!
//! ```
//! use sfcrime::{FilterCriteria, GenerationParams, IncidentTable};
//!
//! let params = GenerationParams::default();
//! let table = IncidentTable::generate(&params).expect("valid params");
//! assert_eq!(table.len(), 5 * 1461);
//!
//! let filtered = table.filter(&FilterCriteria::all_for(&params));
//! let stats = filtered.summary();
//! assert_eq!(stats.total_incidents, table.total_incidents());
//! ```

pub mod aggregate;
pub mod filter;
pub mod generate;
pub mod summary;

#[cfg(test)]
mod property_tests;

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::record::{District, IncidentRecord};

pub use aggregate::{MonthlyTotal, YearMonth};
pub use filter::{FilterCriteria, YearRange};
pub use generate::GenerationParams;
pub use summary::{SummaryStatistics, NO_DATA};

/// An immutable, row-oriented table of incident records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IncidentTable {
    rows: Vec<IncidentRecord>,
}

impl IncidentTable {
    /// Generate a deterministic synthetic table.
    ///
    /// # Errors
    ///
    /// Returns an error if the date range is inverted or a label set is empty.
    pub fn generate(params: &GenerationParams) -> Result<Self> {
        generate::generate(params)
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The rows, in insertion order.
    #[must_use]
    pub fn records(&self) -> &[IncidentRecord] {
        &self.rows
    }

    /// Iterate over the rows in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, IncidentRecord> {
        self.rows.iter()
    }

    /// Sum of `incidents` over every row.
    #[must_use]
    pub fn total_incidents(&self) -> u64 {
        self.rows.iter().map(|r| u64::from(r.incidents)).sum()
    }

    /// Rows matching every predicate of `criteria`, in source order.
    #[must_use]
    pub fn filter(&self, criteria: &FilterCriteria) -> Self {
        let rows: Vec<_> = self
            .rows
            .iter()
            .filter(|r| criteria.matches(r))
            .copied()
            .collect();
        debug!(
            source_rows = self.rows.len(),
            matched_rows = rows.len(),
            "filtered incident table"
        );
        Self { rows }
    }

    /// Incident totals per calendar month, ascending.
    #[must_use]
    pub fn by_month(&self) -> Vec<MonthlyTotal> {
        aggregate::by_month(self)
    }

    /// Incident totals per district present in the table.
    #[must_use]
    pub fn by_district(&self) -> BTreeMap<District, u64> {
        aggregate::by_district(self)
    }

    /// Total, average daily and most common category.
    #[must_use]
    pub fn summary(&self) -> SummaryStatistics {
        SummaryStatistics::compute(self)
    }
}

impl From<Vec<IncidentRecord>> for IncidentTable {
    fn from(rows: Vec<IncidentRecord>) -> Self {
        Self { rows }
    }
}

impl FromIterator<IncidentRecord> for IncidentTable {
    fn from_iter<I: IntoIterator<Item = IncidentRecord>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a IncidentTable {
    type Item = &'a IncidentRecord;
    type IntoIter = std::slice::Iter<'a, IncidentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

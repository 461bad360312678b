//! Group-by-and-sum reductions keyed by month or by district.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};

use super::IncidentTable;
use crate::record::District;

/// A calendar month, ordered chronologically and rendered as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Month containing `date`.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Calendar year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month of the year, 1-based.
    #[must_use]
    pub fn month(&self) -> u32 {
        self.month
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Incident total for one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyTotal {
    /// The month.
    pub month: YearMonth,
    /// Summed incidents.
    pub incidents: u64,
}

/// Sum incidents per `(year, month)`, ascending by month.
///
/// An empty table yields an empty series.
#[must_use]
pub fn by_month(table: &IncidentTable) -> Vec<MonthlyTotal> {
    let mut totals: BTreeMap<YearMonth, u64> = BTreeMap::new();
    for row in table {
        *totals.entry(YearMonth::of(row.date)).or_default() += u64::from(row.incidents);
    }
    totals
        .into_iter()
        .map(|(month, incidents)| MonthlyTotal { month, incidents })
        .collect()
}

/// Sum incidents per district.
///
/// Districts without matching rows are omitted rather than zero-filled.
#[must_use]
pub fn by_district(table: &IncidentTable) -> BTreeMap<District, u64> {
    let mut totals = BTreeMap::new();
    for row in table {
        *totals.entry(row.district).or_default() += u64::from(row.incidents);
    }
    totals
}

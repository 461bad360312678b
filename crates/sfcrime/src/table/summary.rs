//! Scalar summary metrics over a (filtered) incident table.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Serialize, Serializer};

use super::IncidentTable;
use crate::record::Category;

/// Sentinel shown in place of a metric that is undefined for an empty selection.
pub const NO_DATA: &str = "N/A";

/// The three dashboard metrics.
///
/// `None` means "no data". It serializes and displays as [`NO_DATA`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStatistics {
    /// Sum of incidents over all rows.
    pub total_incidents: u64,
    /// Total incidents divided by the number of distinct dates present.
    #[serde(serialize_with = "or_no_data")]
    pub average_daily_incidents: Option<f64>,
    /// Category with the highest summed incidents.
    #[serde(serialize_with = "or_no_data")]
    pub most_common_category: Option<Category>,
}

impl SummaryStatistics {
    /// Compute the metrics for `table`.
    ///
    /// Ties for the most common category go to the earliest category in
    /// [`Category::ALL`] order.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compute(table: &IncidentTable) -> Self {
        let total_incidents = table.total_incidents();

        let distinct_days = table.iter().map(|r| r.date).collect::<BTreeSet<_>>().len();
        let average_daily_incidents = if distinct_days == 0 {
            None
        } else {
            Some(total_incidents as f64 / distinct_days as f64)
        };

        let mut per_category: BTreeMap<Category, u64> = BTreeMap::new();
        for row in table {
            *per_category.entry(row.category).or_default() += u64::from(row.incidents);
        }
        // BTreeMap iterates in canonical order; only a strictly larger sum
        // displaces the current leader.
        let mut most_common_category: Option<(Category, u64)> = None;
        for (category, sum) in per_category {
            if most_common_category.map_or(true, |(_, best)| sum > best) {
                most_common_category = Some((category, sum));
            }
        }

        Self {
            total_incidents,
            average_daily_incidents,
            most_common_category: most_common_category.map(|(c, _)| c),
        }
    }

    /// Check if the statistics describe an empty selection.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.most_common_category.is_none()
    }

    /// Average daily incidents to two decimals, or [`NO_DATA`].
    #[must_use]
    pub fn average_daily_display(&self) -> String {
        self.average_daily_incidents
            .map_or_else(|| NO_DATA.to_string(), |avg| format!("{avg:.2}"))
    }

    /// Most common category label, or [`NO_DATA`].
    #[must_use]
    pub fn most_common_display(&self) -> String {
        self.most_common_category
            .map_or_else(|| NO_DATA.to_string(), |c| c.to_string())
    }
}

fn or_no_data<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(v) => v.serialize(serializer),
        None => serializer.serialize_str(NO_DATA),
    }
}

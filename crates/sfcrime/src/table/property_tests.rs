//! Property-based tests using proptest.
//!
//! Filter and aggregation invariants checked over arbitrary seeds, short
//! date ranges, year ranges and label subsets.

use chrono::Duration;
use proptest::prelude::*;

use super::test_support::date;
use super::{FilterCriteria, GenerationParams, IncidentTable, YearRange};
use crate::record::{Category, District};

/// Arbitrary seed and a range of up to 40 days starting anywhere in 2019..=2023,
/// so ranges regularly straddle a new year.
fn params_strategy() -> impl Strategy<Value = GenerationParams> {
    (any::<u64>(), 0i64..1826, 0i64..40).prop_map(|(seed, offset, len)| {
        let start = date(2019, 1, 1) + Duration::days(offset);
        GenerationParams::default()
            .with_seed(seed)
            .with_range(start, start + Duration::days(len))
    })
}

/// Arbitrary year range plus category and district subsets (empty included).
fn criteria_strategy() -> impl Strategy<Value = FilterCriteria> {
    (2017i32..2026, 2017i32..2026, 0u32..32, 0u32..1024).prop_map(|(a, b, cat_mask, dist_mask)| {
        let years = YearRange::new(a.min(b), a.max(b)).unwrap();
        let categories = Category::ALL
            .into_iter()
            .enumerate()
            .filter(move |(i, _)| cat_mask & (1 << i) != 0)
            .map(|(_, c)| c);
        let districts = District::ALL
            .into_iter()
            .enumerate()
            .filter(move |(i, _)| dist_mask & (1 << i) != 0)
            .map(|(_, d)| d);
        FilterCriteria::new(years, categories, districts)
    })
}

proptest! {
    /// Every kept row satisfies all three predicates; every dropped row fails one.
    #[test]
    fn filter_is_sound_and_complete(params in params_strategy(), criteria in criteria_strategy()) {
        let table = IncidentTable::generate(&params).unwrap();
        let filtered = table.filter(&criteria);

        prop_assert!(filtered.iter().all(|r| criteria.matches(r)));
        let kept: Vec<_> = table.iter().filter(|r| criteria.matches(r)).copied().collect();
        prop_assert_eq!(filtered.records(), kept.as_slice());
        let dropped = table.len() - filtered.len();
        prop_assert_eq!(dropped, table.iter().filter(|r| !criteria.matches(r)).count());
    }

    /// Month totals, district totals and the summary total all equal the raw sum.
    #[test]
    fn totals_are_conserved(params in params_strategy(), criteria in criteria_strategy()) {
        let filtered = IncidentTable::generate(&params).unwrap().filter(&criteria);
        let raw: u64 = filtered.iter().map(|r| u64::from(r.incidents)).sum();

        let monthly: u64 = filtered.by_month().iter().map(|m| m.incidents).sum();
        let district: u64 = filtered.by_district().values().sum();
        prop_assert_eq!(monthly, raw);
        prop_assert_eq!(district, raw);
        prop_assert_eq!(filtered.summary().total_incidents, raw);
        prop_assert_eq!(filtered.summary().is_empty(), filtered.is_empty());
    }

    /// Filtering twice, or filtering the filtered table again, changes nothing.
    #[test]
    fn filter_is_idempotent(params in params_strategy(), criteria in criteria_strategy()) {
        let table = IncidentTable::generate(&params).unwrap();
        let first = table.filter(&criteria);
        prop_assert_eq!(&first, &table.filter(&criteria));
        prop_assert_eq!(&first.filter(&criteria), &first);
    }

    /// Same parameters, same table; rows stay within their invariants.
    #[test]
    fn generation_is_deterministic_and_in_range(params in params_strategy()) {
        let first = IncidentTable::generate(&params).unwrap();
        let second = IncidentTable::generate(&params).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), params.rows_per_day * params.date_axis().len());
        for row in &first {
            prop_assert!(row.date >= params.start_date && row.date <= params.end_date);
            prop_assert!((1..=9).contains(&row.incidents));
        }
    }
}

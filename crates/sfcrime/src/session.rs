//! Dashboard session: one generated table, queried read-only.
//!
//! A session is created once per process (or per request context) and
//! handed to the presentation layer by reference. Nothing is cached
//! across sessions.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::Result;
use crate::record::District;
use crate::table::{FilterCriteria, GenerationParams, IncidentTable, MonthlyTotal, SummaryStatistics};

/// Everything the dashboard widgets need for one set of filter selections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    /// The selections this view was computed for.
    pub criteria: FilterCriteria,
    /// Number of rows that matched.
    pub matched_rows: usize,
    /// Incidents per month, ascending (line chart).
    pub monthly: Vec<MonthlyTotal>,
    /// Incidents per district present in the selection (bar chart).
    pub by_district: BTreeMap<District, u64>,
    /// Metric tiles.
    pub summary: SummaryStatistics,
}

/// Owns the generated table for the lifetime of a session.
#[derive(Debug)]
pub struct Session {
    params: GenerationParams,
    table: IncidentTable,
}

impl Session {
    /// Generate a fresh table.
    ///
    /// # Errors
    ///
    /// Returns an error if `params` are invalid (inverted range, empty label
    /// set). This is fatal to startup.
    pub fn new(params: GenerationParams) -> Result<Self> {
        let table = IncidentTable::generate(&params)?;
        info!(
            seed = params.seed,
            start = %params.start_date,
            end = %params.end_date,
            rows = table.len(),
            "session started"
        );
        Ok(Self { params, table })
    }

    /// Parameters the table was generated from.
    #[must_use]
    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// The generated table.
    #[must_use]
    pub fn table(&self) -> &IncidentTable {
        &self.table
    }

    /// Criteria selecting every row of this session's table.
    #[must_use]
    pub fn default_criteria(&self) -> FilterCriteria {
        FilterCriteria::all_for(&self.params)
    }

    /// Filter, aggregate and summarize in one pass over the selections.
    #[must_use]
    pub fn query(&self, criteria: &FilterCriteria) -> DashboardView {
        let filtered = self.table.filter(criteria);
        if filtered.is_empty() {
            debug!(years = %criteria.years, "selection matched no rows");
        }
        DashboardView {
            criteria: criteria.clone(),
            matched_rows: filtered.len(),
            monthly: filtered.by_month(),
            by_district: filtered.by_district(),
            summary: filtered.summary(),
        }
    }
}

//! Text renderers for command output.
//!
//! These only format values computed by the data layer; none of them
//! filter or aggregate.

use std::fmt::Write as _;

use super::OutputFormat;
use crate::config::Config;
use crate::error::Result;
use crate::session::DashboardView;
use crate::table::{IncidentTable, SummaryStatistics};

/// Render up to `limit` rows of the table.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn records(table: &IncidentTable, limit: Option<usize>, format: OutputFormat) -> Result<String> {
    let shown = &table.records()[..limit.map_or(table.len(), |n| n.min(table.len()))];
    let mut out = String::new();
    match format {
        OutputFormat::Json => out = serde_json::to_string_pretty(shown)?,
        OutputFormat::Plain => {
            out.push_str("date,category,district,incidents\n");
            for r in shown {
                writeln!(out, "{},{},{},{}", r.date, r.category, r.district, r.incidents)?;
            }
        }
        OutputFormat::Table => {
            writeln!(out, "{:<10}  {:<13}  {:<10}  {:>9}", "Date", "Category", "District", "Incidents")?;
            writeln!(out, "{}", "-".repeat(48))?;
            for r in shown {
                writeln!(
                    out,
                    "{:<10}  {:<13}  {:<10}  {:>9}",
                    r.date.to_string(),
                    r.category.label(),
                    r.district.label(),
                    r.incidents
                )?;
            }
            if shown.len() < table.len() {
                writeln!(out, "... {} of {} rows shown", shown.len(), table.len())?;
            }
        }
    }
    Ok(out)
}

/// Render the three metrics.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn summary(stats: &SummaryStatistics, format: OutputFormat) -> Result<String> {
    let out = match format {
        OutputFormat::Json => serde_json::to_string_pretty(stats)?,
        OutputFormat::Plain => format!(
            "total_incidents,{}\naverage_daily_incidents,{}\nmost_common_category,{}\n",
            stats.total_incidents,
            stats.average_daily_display(),
            stats.most_common_display()
        ),
        OutputFormat::Table => format!(
            "Total Incidents:          {}\nAverage Daily Incidents:  {}\nMost Common Crime:        {}\n",
            stats.total_incidents,
            stats.average_daily_display(),
            stats.most_common_display()
        ),
    };
    Ok(out)
}

/// Render a full dashboard view.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn dashboard(view: &DashboardView, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(view)?);
    }

    let mut out = String::new();
    let categories: Vec<_> = view.criteria.categories.iter().map(|c| c.label()).collect();
    let districts: Vec<_> = view.criteria.districts.iter().map(|d| d.label()).collect();

    match format {
        OutputFormat::Plain => {
            writeln!(out, "years,{}", view.criteria.years)?;
            writeln!(out, "categories,{}", categories.join(";"))?;
            writeln!(out, "districts,{}", districts.join(";"))?;
            writeln!(out, "matched_rows,{}", view.matched_rows)?;
            out.push_str("\nmonth,incidents\n");
            for m in &view.monthly {
                writeln!(out, "{},{}", m.month, m.incidents)?;
            }
            out.push_str("\ndistrict,incidents\n");
            for (district, total) in &view.by_district {
                writeln!(out, "{district},{total}")?;
            }
            out.push('\n');
        }
        _ => {
            writeln!(out, "Years:       {}", view.criteria.years)?;
            writeln!(out, "Categories:  {}", display_selection(&categories))?;
            writeln!(out, "Districts:   {}", display_selection(&districts))?;
            writeln!(out, "Rows:        {}", view.matched_rows)?;
            out.push_str("\nCrime Trends Over Time\n----------------------\n");
            if view.monthly.is_empty() {
                out.push_str("(no data)\n");
            }
            for m in &view.monthly {
                writeln!(out, "{:<8}  {:>6}", m.month.to_string(), m.incidents)?;
            }
            out.push_str("\nCrimes by District\n------------------\n");
            if view.by_district.is_empty() {
                out.push_str("(no data)\n");
            }
            for (district, total) in &view.by_district {
                writeln!(out, "{:<10}  {:>6}", district.label(), total)?;
            }
            out.push('\n');
        }
    }
    out.push_str(&summary(&view.summary, format)?);
    Ok(out)
}

fn display_selection(labels: &[&str]) -> String {
    if labels.is_empty() {
        "(none)".to_string()
    } else {
        labels.join(", ")
    }
}

/// Render the configuration as human-readable text.
///
/// # Errors
///
/// Returns an error if formatting into the buffer fails.
pub fn config(config: &Config) -> Result<String> {
    let mut out = String::new();
    out.push_str("Current Configuration\n=====================\n\n");
    out.push_str("[Generation]\n");
    writeln!(out, "  Seed:               {}", config.generation.seed)?;
    writeln!(out, "  Start date:         {}", config.generation.start_date)?;
    writeln!(out, "  End date:           {}", config.generation.end_date)?;
    writeln!(out, "  Rows per day:       {}", config.generation.rows_per_day)?;
    out.push_str("\n[Query]\n");
    writeln!(
        out,
        "  Years:              {}",
        config
            .query
            .years
            .map_or_else(|| "(generation range)".to_string(), |y| y.to_string())
    )?;
    let categories: Vec<_> = config.query.categories.iter().map(|c| c.label()).collect();
    let districts: Vec<_> = config.query.districts.iter().map(|d| d.label()).collect();
    writeln!(out, "  Categories:         {}", display_selection(&categories))?;
    writeln!(out, "  Districts:          {}", display_selection(&districts))?;
    Ok(out)
}

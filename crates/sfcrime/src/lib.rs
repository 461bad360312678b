//! `sfcrime` - Deterministic mock data behind a San Francisco crime dashboard
//!
//! This library generates a seeded synthetic incident table and provides the
//! pure filter, aggregation and summary operations that dashboard widgets
//! (a monthly line chart, a district bar chart and three metric tiles)
//! are bound to.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod record;
pub mod session;
pub mod table;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use record::{Category, District, IncidentRecord};
pub use session::{DashboardView, Session};
pub use table::{
    FilterCriteria, GenerationParams, IncidentTable, MonthlyTotal, SummaryStatistics, YearMonth,
    YearRange, NO_DATA,
};

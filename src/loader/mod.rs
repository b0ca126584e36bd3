//! Record loading and schema definitions.
//!
//! This module handles:
//! - Parsing raw CSV text from the spreadsheet export
//! - Lenient vs strict numeric field handling
//! - Defining the standings report schema

pub mod csv;
pub mod schema;

// Re-export main types
pub use csv::{load_records, Granularity, MatchRecord, ParseMode, RecordSet, SeriesRecord};
pub use schema::{to_report, StandingsReport, StandingsRow};

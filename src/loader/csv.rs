//! CSV record loader for spreadsheet score exports.
//!
//! The export is a plain comma-separated dump with a header line:
//! no quoting, no escaping of embedded commas. Two granularities are
//! supported, selected by the caller:
//!
//! - per-match:  `series,player,match_no,points,order,prev_rank`
//! - per-series: `series,player,points,matches,order` (points and
//!   matches already summed per series)
//!
//! Numeric parsing strictness is an explicit choice. Lenient mode
//! mirrors the looseness of typical spreadsheet exports: a malformed
//! numeric field coerces to zero instead of failing the load. Strict
//! mode reports the line and field instead.

use crate::utils::config::{CSV_DELIMITER, MATCH_COLUMN_COUNT, SERIES_COLUMN_COUNT};
use crate::utils::error::LoadError;
use log::{debug, warn};

/// Numeric parsing strictness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Coerce malformed numeric fields to zero (permissive parsing)
    #[default]
    Lenient,
    /// Fail the load on the first malformed numeric field
    Strict,
}

/// Input granularity: one row per match, or one pre-aggregated row per series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Granularity {
    #[default]
    PerMatch,
    PerSeries,
}

impl Granularity {
    /// Parse a CLI argument value ("per-match" / "per-series")
    pub fn from_arg(value: &str) -> Option<Self> {
        match value {
            "per-match" => Some(Self::PerMatch),
            "per-series" => Some(Self::PerSeries),
            _ => None,
        }
    }
}

/// One per-match row of the export
///
/// `(series, player, match_no)` is assumed unique: a player appears
/// at most once per match per series. The loader does not enforce it.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRecord {
    pub series: String,
    pub player: String,
    pub match_no: u32,
    pub points: f64,
    /// Stable secondary sort key (e.g., registration order)
    pub order: i64,
    /// 1-based rank from a previous snapshot; None when absent
    pub prev_rank: Option<u32>,
}

/// One pre-aggregated per-series row of the export
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesRecord {
    pub series: String,
    pub player: String,
    pub points: f64,
    pub matches: u32,
    pub order: i64,
}

/// Loaded record set, tagged by granularity
#[derive(Debug, Clone)]
pub enum RecordSet {
    PerMatch(Vec<MatchRecord>),
    PerSeries(Vec<SeriesRecord>),
}

impl RecordSet {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::PerMatch(rows) => rows.is_empty(),
            Self::PerSeries(rows) => rows.is_empty(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::PerMatch(rows) => rows.len(),
            Self::PerSeries(rows) => rows.len(),
        }
    }

    /// Distinct series identifiers in first-seen order.
    ///
    /// This is the value set of any scope selector built on top of
    /// the data (plus the synthetic "ALL" entry the caller adds).
    pub fn series_list(&self) -> Vec<String> {
        let mut seen = Vec::new();
        let mut push = |series: &str| {
            if !seen.iter().any(|s: &String| s == series) {
                seen.push(series.to_string());
            }
        };
        match self {
            Self::PerMatch(rows) => rows.iter().for_each(|r| push(&r.series)),
            Self::PerSeries(rows) => rows.iter().for_each(|r| push(&r.series)),
        }
        seen
    }
}

/// Load records from raw CSV text
///
/// **Public** - main entry point for loading
///
/// The first line is a header and is discarded. Remaining lines are
/// parsed in original row order; blank lines are skipped.
///
/// # Errors
/// Strict mode only: `LoadError` naming the offending line and field.
/// Lenient mode never fails on row content, only on missing input.
pub fn load_records(
    text: &str,
    granularity: Granularity,
    mode: ParseMode,
) -> Result<RecordSet, LoadError> {
    let mut lines = text.trim().lines();

    // Header line is discarded
    if lines.next().is_none() {
        return Err(LoadError::EmptyInput);
    }

    let set = match granularity {
        Granularity::PerMatch => {
            let mut rows = Vec::new();
            for (index, line) in lines.enumerate() {
                if line.trim().is_empty() {
                    continue;
                }
                // Line numbers are 1-based and include the header
                rows.push(parse_match_row(line, index + 2, mode)?);
            }
            RecordSet::PerMatch(rows)
        }
        Granularity::PerSeries => {
            let mut rows = Vec::new();
            for (index, line) in lines.enumerate() {
                if line.trim().is_empty() {
                    continue;
                }
                rows.push(parse_series_row(line, index + 2, mode)?);
            }
            RecordSet::PerSeries(rows)
        }
    };

    debug!("Loaded {} records ({:?})", set.len(), granularity);
    Ok(set)
}

/// Parse a single per-match row
///
/// **Private** - internal row parsing
fn parse_match_row(line: &str, line_no: usize, mode: ParseMode) -> Result<MatchRecord, LoadError> {
    let fields = split_fields(line, MATCH_COLUMN_COUNT, line_no, mode)?;

    Ok(MatchRecord {
        series: fields[0].to_string(),
        player: fields[1].to_string(),
        match_no: parse_u32(fields[2], "match_no", line_no, mode)?,
        points: parse_f64(fields[3], "points", line_no, mode)?,
        order: parse_i64(fields[4], "order", line_no, mode)?,
        prev_rank: parse_prev_rank(fields[5], line_no, mode)?,
    })
}

/// Parse a single pre-aggregated per-series row
///
/// **Private** - internal row parsing
fn parse_series_row(
    line: &str,
    line_no: usize,
    mode: ParseMode,
) -> Result<SeriesRecord, LoadError> {
    let fields = split_fields(line, SERIES_COLUMN_COUNT, line_no, mode)?;

    Ok(SeriesRecord {
        series: fields[0].to_string(),
        player: fields[1].to_string(),
        points: parse_f64(fields[2], "points", line_no, mode)?,
        matches: parse_u32(fields[3], "matches", line_no, mode)?,
        order: parse_i64(fields[4], "order", line_no, mode)?,
    })
}

/// Split a row on the fixed delimiter, padding short rows in lenient mode
///
/// **Private** - internal utility
fn split_fields(
    line: &str,
    expected: usize,
    line_no: usize,
    mode: ParseMode,
) -> Result<Vec<&str>, LoadError> {
    let mut fields: Vec<&str> = line.split(CSV_DELIMITER).collect();

    if fields.len() != expected {
        if mode == ParseMode::Strict {
            return Err(LoadError::WrongFieldCount {
                line: line_no,
                expected,
                found: fields.len(),
            });
        }
        if fields.len() < expected {
            warn!(
                "line {}: {} fields, padding to {}",
                line_no,
                fields.len(),
                expected
            );
            fields.resize(expected, "");
        } else {
            // Extra fields are the tail of an unquoted embedded comma;
            // nothing sensible can be recovered, so drop the excess.
            warn!(
                "line {}: {} fields, truncating to {}",
                line_no,
                fields.len(),
                expected
            );
            fields.truncate(expected);
        }
    }

    Ok(fields)
}

fn parse_f64(
    value: &str,
    field: &'static str,
    line_no: usize,
    mode: ParseMode,
) -> Result<f64, LoadError> {
    match value.trim().parse::<f64>() {
        Ok(n) => Ok(n),
        Err(_) => coerce(value, field, line_no, mode).map(|_| 0.0),
    }
}

fn parse_u32(
    value: &str,
    field: &'static str,
    line_no: usize,
    mode: ParseMode,
) -> Result<u32, LoadError> {
    match value.trim().parse::<u32>() {
        Ok(n) => Ok(n),
        Err(_) => coerce(value, field, line_no, mode).map(|_| 0),
    }
}

fn parse_i64(
    value: &str,
    field: &'static str,
    line_no: usize,
    mode: ParseMode,
) -> Result<i64, LoadError> {
    match value.trim().parse::<i64>() {
        Ok(n) => Ok(n),
        Err(_) => coerce(value, field, line_no, mode).map(|_| 0),
    }
}

/// Parse the previous-rank field.
///
/// A blank field or an explicit 0 means "no previous snapshot" in
/// both modes; only a non-empty, non-numeric value is malformed.
fn parse_prev_rank(
    value: &str,
    line_no: usize,
    mode: ParseMode,
) -> Result<Option<u32>, LoadError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<u32>() {
        Ok(0) => Ok(None),
        Ok(n) => Ok(Some(n)),
        Err(_) => coerce(value, "prev_rank", line_no, mode).map(|_| None),
    }
}

/// Decide what a malformed numeric field becomes
///
/// **Private** - lenient mode logs and coerces, strict mode fails
fn coerce(value: &str, field: &'static str, line_no: usize, mode: ParseMode) -> Result<(), LoadError> {
    match mode {
        ParseMode::Lenient => {
            warn!(
                "line {}: invalid {} value '{}', coercing to zero",
                line_no,
                field,
                value.trim()
            );
            Ok(())
        }
        ParseMode::Strict => Err(LoadError::InvalidNumber {
            line: line_no,
            field,
            value: value.trim().to_string(),
        }),
    }
}

//! Group raw records into per-player totals for a scope.
//!
//! The scope is either one series or all series combined. The distinct
//! match count (the average's denominator) depends on the scope: under
//! "ALL" the same match number in two different series counts as two
//! matches, under a single series it is the match number alone.

use crate::loader::csv::{MatchRecord, RecordSet, SeriesRecord};
use crate::utils::config::{SCOPE_ALL, SCOPE_ALL_LABEL};
use log::debug;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Active filter context for aggregation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Union of all series
    All,
    /// One series by identifier
    Series(String),
}

impl Scope {
    /// Parse a CLI argument value; "ALL" selects the union scope
    pub fn from_arg(value: &str) -> Self {
        if value == SCOPE_ALL {
            Self::All
        } else {
            Self::Series(value.to_string())
        }
    }

    fn includes(&self, series: &str) -> bool {
        match self {
            Self::All => true,
            Self::Series(name) => name == series,
        }
    }

    /// Human-facing label ("All-Time" for the union scope)
    pub fn label(&self) -> &str {
        match self {
            Self::All => SCOPE_ALL_LABEL,
            Self::Series(name) => name,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(SCOPE_ALL),
            Self::Series(name) => f.write_str(name),
        }
    }
}

/// Per-player totals for one scope
///
/// Derived data: recomputed on every scope change, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerTotals {
    pub player: String,
    /// Sum of points over the player's records in scope
    pub points: f64,
    /// Count of distinct match keys in scope
    pub matches: usize,
    /// points / matches, 0 when the player has no matches
    pub avg: f64,
    /// Tie-break key carried from the first-seen record
    pub order: i64,
    /// Previous-snapshot rank carried from the first-seen record
    pub prev_rank: Option<u32>,
}

/// The unit counted as "one match" for averaging purposes.
///
/// Under `Scope::All` the series is part of the key, so the same
/// match number in different series counts twice.
fn match_key(record: &MatchRecord, scope: &Scope) -> (Option<String>, u32) {
    match scope {
        Scope::All => (Some(record.series.clone()), record.match_no),
        Scope::Series(_) => (None, record.match_no),
    }
}

/// Aggregate records into per-player totals
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `records` - Loaded record set (either granularity)
/// * `scope` - Series filter ("ALL" or one series)
///
/// # Returns
/// Totals in first-seen player order. An empty scope yields an
/// empty vector, not an error.
pub fn aggregate(records: &RecordSet, scope: &Scope) -> Vec<PlayerTotals> {
    let totals = match records {
        RecordSet::PerMatch(rows) => aggregate_per_match(rows, scope),
        RecordSet::PerSeries(rows) => aggregate_per_series(rows, scope),
    };

    debug!("Aggregated {} players for scope {}", totals.len(), scope);
    totals
}

/// Aggregate per-match rows: sum points, count distinct match keys
///
/// **Private** - internal fold over the filtered rows
fn aggregate_per_match(rows: &[MatchRecord], scope: &Scope) -> Vec<PlayerTotals> {
    struct Acc {
        points: f64,
        keys: HashSet<(Option<String>, u32)>,
        order: i64,
        prev_rank: Option<u32>,
    }

    let mut index: HashMap<String, usize> = HashMap::new();
    let mut order_seen: Vec<(String, Acc)> = Vec::new();

    for record in rows.iter().filter(|r| scope.includes(&r.series)) {
        let slot = *index.entry(record.player.clone()).or_insert_with(|| {
            order_seen.push((
                record.player.clone(),
                Acc {
                    points: 0.0,
                    keys: HashSet::new(),
                    order: record.order,
                    prev_rank: record.prev_rank,
                },
            ));
            order_seen.len() - 1
        });

        let acc = &mut order_seen[slot].1;
        acc.points += record.points;
        acc.keys.insert(match_key(record, scope));
    }

    order_seen
        .into_iter()
        .map(|(player, acc)| {
            let matches = acc.keys.len();
            PlayerTotals {
                player,
                points: acc.points,
                matches,
                avg: guarded_avg(acc.points, matches),
                order: acc.order,
                prev_rank: acc.prev_rank,
            }
        })
        .collect()
}

/// Aggregate pre-aggregated per-series rows: sum points and match counts
///
/// **Private** - internal fold over the filtered rows
fn aggregate_per_series(rows: &[SeriesRecord], scope: &Scope) -> Vec<PlayerTotals> {
    struct Acc {
        points: f64,
        matches: usize,
        order: i64,
    }

    let mut index: HashMap<String, usize> = HashMap::new();
    let mut order_seen: Vec<(String, Acc)> = Vec::new();

    for record in rows.iter().filter(|r| scope.includes(&r.series)) {
        let slot = *index.entry(record.player.clone()).or_insert_with(|| {
            order_seen.push((
                record.player.clone(),
                Acc {
                    points: 0.0,
                    matches: 0,
                    order: record.order,
                },
            ));
            order_seen.len() - 1
        });

        let acc = &mut order_seen[slot].1;
        acc.points += record.points;
        acc.matches += record.matches as usize;
    }

    order_seen
        .into_iter()
        .map(|(player, acc)| PlayerTotals {
            player,
            points: acc.points,
            matches: acc.matches,
            avg: guarded_avg(acc.points, acc.matches),
            order: acc.order,
            prev_rank: None,
        })
        .collect()
}

/// Division guarded against an empty denominator; never NaN
pub(crate) fn guarded_avg(points: f64, matches: usize) -> f64 {
    if matches > 0 {
        points / matches as f64
    } else {
        0.0
    }
}

//! Per-player profile summaries with a match breakdown.
//!
//! The breakdown enumerates match numbers from 1 up to the highest
//! match number observed in the player's own rows, reporting 0 points
//! for matches the player skipped. This gap-filling assumes every
//! match number up to the observed maximum was actually scheduled;
//! it is preserved from the source behavior rather than "fixed".

use crate::aggregator::totals::{guarded_avg, Scope};
use crate::loader::csv::{MatchRecord, RecordSet};
use log::debug;
use std::collections::HashMap;

/// Points for one (possibly gap-filled) match slot
#[derive(Debug, Clone, PartialEq)]
pub struct MatchPoints {
    pub match_no: u32,
    pub points: f64,
}

/// One series' gap-filled match enumeration
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesBreakdown {
    pub series: String,
    pub matches: Vec<MatchPoints>,
}

/// One series' pre-aggregated totals (per-series granularity)
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesTotal {
    pub series: String,
    pub points: f64,
    pub matches: u32,
}

/// Profile breakdown, shaped by the input granularity
#[derive(Debug, Clone, PartialEq)]
pub enum Breakdown {
    /// Per-match rows: gap-filled match enumeration, grouped by series
    PerMatch(Vec<SeriesBreakdown>),
    /// Pre-aggregated rows: one totals row per series in scope
    PerSeries(Vec<SeriesTotal>),
}

/// Summary of one player's record within a scope
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSummary {
    pub player: String,
    /// Human-facing scope label ("All-Time" or the series name)
    pub scope_label: String,
    pub total: f64,
    pub matches: usize,
    pub avg: f64,
    pub breakdown: Breakdown,
}

impl ProfileSummary {
    /// Average formatted for display; "0.00" when the player has no matches
    pub fn formatted_avg(&self) -> String {
        format!("{:.2}", self.avg)
    }
}

/// Summarize one player's record within a scope
///
/// **Public** - main entry point for profile requests
///
/// # Returns
/// `None` when the player has zero matching records in the scope
/// (unknown player, or known player outside the scope).
pub fn summarize(records: &RecordSet, player: &str, scope: &Scope) -> Option<ProfileSummary> {
    match records {
        RecordSet::PerMatch(rows) => summarize_per_match(rows, player, scope),
        RecordSet::PerSeries(rows) => summarize_per_series(rows, player, scope),
    }
}

fn summarize_per_match(
    rows: &[MatchRecord],
    player: &str,
    scope: &Scope,
) -> Option<ProfileSummary> {
    let mine: Vec<&MatchRecord> = rows
        .iter()
        .filter(|r| {
            r.player == player
                && match scope {
                    Scope::All => true,
                    Scope::Series(name) => &r.series == name,
                }
        })
        .collect();

    if mine.is_empty() {
        debug!("No records for player '{}' in scope {}", player, scope);
        return None;
    }

    let total: f64 = mine.iter().map(|r| r.points).sum();

    // Same match-key policy as aggregation: series is part of the
    // key under ALL, so match 1 of two series counts twice.
    let mut played: Vec<(Option<&str>, u32)> = mine
        .iter()
        .map(|r| match scope {
            Scope::All => (Some(r.series.as_str()), r.match_no),
            Scope::Series(_) => (None, r.match_no),
        })
        .collect();
    played.sort_unstable();
    played.dedup();
    let matches = played.len();

    let breakdown = match scope {
        Scope::All => Breakdown::PerMatch(breakdown_by_series(&mine)),
        Scope::Series(name) => {
            let max_match = mine.iter().map(|r| r.match_no).max().unwrap_or(0);
            let by_match: HashMap<u32, f64> =
                mine.iter().map(|r| (r.match_no, r.points)).collect();
            Breakdown::PerMatch(vec![SeriesBreakdown {
                series: name.clone(),
                matches: fill_matches(&by_match, max_match),
            }])
        }
    };

    Some(ProfileSummary {
        player: player.to_string(),
        scope_label: scope.label().to_string(),
        total,
        matches,
        avg: guarded_avg(total, matches),
        breakdown,
    })
}

/// Group the player's rows by series (first-seen order) and gap-fill
/// each series up to its own observed maximum match number.
fn breakdown_by_series(mine: &[&MatchRecord]) -> Vec<SeriesBreakdown> {
    let mut series_order: Vec<&str> = Vec::new();
    let mut per_series: HashMap<&str, HashMap<u32, f64>> = HashMap::new();

    for record in mine {
        if !series_order.contains(&record.series.as_str()) {
            series_order.push(&record.series);
        }
        per_series
            .entry(&record.series)
            .or_default()
            .insert(record.match_no, record.points);
    }

    series_order
        .into_iter()
        .map(|series| {
            let by_match = &per_series[series];
            let max_match = by_match.keys().copied().max().unwrap_or(0);
            SeriesBreakdown {
                series: series.to_string(),
                matches: fill_matches(by_match, max_match),
            }
        })
        .collect()
}

/// Enumerate matches 1..=max, reporting 0 points for skipped slots
fn fill_matches(by_match: &HashMap<u32, f64>, max_match: u32) -> Vec<MatchPoints> {
    (1..=max_match)
        .map(|match_no| MatchPoints {
            match_no,
            points: by_match.get(&match_no).copied().unwrap_or(0.0),
        })
        .collect()
}

fn summarize_per_series(
    rows: &[crate::loader::csv::SeriesRecord],
    player: &str,
    scope: &Scope,
) -> Option<ProfileSummary> {
    let mine: Vec<_> = rows
        .iter()
        .filter(|r| {
            r.player == player
                && match scope {
                    Scope::All => true,
                    Scope::Series(name) => &r.series == name,
                }
        })
        .collect();

    if mine.is_empty() {
        debug!("No records for player '{}' in scope {}", player, scope);
        return None;
    }

    let total: f64 = mine.iter().map(|r| r.points).sum();
    let matches: usize = mine.iter().map(|r| r.matches as usize).sum();

    let breakdown = Breakdown::PerSeries(
        mine.iter()
            .map(|r| SeriesTotal {
                series: r.series.clone(),
                points: r.points,
                matches: r.matches,
            })
            .collect(),
    );

    Some(ProfileSummary {
        player: player.to_string(),
        scope_label: scope.label().to_string(),
        total,
        matches,
        avg: guarded_avg(total, matches),
        breakdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(series: &str, player: &str, match_no: u32, points: f64) -> MatchRecord {
        MatchRecord {
            series: series.to_string(),
            player: player.to_string(),
            match_no,
            points,
            order: 0,
            prev_rank: None,
        }
    }

    #[test]
    fn test_unknown_player_yields_none() {
        let set = RecordSet::PerMatch(vec![record("S", "A", 1, 10.0)]);
        assert!(summarize(&set, "nobody", &Scope::All).is_none());
    }

    #[test]
    fn test_player_outside_scope_yields_none() {
        let set = RecordSet::PerMatch(vec![record("S", "A", 1, 10.0)]);
        assert!(summarize(&set, "A", &Scope::Series("other".to_string())).is_none());
    }

    #[test]
    fn test_single_series_summary_and_gap_fill() {
        // Player skipped match 2; the breakdown fills it with 0
        let set = RecordSet::PerMatch(vec![
            record("S", "A", 1, 10.0),
            record("S", "A", 3, 5.0),
        ]);

        let summary = summarize(&set, "A", &Scope::Series("S".to_string())).unwrap();

        assert_eq!(summary.total, 15.0);
        assert_eq!(summary.matches, 2);
        assert_eq!(summary.avg, 7.5);
        assert_eq!(summary.formatted_avg(), "7.50");

        let Breakdown::PerMatch(series) = &summary.breakdown else {
            panic!("wrong breakdown shape");
        };
        assert_eq!(series.len(), 1);
        assert_eq!(
            series[0].matches,
            vec![
                MatchPoints { match_no: 1, points: 10.0 },
                MatchPoints { match_no: 2, points: 0.0 },
                MatchPoints { match_no: 3, points: 5.0 },
            ]
        );
    }

    #[test]
    fn test_all_scope_groups_by_series() {
        let set = RecordSet::PerMatch(vec![
            record("X", "A", 1, 10.0),
            record("Y", "A", 1, 6.0),
            record("Y", "A", 2, 4.0),
        ]);

        let summary = summarize(&set, "A", &Scope::All).unwrap();

        // Match 1 in X and match 1 in Y are distinct matches
        assert_eq!(summary.matches, 3);
        assert_eq!(summary.total, 20.0);
        assert_eq!(summary.scope_label, "All-Time");

        let Breakdown::PerMatch(series) = &summary.breakdown else {
            panic!("wrong breakdown shape");
        };
        assert_eq!(series[0].series, "X");
        assert_eq!(series[0].matches.len(), 1);
        assert_eq!(series[1].series, "Y");
        assert_eq!(series[1].matches.len(), 2);
    }

    #[test]
    fn test_per_series_granularity_summary() {
        let set = RecordSet::PerSeries(vec![
            crate::loader::csv::SeriesRecord {
                series: "S1".to_string(),
                player: "A".to_string(),
                points: 15.0,
                matches: 2,
                order: 1,
            },
            crate::loader::csv::SeriesRecord {
                series: "S2".to_string(),
                player: "A".to_string(),
                points: 5.0,
                matches: 2,
                order: 1,
            },
        ]);

        let summary = summarize(&set, "A", &Scope::All).unwrap();

        assert_eq!(summary.total, 20.0);
        assert_eq!(summary.matches, 4);
        assert_eq!(summary.avg, 5.0);

        let Breakdown::PerSeries(rows) = &summary.breakdown else {
            panic!("wrong breakdown shape");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].series, "S1");
    }

    #[test]
    fn test_zero_match_average_is_formatted_zero() {
        let set = RecordSet::PerSeries(vec![crate::loader::csv::SeriesRecord {
            series: "S1".to_string(),
            player: "A".to_string(),
            points: 0.0,
            matches: 0,
            order: 1,
        }]);

        let summary = summarize(&set, "A", &Scope::All).unwrap();
        assert_eq!(summary.formatted_avg(), "0.00");
    }
}

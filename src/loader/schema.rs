//! Output JSON schema definitions for standings reports.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use crate::aggregator::ranker::{max_points, Movement, RankedPlayer};
use crate::aggregator::totals::Scope;
use crate::utils::config::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};

/// Top-level standings report written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Where the CSV came from (URL or file path)
    pub source: String,

    /// Scope the standings were computed for ("ALL" or a series name)
    pub scope: String,

    /// Highest point total on the board (0 when empty); bar scaling basis
    pub max_points: f64,

    /// Ranked rows, best first
    pub players: Vec<StandingsRow>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

/// One ranked row of the standings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsRow {
    /// 1-based display rank
    pub rank: usize,

    /// Movement against the previous snapshot
    pub movement: Movement,

    pub player: String,
    pub points: f64,
    pub matches: usize,
    pub avg: f64,
}

/// Convert ranked players to the report format
///
/// **Public** - used by commands to create final output
pub fn to_report(ranked: &[RankedPlayer], source: &str, scope: &Scope) -> StandingsReport {
    use chrono::Utc;

    StandingsReport {
        version: SCHEMA_VERSION.to_string(),
        source: source.to_string(),
        scope: scope.to_string(),
        max_points: max_points(ranked),
        players: ranked
            .iter()
            .map(|p| StandingsRow {
                rank: p.rank,
                movement: p.movement,
                player: p.player.clone(),
                points: p.points,
                matches: p.matches,
                avg: p.avg,
            })
            .collect(),
        generated_at: Utc::now().to_rfc3339(),
    }
}

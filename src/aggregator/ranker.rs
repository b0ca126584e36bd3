//! Sort per-player totals into display order and compute rank movement.
//!
//! The comparator is a total order over distinct `order` values:
//! points descending, average descending, registration order ascending.
//! Two players with equal `order` keep their incoming relative order
//! (implementation-defined; the uniqueness assumption on `order` makes
//! this unreachable in practice).

use super::totals::PlayerTotals;
use log::debug;
use serde::{Deserialize, Serialize};

/// Movement against the previous-snapshot rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Movement {
    Up,
    Down,
    Flat,
}

impl Movement {
    /// Arrow glyph as rendered in the standings table
    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Up => "▲",
            Self::Down => "▼",
            Self::Flat => "➖",
        }
    }
}

/// One ranked row of the standings
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPlayer {
    /// 1-based display rank
    pub rank: usize,
    pub movement: Movement,
    pub player: String,
    pub points: f64,
    pub matches: usize,
    pub avg: f64,
}

/// Sort totals into ranked display order
///
/// **Public** - main entry point for ranking
///
/// # Arguments
/// * `totals` - Aggregated per-player totals for one scope
///
/// # Returns
/// Rows best-first, each with its 1-based rank and movement indicator.
pub fn rank(mut totals: Vec<PlayerTotals>) -> Vec<RankedPlayer> {
    totals.sort_by(|a, b| {
        b.points
            .total_cmp(&a.points)
            .then(b.avg.total_cmp(&a.avg))
            .then(a.order.cmp(&b.order))
    });

    debug!("Ranked {} players", totals.len());

    totals
        .into_iter()
        .enumerate()
        .map(|(index, t)| RankedPlayer {
            rank: index + 1,
            movement: movement(t.prev_rank, index),
            player: t.player,
            points: t.points,
            matches: t.matches,
            avg: t.avg,
        })
        .collect()
}

/// Movement indicator for the row at 0-based display `index`.
///
/// `prev_rank` is 1-based; a player with no snapshot is flat.
pub fn movement(prev_rank: Option<u32>, index: usize) -> Movement {
    let current = index + 1;
    match prev_rank {
        None => Movement::Flat,
        Some(prev) if prev as usize > current => Movement::Up,
        Some(prev) if (prev as usize) < current => Movement::Down,
        Some(_) => Movement::Flat,
    }
}

/// Highest point total on the board; 0 for an empty board.
///
/// Basis for proportional bar scaling, guarded so rendering never
/// divides by zero.
pub fn max_points(ranked: &[RankedPlayer]) -> f64 {
    ranked.iter().map(|p| p.points).fold(0.0, f64::max)
}

/// Fraction of the board maximum for one row's bar, in `0.0..=1.0`
pub fn bar_fraction(points: f64, max: f64) -> f64 {
    if max > 0.0 {
        (points / max).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

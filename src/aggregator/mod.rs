//! Aggregation and ranking: per-player totals for a scope,
//! sorted into display order with movement indicators.

pub mod ranker;
pub mod totals;

pub use ranker::{bar_fraction, max_points, movement, rank, Movement, RankedPlayer};
pub use totals::{aggregate, PlayerTotals, Scope};

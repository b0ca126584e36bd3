//! Scoretable
//!
//! Leaderboard aggregation and ranking for spreadsheet score exports.
//!
//! This crate provides the core implementation for the
//! `scoretable` CLI tool: loading CSV exports of per-match (or
//! pre-aggregated per-series) player scores, aggregating per-player
//! totals for a scope, ranking with deterministic tie-breaks and
//! movement indicators, and summarizing per-player profiles.
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install scoretable
//! scoretable --help
//! ```

pub mod aggregator;
pub mod commands;
pub mod fetch;
pub mod loader;
pub mod output;
pub mod profile;
pub mod utils;

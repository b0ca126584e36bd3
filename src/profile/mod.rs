//! Per-player profile summaries.

pub mod summarizer;

pub use summarizer::{
    summarize, Breakdown, MatchPoints, ProfileSummary, SeriesBreakdown, SeriesTotal,
};

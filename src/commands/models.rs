use crate::loader::csv::{Granularity, ParseMode};
use std::path::PathBuf;

/// Arguments for the standings command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct StandingsArgs {
    /// CSV source: http(s) URL or filesystem path
    pub source: String,

    /// Scope selector value ("ALL" or a series name)
    pub scope: String,

    /// Input granularity (per-match or pre-aggregated per-series)
    pub granularity: Granularity,

    /// Numeric parsing strictness
    pub parse_mode: ParseMode,

    /// Output path for the JSON standings report
    pub output_json: PathBuf,

    /// Print the text table to stdout
    pub print_table: bool,
}

impl Default for StandingsArgs {
    fn default() -> Self {
        Self {
            source: String::new(),
            scope: "ALL".to_string(),
            granularity: Granularity::PerMatch,
            parse_mode: ParseMode::Lenient,
            output_json: PathBuf::from("standings.json"),
            print_table: false,
        }
    }
}

/// Arguments for the profile command
#[derive(Debug, Clone)]
pub struct ProfileArgs {
    /// CSV source: http(s) URL or filesystem path
    pub source: String,

    /// Player name to summarize
    pub player: String,

    /// Scope selector value ("ALL" or a series name)
    pub scope: String,

    /// Input granularity (per-match or pre-aggregated per-series)
    pub granularity: Granularity,

    /// Numeric parsing strictness
    pub parse_mode: ParseMode,
}

impl Default for ProfileArgs {
    fn default() -> Self {
        Self {
            source: String::new(),
            player: String::new(),
            scope: "ALL".to_string(),
            granularity: Granularity::PerMatch,
            parse_mode: ParseMode::Lenient,
        }
    }
}

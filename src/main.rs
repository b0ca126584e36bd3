//! Scoretable CLI
//!
//! A leaderboard tool for spreadsheet score exports.
//! Aggregates per-player statistics, ranks them with movement
//! indicators, and produces standings reports and player profiles.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use scoretable::commands::{self, ProfileArgs, StandingsArgs};
use scoretable::loader::csv::{Granularity, ParseMode};

/// Scoretable - Leaderboard aggregation for spreadsheet score exports
#[derive(Parser, Debug)]
#[command(name = "scoretable")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute and output ranked standings
    Standings {
        /// CSV source: http(s) URL or file path
        #[arg(short, long)]
        source: String,

        /// Scope: a series name, or ALL for all series combined
        #[arg(long, default_value = "ALL")]
        scope: String,

        /// Input granularity: per-match or per-series
        #[arg(short, long, default_value = "per-match")]
        granularity: String,

        /// Fail on malformed numeric fields instead of coercing to zero
        #[arg(long)]
        strict: bool,

        /// Output path for the JSON standings report
        #[arg(short, long, default_value = "standings.json")]
        output: PathBuf,

        /// Print the standings table to stdout
        #[arg(long)]
        table: bool,
    },

    /// Summarize one player's record within a scope
    Profile {
        /// CSV source: http(s) URL or file path
        #[arg(short, long)]
        source: String,

        /// Player name
        #[arg(short, long)]
        player: String,

        /// Scope: a series name, or ALL for all series combined
        #[arg(long, default_value = "ALL")]
        scope: String,

        /// Input granularity: per-match or per-series
        #[arg(short, long, default_value = "per-match")]
        granularity: String,

        /// Fail on malformed numeric fields instead of coercing to zero
        #[arg(long)]
        strict: bool,
    },

    /// Validate a standings report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Standings {
            source,
            scope,
            granularity,
            strict,
            output,
            table,
        } => {
            let args = StandingsArgs {
                source,
                scope,
                granularity: parse_granularity(&granularity)?,
                parse_mode: parse_mode(strict),
                output_json: output,
                print_table: table,
            };

            // Validate args first
            commands::standings::validate_args(&args)?;

            commands::execute_standings(args)?;
        }

        Commands::Profile {
            source,
            player,
            scope,
            granularity,
            strict,
        } => {
            let args = ProfileArgs {
                source,
                player,
                scope,
                granularity: parse_granularity(&granularity)?,
                parse_mode: parse_mode(strict),
            };

            commands::profile::validate_args(&args)?;

            commands::execute_profile(args)?;
        }

        Commands::Validate { file } => {
            commands::validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            commands::display_schema(show);
        }

        Commands::Version => {
            commands::display_version();
        }
    }

    Ok(())
}

fn parse_granularity(value: &str) -> Result<Granularity> {
    Granularity::from_arg(value).ok_or_else(|| {
        anyhow::anyhow!("Invalid granularity '{value}' (expected per-match or per-series)")
    })
}

fn parse_mode(strict: bool) -> ParseMode {
    if strict {
        ParseMode::Strict
    } else {
        ParseMode::Lenient
    }
}

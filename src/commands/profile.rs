//! Profile command implementation.
//!
//! Loads the CSV source, summarizes one player's record within the
//! requested scope, and prints the profile. A player with no matching
//! records prints a "no data" notice instead of failing.

use crate::aggregator::Scope;
use crate::loader::csv::load_records;
use crate::output::render_profile;
use crate::profile::summarize;
use anyhow::{Context, Result};
use log::info;

use super::models::ProfileArgs;
use super::utils::load_source_text;

/// Execute the profile command
///
/// **Public** - main entry point called from main.rs
pub fn execute_profile(args: ProfileArgs) -> Result<()> {
    info!("Building profile for player: {}", args.player);

    let text = load_source_text(&args.source)?;
    let records = load_records(&text, args.granularity, args.parse_mode)
        .context("Failed to load records from CSV")?;

    let scope = Scope::from_arg(&args.scope);

    match summarize(&records, &args.player, &scope) {
        Some(summary) => {
            println!("\n{}", render_profile(&summary));
        }
        None => {
            println!(
                "No data for player '{}' in scope {}",
                args.player, scope
            );
        }
    }

    Ok(())
}

/// Validate profile arguments
///
/// **Public** - can be called before execute_profile for early validation
pub fn validate_args(args: &ProfileArgs) -> Result<()> {
    if args.source.is_empty() {
        anyhow::bail!("Source cannot be empty");
    }

    if args.player.is_empty() {
        anyhow::bail!("Player name cannot be empty");
    }

    if args.scope.is_empty() {
        anyhow::bail!("Scope cannot be empty (use ALL for all series)");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_args_valid() {
        let args = ProfileArgs {
            source: "scores.csv".to_string(),
            player: "Alice".to_string(),
            ..Default::default()
        };

        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_empty_player() {
        let args = ProfileArgs {
            source: "scores.csv".to_string(),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_execute_profile_unknown_player_is_ok() {
        use std::io::Write;

        let mut csv = tempfile::NamedTempFile::new().unwrap();
        writeln!(csv, "series,player,match_no,points,order,prev_rank").unwrap();
        writeln!(csv, "S,A,1,10,1,").unwrap();

        let args = ProfileArgs {
            source: csv.path().to_string_lossy().to_string(),
            player: "nobody".to_string(),
            ..Default::default()
        };

        // "No profile" is a no-op, not an error
        assert!(execute_profile(args).is_ok());
    }
}

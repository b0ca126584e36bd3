//! Standings command implementation.
//!
//! The standings command:
//! 1. Fetches or reads the CSV export
//! 2. Loads typed records
//! 3. Aggregates per-player totals for the scope
//! 4. Ranks the totals with movement indicators
//! 5. Writes the JSON report and optionally prints the table

use crate::aggregator::{aggregate, rank, Scope};
use crate::loader::csv::load_records;
use crate::loader::schema::to_report;
use crate::output::{render_standings, write_report};
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

use super::models::StandingsArgs;
use super::utils::load_source_text;

/// Execute the standings command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Fetch/read failures for the source
/// * Load errors in strict parse mode
/// * File write errors for the report
pub fn execute_standings(args: StandingsArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Computing standings for scope: {}", args.scope);
    info!("Source: {}", args.source);

    // Step 1: Obtain CSV text
    info!("Step 1/4: Loading CSV source...");
    let text = load_source_text(&args.source)?;

    // Step 2: Load records
    info!("Step 2/4: Loading records...");
    let records = load_records(&text, args.granularity, args.parse_mode)
        .context("Failed to load records from CSV")?;

    debug!(
        "Loaded {} records across series {:?}",
        records.len(),
        records.series_list()
    );

    // Step 3: Aggregate and rank
    info!("Step 3/4: Aggregating and ranking...");
    let scope = Scope::from_arg(&args.scope);
    let totals = aggregate(&records, &scope);
    let ranked = rank(totals);

    debug!("Top 3 rows:");
    for row in ranked.iter().take(3) {
        debug!(
            "  {}. {} - {} pts over {} matches",
            row.rank, row.player, row.points, row.matches
        );
    }

    // Step 4: Write outputs
    info!("Step 4/4: Writing output files...");
    let report = to_report(&ranked, &args.source, &scope);

    write_report(&report, &args.output_json).context("Failed to write standings report")?;

    info!("✓ Report written to: {}", args.output_json.display());

    if args.print_table {
        println!("\n{}", render_standings(&ranked, &scope));
    }

    let elapsed = start_time.elapsed();
    info!("Standings completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Validate standings arguments
///
/// **Public** - can be called before execute_standings for early validation
pub fn validate_args(args: &StandingsArgs) -> Result<()> {
    if args.source.is_empty() {
        anyhow::bail!("Source cannot be empty");
    }

    if args.scope.is_empty() {
        anyhow::bail!("Scope cannot be empty (use ALL for all series)");
    }

    if args.output_json.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    Ok(())
}

use crate::fetch::CsvClient;
use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

/// Load CSV text from a URL or filesystem path
///
/// A source starting with http:// or https:// is fetched over HTTP;
/// anything else is read from disk. A fetch failure is a hard error
/// with context rather than a silently empty board.
pub fn load_source_text(source: &str) -> Result<String> {
    if source.starts_with("http://") || source.starts_with("https://") {
        let client = CsvClient::new().context("Failed to create HTTP client")?;
        client
            .fetch_csv(source)
            .context(format!("Failed to fetch CSV from {source}"))
    } else {
        info!("Reading CSV from file: {}", source);
        std::fs::read_to_string(source).context(format!("Failed to read CSV file {source}"))
    }
}

/// Validate a standings report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    println!("✓ Valid standings report JSON");
    println!("  Version: {}", report.version);
    println!("  Source: {}", report.source);
    println!("  Scope: {}", report.scope);
    println!("  Players: {}", report.players.len());
    println!("  Max Points: {}", report.max_points);

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Scoretable Standings Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string      - Schema version (e.g., '1.0.0')");
        println!("  source: string       - CSV source (URL or file path)");
        println!("  scope: string        - 'ALL' or a series name");
        println!("  max_points: number   - Highest point total (bar scaling basis)");
        println!("  players: array       - Ranked rows, best first");
        println!("    rank: number       - 1-based display rank");
        println!("    movement: string   - 'up', 'down' or 'flat' vs previous snapshot");
        println!("    player: string     - Player name");
        println!("    points: number     - Summed points in scope");
        println!("    matches: number    - Distinct matches played in scope");
        println!("    avg: number        - points / matches (0 when no matches)");
        println!("  generated_at: string - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Scoretable v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Leaderboard aggregation and ranking for spreadsheet score exports.");
}

//! Configuration and constants for the CLI.

use std::time::Duration;

/// Default timeout for HTTP requests to the spreadsheet export
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Current standings report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Scope selector value meaning "all series combined"
pub const SCOPE_ALL: &str = "ALL";

/// Display label for the all-series scope
pub const SCOPE_ALL_LABEL: &str = "All-Time";

/// Field delimiter for the spreadsheet export.
/// No quoting or escaping of embedded delimiters is supported.
pub const CSV_DELIMITER: char = ',';

// Column counts per granularity
// per-match:  series,player,match_no,points,order,prev_rank
// per-series: series,player,points,matches,order
pub const MATCH_COLUMN_COUNT: usize = 6;
pub const SERIES_COLUMN_COUNT: usize = 5;

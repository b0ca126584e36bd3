//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod profile;
pub mod standings;
pub mod utils;

// Re-export main command functions
pub use models::{ProfileArgs, StandingsArgs};
pub use profile::execute_profile;
pub use standings::execute_standings;
pub use utils::{display_schema, display_version, load_source_text, validate_report_file};

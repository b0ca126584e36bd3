//! Output writers: JSON standings reports and text tables.

pub mod json;
pub mod table;

pub use json::{read_report, write_report};
pub use table::{render_profile, render_standings};

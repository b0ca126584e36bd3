//! Fetching the CSV export over HTTP.

pub mod client;

pub use client::CsvClient;

//! HTTP client for fetching the spreadsheet CSV export.

use crate::utils::config::DEFAULT_HTTP_TIMEOUT;
use crate::utils::error::FetchError;
use log::{debug, info};
use reqwest::blocking::Client;

/// HTTP client for fetching CSV text from a published spreadsheet
pub struct CsvClient {
    client: Client,
}

impl CsvClient {
    /// Create a new client with the default timeout
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(FetchError::RequestFailed)?;

        Ok(Self { client })
    }

    /// Fetch CSV text from a URL
    ///
    /// A `t=<unix-millis>` query parameter is appended so the
    /// spreadsheet CDN cannot serve a stale cached export.
    pub fn fetch_csv(&self, url: &str) -> Result<String, FetchError> {
        let busted = cache_busted(url);

        info!("Fetching CSV from: {}", url);
        debug!("Request URL: {}", busted);

        let response = self
            .client
            .get(&busted)
            .send()
            .map_err(FetchError::RequestFailed)?;

        if !response.status().is_success() {
            return Err(FetchError::BadStatus(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().unwrap_or_default()
            )));
        }

        let text = response.text().map_err(FetchError::RequestFailed)?;
        debug!("Fetched {} bytes of CSV", text.len());

        Ok(text)
    }
}

/// Append a timestamp query parameter to defeat CDN caching
fn cache_busted(url: &str) -> String {
    let now = chrono::Utc::now().timestamp_millis();
    if url.contains('?') {
        format!("{url}&t={now}")
    } else {
        format!("{url}?t={now}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_busted_appends_with_ampersand() {
        let busted = cache_busted("https://example.com/export?gid=0");
        assert!(busted.starts_with("https://example.com/export?gid=0&t="));
    }

    #[test]
    fn test_cache_busted_appends_with_question_mark() {
        let busted = cache_busted("https://example.com/export");
        assert!(busted.starts_with("https://example.com/export?t="));
    }
}

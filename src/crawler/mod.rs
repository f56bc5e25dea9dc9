//! Crawler module for page fetching and record extraction
//!
//! This module contains the core walking logic:
//! - HTTP fetching, one GET per page
//! - Quote extraction and next-page lookup
//! - The pagination loop tying them together

mod extractor;
mod fetcher;
mod walker;

pub use extractor::{extract_quotes, next_page_href, Selectors};
pub use fetcher::{build_http_client, fetch_page, FetchedPage, StatusPolicy};
pub use walker::{WalkOutcome, Walker};

use crate::config::Config;
use crate::ScrapeError;

/// Walks every page described by `config` and returns the collected quotes
///
/// # Returns
///
/// * `Ok(WalkOutcome)` - All pages were fetched and extracted
/// * `Err(ScrapeError)` - The first fetch, extraction, or URL failure
pub async fn crawl(config: &Config) -> Result<WalkOutcome, ScrapeError> {
    Walker::from_config(config)?.walk().await
}

//! Quotewalk: a paginated quote scraper
//!
//! This crate walks the "next page" links of a quote listing site, extracts a
//! [`Quote`] from every record container it finds, and writes the collected
//! records to a CSV file once the walk has finished.

pub mod config;
pub mod crawler;
pub mod output;
pub mod record;
pub mod state;

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for Quotewalk operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Unexpected HTTP status {status} for {url}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("Extraction failed for {url}: {source}")]
    Extract { url: String, source: ExtractError },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid {name} selector: '{selector}'")]
    InvalidSelector { name: &'static str, selector: String },
}

/// Errors raised while pulling records out of a parsed page
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("record {index} has no {field} element")]
    MissingField { field: &'static str, index: usize },

    #[error("next-page anchor has no href attribute")]
    MissingHref,
}

/// Errors raised by the CSV writer
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for Quotewalk operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

// Re-export commonly used types
pub use config::Config;
pub use record::Quote;
pub use state::WalkState;

/// Default file written when no output path is given
pub const DEFAULT_OUTPUT_PATH: &str = "quotes.csv";

/// What a completed run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of records written to the output file
    pub records: usize,
    /// Number of pages fetched during the walk
    pub pages: usize,
    /// Where the CSV file was written
    pub output_path: PathBuf,
}

/// Runs a full walk with the default configuration and writes to `output_path`
///
/// # Example
///
/// ```no_run
/// # async fn example() -> quotewalk::Result<()> {
/// let summary = quotewalk::run(std::path::Path::new("quotes.csv")).await?;
/// println!("{} quotes", summary.records);
/// # Ok(())
/// # }
/// ```
pub async fn run(output_path: &Path) -> Result<RunSummary> {
    let mut config = Config::default();
    config.output.path = output_path.to_path_buf();
    run_with_config(&config).await
}

/// Runs a full walk described by `config`
///
/// Nothing is written until every page has been fetched and extracted, so a
/// failed run leaves a previous output file untouched.
pub async fn run_with_config(config: &Config) -> Result<RunSummary> {
    let outcome = crawler::crawl(config).await?;

    let output_path = config.output.path.clone();
    output::write_quotes_csv(&output_path, &outcome.quotes)?;

    tracing::info!(
        "Wrote {} quotes from {} pages to {}",
        outcome.quotes.len(),
        outcome.pages_fetched,
        output_path.display()
    );

    Ok(RunSummary {
        records: outcome.quotes.len(),
        pages: outcome.pages_fetched,
        output_path,
    })
}

use serde::Deserialize;
use std::path::PathBuf;

/// Main configuration structure for Quotewalk
///
/// Every section is optional; an empty file yields [`Config::default`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub selectors: SelectorConfig,
    pub http: HttpConfig,
    pub output: OutputConfig,
}

/// Site being walked
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Start page, also the base that relative next links resolve against
    #[serde(rename = "base-url")]
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://quotes.toscrape.com/".to_string(),
        }
    }
}

/// CSS selectors describing the page structure
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Record container
    pub quote: String,

    /// Text element inside a container
    pub text: String,

    /// Author element inside a container
    pub author: String,

    /// Tag elements inside a container
    pub tag: String,

    /// Next-page anchor, looked up in the whole document
    pub next: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            quote: ".quote".to_string(),
            text: ".text".to_string(),
            author: ".author".to_string(),
            tag: ".tag".to_string(),
            next: "li.next > a".to_string(),
        }
    }
}

/// HTTP client configuration
///
/// Unset values leave the client library's defaults in place.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    #[serde(rename = "user-agent")]
    pub user_agent: Option<String>,

    /// Whole-request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: Option<u64>,

    /// Fail on non-success status codes instead of parsing the body anyway
    #[serde(rename = "strict-status")]
    pub strict_status: bool,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path to the CSV file
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(crate::DEFAULT_OUTPUT_PATH),
        }
    }
}

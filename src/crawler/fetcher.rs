//! HTTP fetcher implementation
//!
//! One GET per page, no retries. Whether a non-success status is an error is
//! decided by the [`StatusPolicy`] the caller passes in.

use crate::config::HttpConfig;
use crate::ScrapeError;
use reqwest::{redirect::Policy, Client};
use std::time::Duration;
use url::Url;

/// How to treat responses with a non-success status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPolicy {
    /// Return the body of every response and let extraction decide
    #[default]
    Lenient,

    /// Turn any non-2xx status into [`ScrapeError::UnexpectedStatus`]
    Strict,
}

impl StatusPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Lenient
        }
    }
}

/// A fetched page body with the response metadata that came with it
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// HTTP status code
    pub status_code: u16,
    /// Page body content
    pub body: String,
}

/// Builds the HTTP client used for a whole walk
///
/// Redirects are never followed: a 3xx response is returned like any other,
/// so each page costs exactly one GET. Only settings present in `config` are
/// applied on top of that; everything else is the reqwest default.
///
/// # Example
///
/// ```no_run
/// use quotewalk::config::HttpConfig;
/// use quotewalk::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .redirect(Policy::none())
        .gzip(true)
        .brotli(true);

    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent.clone());
    }

    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder.build()
}

/// Fetches a single page and returns its body as text
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - Absolute URL of the page
/// * `policy` - How to treat non-success status codes
///
/// # Returns
///
/// * `Ok(FetchedPage)` - The response body (an error page too, under `Lenient`)
/// * `Err(ScrapeError::Http)` - Transport failure
/// * `Err(ScrapeError::UnexpectedStatus)` - Non-success status under `Strict`
pub async fn fetch_page(
    client: &Client,
    url: &Url,
    policy: StatusPolicy,
) -> Result<FetchedPage, ScrapeError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|source| ScrapeError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();

    if !status.is_success() {
        match policy {
            StatusPolicy::Strict => {
                return Err(ScrapeError::UnexpectedStatus {
                    url: url.to_string(),
                    status: status.as_u16(),
                });
            }
            StatusPolicy::Lenient => {
                tracing::warn!("{} returned HTTP {}, parsing body anyway", url, status);
            }
        }
    }

    let body = response.text().await.map_err(|source| ScrapeError::Http {
        url: url.to_string(),
        source,
    })?;

    tracing::debug!("Fetched {} bytes from {} (HTTP {})", body.len(), url, status);

    Ok(FetchedPage {
        status_code: status.as_u16(),
        body,
    })
}

//! Pagination walker - the fetch, extract, follow loop
//!
//! Pages are fetched strictly one after another since each next URL comes
//! from the page before it. Records only leave the walker when the last page
//! has been processed; any failure drops everything collected so far.

use crate::config::Config;
use crate::crawler::extractor::{extract_quotes, next_page_href, Selectors};
use crate::crawler::fetcher::{build_http_client, fetch_page, StatusPolicy};
use crate::record::Quote;
use crate::state::WalkState;
use crate::ScrapeError;
use reqwest::Client;
use scraper::Html;
use tracing::{Instrument, Span};
use url::Url;

/// Records gathered by a completed walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkOutcome {
    /// Every quote, page by page, in document order
    pub quotes: Vec<Quote>,
    /// Number of pages fetched
    pub pages_fetched: usize,
}

/// Follows next-page links from a base URL and collects quotes
pub struct Walker {
    client: Client,
    base_url: Url,
    selectors: Selectors,
    policy: StatusPolicy,
    span: Span,
}

impl Walker {
    /// Creates a walker starting at `base_url`
    ///
    /// The walker owns a `walk` span tagged with the base URL; every event it
    /// logs is emitted inside that span.
    pub fn new(client: Client, base_url: Url, selectors: Selectors, policy: StatusPolicy) -> Self {
        let span = tracing::info_span!("walk", base_url = %base_url);
        Self {
            client,
            base_url,
            selectors,
            policy,
            span,
        }
    }

    /// Builds a walker from a configuration, validating it first
    pub fn from_config(config: &Config) -> Result<Self, ScrapeError> {
        crate::config::validate(config)?;

        let base_url = Url::parse(&config.site.base_url)?;
        let selectors = Selectors::new(&config.selectors)?;
        let client = build_http_client(&config.http).map_err(|source| ScrapeError::Http {
            url: base_url.to_string(),
            source,
        })?;

        Ok(Self::new(
            client,
            base_url,
            selectors,
            StatusPolicy::from_strict(config.http.strict_status),
        ))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves a next-page `href` against the base URL
    ///
    /// Resolution is always relative to the base URL, never to the page the
    /// link was found on.
    pub fn resolve_next(&self, href: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(href)
    }

    /// Walks every page until one has no next-page anchor
    ///
    /// There is no page limit and no cycle detection: a site whose next links
    /// loop will be walked forever.
    pub async fn walk(&self) -> Result<WalkOutcome, ScrapeError> {
        self.walk_pages().instrument(self.span.clone()).await
    }

    async fn walk_pages(&self) -> Result<WalkOutcome, ScrapeError> {
        let mut quotes = Vec::new();
        let mut pages_fetched = 0;
        let mut state = WalkState::start(self.base_url().clone());

        while let Some(url) = state.current_url().cloned() {
            tracing::info!("Start parsing {}", url);

            let page = fetch_page(&self.client, &url, self.policy).await?;
            pages_fetched += 1;

            let (page_quotes, next) = self.process_page(&url, &page.body)?;
            tracing::debug!(
                "Extracted {} quotes from {} (HTTP {})",
                page_quotes.len(),
                url,
                page.status_code
            );
            quotes.extend(page_quotes);

            state = state.advance(next);
            tracing::debug!("Walk state: {}", state);
        }

        tracing::info!(
            "Pagination from {} finished after {} pages with {} quotes",
            self.base_url(),
            pages_fetched,
            quotes.len()
        );

        Ok(WalkOutcome {
            quotes,
            pages_fetched,
        })
    }

    /// Parses one page body into its quotes and the resolved next URL
    ///
    /// The parsed document never outlives this call, so it is not held
    /// across an await point.
    fn process_page(&self, url: &Url, body: &str) -> Result<(Vec<Quote>, Option<Url>), ScrapeError> {
        let document = Html::parse_document(body);
        let extract_err = |source| ScrapeError::Extract {
            url: url.to_string(),
            source,
        };

        let quotes = extract_quotes(&document, &self.selectors).map_err(extract_err)?;
        let next = match next_page_href(&document, &self.selectors).map_err(extract_err)? {
            Some(href) => Some(self.resolve_next(&href)?),
            None => None,
        };

        Ok((quotes, next))
    }
}

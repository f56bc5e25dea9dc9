//! Record extraction from parsed listing pages
//!
//! This module turns a parsed page into [`Quote`] records and locates the
//! next-page anchor. Selectors are compiled once per walk.

use crate::config::SelectorConfig;
use crate::record::Quote;
use crate::{ConfigError, ExtractError};
use scraper::{ElementRef, Html, Selector};

/// Compiled CSS selectors describing the page structure
#[derive(Debug, Clone)]
pub struct Selectors {
    quote: Selector,
    text: Selector,
    author: Selector,
    tag: Selector,
    next: Selector,
}

impl Selectors {
    /// Compiles every selector in `config`
    ///
    /// Fails with [`ConfigError::InvalidSelector`] naming the first selector
    /// that does not parse.
    pub fn new(config: &SelectorConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            quote: compile("quote", &config.quote)?,
            text: compile("text", &config.text)?,
            author: compile("author", &config.author)?,
            tag: compile("tag", &config.tag)?,
            next: compile("next", &config.next)?,
        })
    }
}

fn compile(name: &'static str, selector: &str) -> Result<Selector, ConfigError> {
    Selector::parse(selector).map_err(|_| ConfigError::InvalidSelector {
        name,
        selector: selector.to_string(),
    })
}

/// Extracts every quote on a page, in document order
///
/// # Errors
///
/// A container without a text or author element fails the whole page with
/// [`ExtractError::MissingField`]. Nothing from the page is returned.
///
/// # Example
///
/// ```
/// use quotewalk::config::SelectorConfig;
/// use quotewalk::crawler::{extract_quotes, Selectors};
/// use scraper::Html;
///
/// let html = r#"<div class="quote"><span class="text">Hi</span>
///     <small class="author">Ann</small><a class="tag">greeting</a></div>"#;
/// let document = Html::parse_document(html);
/// let selectors = Selectors::new(&SelectorConfig::default()).unwrap();
/// let quotes = extract_quotes(&document, &selectors).unwrap();
/// assert_eq!(quotes[0].author(), "Ann");
/// ```
pub fn extract_quotes(document: &Html, selectors: &Selectors) -> Result<Vec<Quote>, ExtractError> {
    document
        .select(&selectors.quote)
        .enumerate()
        .map(|(index, container)| extract_quote(container, index, selectors))
        .collect()
}

/// Builds one quote from its container element
fn extract_quote(
    container: ElementRef<'_>,
    index: usize,
    selectors: &Selectors,
) -> Result<Quote, ExtractError> {
    let text = first_text(container, &selectors.text).ok_or(ExtractError::MissingField {
        field: "text",
        index,
    })?;
    let author = first_text(container, &selectors.author).ok_or(ExtractError::MissingField {
        field: "author",
        index,
    })?;
    let tags = container
        .select(&selectors.tag)
        .map(|element| element.text().collect::<String>())
        .collect();

    Ok(Quote::new(text, author, tags))
}

/// All descendant text of the first match, untrimmed
fn first_text(container: ElementRef<'_>, selector: &Selector) -> Option<String> {
    container
        .select(selector)
        .next()
        .map(|element| element.text().collect())
}

/// Returns the `href` of the first next-page anchor, if the page has one
///
/// # Errors
///
/// An anchor that matches the next selector but carries no `href` is
/// [`ExtractError::MissingHref`].
pub fn next_page_href(document: &Html, selectors: &Selectors) -> Result<Option<String>, ExtractError> {
    match document.select(&selectors.next).next() {
        Some(anchor) => anchor
            .value()
            .attr("href")
            .map(|href| Some(href.to_string()))
            .ok_or(ExtractError::MissingHref),
        None => Ok(None),
    }
}

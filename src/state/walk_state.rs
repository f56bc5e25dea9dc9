/// Walk state definitions for tracking pagination progress
///
/// A walk is either about to fetch a page or finished. There is no error
/// state: a failed fetch or extraction ends the walk by returning `Err`.
use std::fmt;
use url::Url;

/// Represents the current state of a pagination walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkState {
    /// The next page to fetch
    Fetching(Url),

    /// No next-page anchor was found on the last page
    Done,
}

impl WalkState {
    /// Initial state: fetching the base URL
    pub fn start(base_url: Url) -> Self {
        Self::Fetching(base_url)
    }

    /// The URL currently being fetched, if any
    pub fn current_url(&self) -> Option<&Url> {
        match self {
            Self::Fetching(url) => Some(url),
            Self::Done => None,
        }
    }

    /// Moves to the next state given the resolved next-page link
    ///
    /// `Done` is terminal and stays `Done` whatever link is passed.
    pub fn advance(self, next: Option<Url>) -> Self {
        match (self, next) {
            (Self::Fetching(_), Some(url)) => Self::Fetching(url),
            (Self::Fetching(_), None) => Self::Done,
            (Self::Done, _) => Self::Done,
        }
    }
}

impl fmt::Display for WalkState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetching(url) => write!(f, "fetching {}", url),
            Self::Done => write!(f, "done"),
        }
    }
}

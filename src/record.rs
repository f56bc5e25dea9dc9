/// The record extracted from each quote container
///
/// Fields are private so a `Quote` cannot change after the extractor builds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    text: String,
    author: String,
    tags: Vec<String>,
}

impl Quote {
    /// Column names, in output order
    pub const FIELDS: [&'static str; 3] = ["text", "author", "tags"];

    pub fn new(text: impl Into<String>, author: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            tags,
        }
    }

    /// The quoted text, exactly as it appeared in the page
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Tag labels in page order, duplicates included
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

//! Field set for a post fixture.

/// Publication date written when a fixture does not set one.
pub const DEFAULT_PUBLISHED_AT: &str = "05/08/2000";

/// The recognized fields of a post fixture.
///
/// Every field is optional. `title` and `body` default to empty text;
/// `published_at` falls back to [`DEFAULT_PUBLISHED_AT`] only when it was
/// never set, so an explicitly empty date is written as-is.
///
/// # Examples
///
/// ```
/// use post_fixtures::domain::PostFields;
///
/// let fields = PostFields::new().title("Hello").body("World");
/// assert_eq!(fields.title_or_default(), "Hello");
/// assert_eq!(fields.published_at_or_default(), "05/08/2000");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFields {
    title: Option<String>,
    published_at: Option<String>,
    body: Option<String>,
}

impl PostFields {
    /// Creates an empty field set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the publication date, written verbatim.
    pub fn published_at(mut self, published_at: impl Into<String>) -> Self {
        self.published_at = Some(published_at.into());
        self
    }

    /// Sets the body text.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Returns the title if one was set.
    pub fn get_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the publication date if one was set.
    pub fn get_published_at(&self) -> Option<&str> {
        self.published_at.as_deref()
    }

    /// Returns the body if one was set.
    pub fn get_body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn published_at_or_default(&self) -> &str {
        self.published_at.as_deref().unwrap_or(DEFAULT_PUBLISHED_AT)
    }

    pub fn body_or_default(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }
}

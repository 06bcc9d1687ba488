//! Builder for test posts.

use post_fixtures::PostFields;

/// A post fixture to be written into a `TestEnv`.
///
/// Pairs a file name with the fields passed to the factory. Unset fields
/// keep the factory defaults.
#[derive(Debug, Clone)]
pub struct TestPost {
    filename: String,
    fields: PostFields,
}

impl TestPost {
    /// Creates a test post with the given file name and no fields set.
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            fields: PostFields::new(),
        }
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.fields = self.fields.title(title);
        self
    }

    /// Sets the publication date.
    pub fn published_at(mut self, published_at: impl Into<String>) -> Self {
        self.fields = self.fields.published_at(published_at);
        self
    }

    /// Sets the body content.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.fields = self.fields.body(body);
        self
    }

    /// Returns the file name.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Returns the fields.
    pub fn fields(&self) -> &PostFields {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_new_has_no_fields() {
        let post = TestPost::new("hello.txt");
        assert_eq!(post.filename(), "hello.txt");
        assert_eq!(post.fields(), &PostFields::new());
    }

    #[test]
    fn test_post_builder_fluent() {
        let post = TestPost::new("hello.txt")
            .title("Hello")
            .published_at("01/01/2020")
            .body("World");

        assert_eq!(post.fields().get_title(), Some("Hello"));
        assert_eq!(post.fields().get_published_at(), Some("01/01/2020"));
        assert_eq!(post.fields().get_body(), Some("World"));
    }
}

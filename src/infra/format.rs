//! Reader and writer for the post fixture text format.

use crate::domain::{PostContent, PostFields};
use thiserror::Error;

const TITLE_MARKER: &str = ":title:";
const PUBLISHED_AT_MARKER: &str = ":published_at:";

/// Errors during post fixture parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing ':title:' line at start of post")]
    MissingTitle,

    #[error("missing ':published_at:' line after title")]
    MissingPublishedAt,
}

/// Serializes post fields to the fixture format.
///
/// # Format
/// ```text
/// :title: Hello
/// :published_at: 05/08/2000
///
///
/// World
/// ```
///
/// The body is terminated by a single newline unless it already ends with
/// one, so an empty body still produces a trailing empty line.
pub fn serialize(fields: &PostFields) -> String {
    let body = fields.body_or_default();
    let mut out = format!(
        "{} {}\n{} {}\n\n\n",
        TITLE_MARKER,
        fields.title_or_default(),
        PUBLISHED_AT_MARKER,
        fields.published_at_or_default(),
    );
    out.push_str(body);
    if !body.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// Parses a post fixture back into its fields.
///
/// The first line must carry the title marker and the second the
/// published_at marker. Up to two blank separator lines are consumed, and
/// one trailing newline is dropped from the body. CRLF line endings are
/// accepted.
///
/// # Errors
///
/// Returns `ParseError::MissingTitle` or `ParseError::MissingPublishedAt`
/// when a header line is absent or out of order.
pub fn parse(content: &str) -> Result<PostContent, ParseError> {
    let content = content.strip_prefix('\u{FEFF}').unwrap_or(content);

    let (line, rest) = split_line(content);
    let title = marker_value(line, TITLE_MARKER).ok_or(ParseError::MissingTitle)?;

    let (line, mut rest) = split_line(rest);
    let published_at =
        marker_value(line, PUBLISHED_AT_MARKER).ok_or(ParseError::MissingPublishedAt)?;

    for _ in 0..2 {
        let (line, after) = split_line(rest);
        if !line.is_empty() || rest.is_empty() {
            break;
        }
        rest = after;
    }

    let body = rest
        .strip_suffix("\r\n")
        .or_else(|| rest.strip_suffix('\n'))
        .unwrap_or(rest);

    Ok(PostContent {
        title: title.to_string(),
        published_at: published_at.to_string(),
        body: body.to_string(),
    })
}

/// Splits off the first line, returning it without its line ending along
/// with everything after the line ending.
fn split_line(s: &str) -> (&str, &str) {
    match s.find('\n') {
        Some(pos) => {
            let line = &s[..pos];
            (line.strip_suffix('\r').unwrap_or(line), &s[pos + 1..])
        }
        None => (s, ""),
    }
}

/// Extracts the value after `marker`, dropping the single separating space.
fn marker_value<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    let value = line.strip_prefix(marker)?;
    Some(value.strip_prefix(' ').unwrap_or(value))
}

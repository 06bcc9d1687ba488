//! Post handle and parsed post contents.

use crate::infra::{FsError, read_post};
use chrono::NaiveDate;
use std::fmt;
use std::path::{Path, PathBuf};

/// Date layout used by the `published_at` field (`MM/DD/YYYY`).
pub const PUBLISHED_AT_FORMAT: &str = "%m/%d/%Y";

/// Handle to a post fixture file on disk.
///
/// A `Post` only records where the fixture lives. Contents are read on
/// demand with [`Post::read`], so the handle stays valid across rewrites
/// of the same file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Post {
    path: PathBuf,
}

impl Post {
    /// Wraps the fixture at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the final path component, if it is valid UTF-8.
    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|name| name.to_str())
    }

    /// Reads and parses the fixture file.
    ///
    /// # Errors
    ///
    /// Returns `FsError::NotFound` if the file is gone, or `FsError::Parse`
    /// if it is not in the post fixture format.
    pub fn read(&self) -> Result<PostContent, FsError> {
        read_post(&self.path)
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// The fields read back from a post fixture file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent {
    pub title: String,
    pub published_at: String,
    pub body: String,
}

impl PostContent {
    /// Parses `published_at` as a `MM/DD/YYYY` calendar date.
    ///
    /// Returns `None` when the stored value is not a valid date; the file
    /// format itself does not constrain it.
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.published_at.trim(), PUBLISHED_AT_FORMAT).ok()
    }
}

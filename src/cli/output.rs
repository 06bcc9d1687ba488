//! Output format types for CLI commands.

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Serialize;

use crate::domain::PostContent;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
    /// Plain file paths, one per line
    Paths,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A post fixture with its parsed fields.
#[derive(Debug, Serialize)]
pub struct PostView {
    pub path: String,
    pub title: String,
    pub published_at: String,
    pub published_on: Option<NaiveDate>,
    pub body: String,
}

impl PostView {
    pub fn new(path: String, content: PostContent) -> Self {
        let published_on = content.published_on();
        Self {
            path,
            title: content.title,
            published_at: content.published_at,
            published_on,
            body: content.body,
        }
    }
}

/// A single post fixture in listing output.
#[derive(Debug, Serialize)]
pub struct PostListing {
    pub name: String,
    pub path: String,
    pub title: String,
    pub published_at: String,
}

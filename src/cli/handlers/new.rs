//! New post command handler.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use super::print_json;
use crate::cli::NewArgs;
use crate::cli::output::OutputFormat;
use crate::domain::PostFields;
use crate::factory::PostFactory;

/// JSON shape for a created fixture.
#[derive(Debug, Serialize)]
struct CreatedPost<'a> {
    path: String,
    title: &'a str,
    published_at: &'a str,
    body: &'a str,
}

/// Builds the post fields from command arguments.
///
/// Only flags that were given are set, so an omitted `--published-at`
/// still picks up the default date.
pub fn fields_from_args(args: &NewArgs) -> Result<PostFields> {
    let mut fields = PostFields::new();
    if let Some(title) = &args.title {
        fields = fields.title(title);
    }
    if let Some(published_at) = &args.published_at {
        fields = fields.published_at(published_at);
    }
    if let Some(body) = &args.body {
        fields = fields.body(body);
    } else if let Some(body_file) = &args.body_file {
        let body = std::fs::read_to_string(body_file)
            .with_context(|| format!("failed to read body file: {}", body_file.display()))?;
        fields = fields.body(body);
    }
    Ok(fields)
}

pub fn handle_new(args: &NewArgs, posts_dir: &Path) -> Result<()> {
    let fields = fields_from_args(args)?;

    let post = PostFactory::new(posts_dir)
        .create(&args.filename, &fields)
        .with_context(|| format!("failed to create post fixture '{}'", args.filename))?;

    match args.format {
        OutputFormat::Json => print_json(CreatedPost {
            path: post.path().display().to_string(),
            title: fields.title_or_default(),
            published_at: fields.published_at_or_default(),
            body: fields.body_or_default(),
        }),
        OutputFormat::Paths => {
            println!("{}", post.path().display());
            Ok(())
        }
        OutputFormat::Human => {
            println!("Created: {}", post.path().display());
            Ok(())
        }
    }
}

//! List command handler.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::warn;

use super::print_json;
use crate::cli::ListArgs;
use crate::cli::output::{OutputFormat, PostListing};
use crate::infra::{read_post, scan_posts_directory};

/// Reads every fixture in the posts directory.
///
/// Files that fail to parse are logged and left out.
pub fn collect_listings(posts_dir: &Path) -> Result<Vec<PostListing>> {
    let paths = scan_posts_directory(posts_dir)
        .with_context(|| format!("failed to list posts in {}", posts_dir.display()))?;

    let mut listings = Vec::with_capacity(paths.len());
    for path in paths {
        match read_post(&path) {
            Ok(content) => listings.push(PostListing {
                name: path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                path: path.display().to_string(),
                title: content.title,
                published_at: content.published_at,
            }),
            Err(e) => warn!("skipping {}: {}", path.display(), e),
        }
    }
    Ok(listings)
}

/// Renders listings as aligned `name  published_at  title` rows.
pub fn render_listings(listings: &[PostListing]) -> String {
    let width = listings.iter().map(|l| l.name.chars().count()).max().unwrap_or(0);
    listings
        .iter()
        .map(|l| format!("{:<width$}  {}  {}\n", l.name, l.published_at, l.title))
        .collect()
}

pub fn handle_list(args: &ListArgs, posts_dir: &Path) -> Result<()> {
    let listings = collect_listings(posts_dir)?;

    match args.format {
        OutputFormat::Json => print_json(listings),
        OutputFormat::Paths => {
            for listing in &listings {
                println!("{}", listing.path);
            }
            Ok(())
        }
        OutputFormat::Human => {
            if listings.is_empty() {
                println!("No posts found.");
            } else {
                print!("{}", render_listings(&listings));
            }
            Ok(())
        }
    }
}

//! Show post command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::print_json;
use crate::cli::ShowArgs;
use crate::cli::output::{OutputFormat, PostView};
use crate::domain::{Post, PostContent};

/// Renders post fields for terminal display.
pub fn render_post(content: &PostContent) -> String {
    let mut out = format!(
        "Title: {}\nPublished: {}\n",
        content.title, content.published_at
    );
    if !content.body.is_empty() {
        out.push('\n');
        out.push_str(&content.body);
        out.push('\n');
    }
    out
}

pub fn handle_show(args: &ShowArgs, posts_dir: &Path) -> Result<()> {
    let post = Post::new(posts_dir.join(&args.filename));
    let content = post
        .read()
        .with_context(|| format!("failed to read post fixture '{}'", args.filename))?;

    match args.format {
        OutputFormat::Json => print_json(PostView::new(post.to_string(), content)),
        OutputFormat::Paths => {
            println!("{}", post);
            Ok(())
        }
        OutputFormat::Human => {
            print!("{}", render_post(&content));
            Ok(())
        }
    }
}

//! Command handlers for the CLI.

mod completions;
mod list;
mod new;
mod show;

use anyhow::{Context, Result};
use serde::Serialize;

pub use completions::handle_completions;
pub use list::{collect_listings, handle_list, render_listings};
pub use new::{fields_from_args, handle_new};
pub use show::{handle_show, render_post};

use super::output::Output;

/// Prints `data` as pretty JSON wrapped in an `Output` envelope.
pub(crate) fn print_json<T: Serialize>(data: T) -> Result<()> {
    let json = serde_json::to_string_pretty(&Output::new(data))
        .with_context(|| "failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod logging;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// post-fixtures - write post fixture files for tests
#[derive(Parser, Debug)]
#[command(name = "post-fixtures", version, about, long_about = None)]
pub struct Cli {
    /// Posts directory (overrides $posts_path and config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a new post fixture
    New(NewArgs),

    /// Show a post fixture's fields
    Show(ShowArgs),

    /// List post fixtures in the posts directory
    #[command(name = "ls")]
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `new` command
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// File name of the fixture inside the posts directory
    pub filename: String,

    /// Post title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Publication date, written verbatim (default: 05/08/2000)
    #[arg(short, long)]
    pub published_at: Option<String>,

    /// Post body
    #[arg(short, long, conflicts_with = "body_file")]
    pub body: Option<String>,

    /// Read the post body from a file
    #[arg(long)]
    pub body_file: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// File name of the fixture inside the posts directory
    pub filename: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}

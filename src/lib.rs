//! post-fixtures - post fixture files for tests

pub mod cli;
pub mod domain;
pub mod factory;
pub mod infra;

pub use domain::{Post, PostContent, PostFields};
pub use factory::{ConfigError, FactoryError, POSTS_PATH_VAR, PostFactory, create};

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_completions, handle_list, handle_new, handle_show},
    logging::init_tracing,
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    if let Command::Completions(args) = &cli.command {
        return handle_completions(args);
    }

    let config = Config::load()?;
    let posts_dir = config.posts_dir(cli.dir.as_ref(), std::env::var_os(POSTS_PATH_VAR))?;
    tracing::debug!(posts_dir = %posts_dir.display(), "resolved posts directory");

    match &cli.command {
        Command::New(args) => handle_new(args, &posts_dir),
        Command::Show(args) => handle_show(args, &posts_dir),
        Command::List(args) => handle_list(args, &posts_dir),
        Command::Completions(args) => handle_completions(args),
    }
}

//! Post fixture factory.
//!
//! Writes a post fixture file into a posts directory and hands back a
//! [`Post`] over it. The directory is an explicit parameter; reading it from
//! the `posts_path` environment variable is a separate constructor.

use crate::domain::{Post, PostFields};
use crate::infra::{FsError, write_post};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming the posts directory.
pub const POSTS_PATH_VAR: &str = "posts_path";

/// Errors resolving the posts directory from configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("posts directory is not configured: set $posts_path or pass --dir")]
    MissingPostsPath,
}

/// Errors creating a post fixture.
#[derive(Debug, Error)]
pub enum FactoryError {
    #[error("posts directory does not exist: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fs(FsError),
}

impl From<FsError> for FactoryError {
    fn from(error: FsError) -> Self {
        match error {
            FsError::ParentNotFound { path } => FactoryError::DirectoryNotFound { path },
            other => FactoryError::Fs(other),
        }
    }
}

/// Creates post fixture files in a single posts directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFactory {
    posts_dir: PathBuf,
}

impl PostFactory {
    /// Creates a factory writing into `posts_dir`.
    ///
    /// The directory is not checked here; `create` fails if it is missing.
    pub fn new(posts_dir: impl Into<PathBuf>) -> Self {
        Self {
            posts_dir: posts_dir.into(),
        }
    }

    /// Creates a factory from the `posts_path` environment variable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingPostsPath` if the variable is unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_value(std::env::var_os(POSTS_PATH_VAR))
    }

    /// Creates a factory from an already-read `posts_path` value.
    pub fn from_env_value(value: Option<OsString>) -> Result<Self, ConfigError> {
        match value {
            Some(dir) if !dir.is_empty() => Ok(Self::new(dir)),
            _ => Err(ConfigError::MissingPostsPath),
        }
    }

    pub fn posts_dir(&self) -> &Path {
        &self.posts_dir
    }

    /// Returns the path a fixture named `filename` is written to.
    pub fn target_path(&self, filename: &str) -> PathBuf {
        self.posts_dir.join(filename)
    }

    /// Writes a post fixture named `filename` and returns a handle to it.
    ///
    /// Any existing file at the target path is replaced. The posts
    /// directory itself is never created.
    ///
    /// # Errors
    ///
    /// Returns `FactoryError::DirectoryNotFound` if the posts directory is
    /// missing, or `FactoryError::Fs` for any other write failure.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use post_fixtures::PostFactory;
    /// use post_fixtures::domain::PostFields;
    ///
    /// let factory = PostFactory::new("/tmp/fixtures");
    /// let post = factory
    ///     .create("hello.txt", &PostFields::new().title("Hello").body("World"))
    ///     .unwrap();
    /// assert!(post.path().ends_with("hello.txt"));
    /// ```
    pub fn create(&self, filename: &str, fields: &PostFields) -> Result<Post, FactoryError> {
        let path = self.target_path(filename);
        debug!(path = %path.display(), "writing post fixture");

        write_post(&path, fields)?;

        info!(path = %path.display(), "created post fixture");
        Ok(Post::new(path))
    }
}

/// Writes a post fixture into the directory named by `posts_path`.
///
/// The variable is read on every call.
///
/// # Errors
///
/// Returns `FactoryError::Config` if `posts_path` is unset, otherwise the
/// same errors as [`PostFactory::create`].
pub fn create(filename: &str, fields: &PostFields) -> Result<Post, FactoryError> {
    PostFactory::from_env()?.create(filename, fields)
}

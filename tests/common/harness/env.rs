//! Isolated test environment with temp directory.

use super::{FixtureCommand, TestPost};
use post_fixtures::{Post, PostFactory};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary posts directory.
///
/// The temp directory holds `posts/` and an empty `config/` home used by
/// CLI runs, and is cleaned up on drop.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the posts directory
    posts_dir: PathBuf,
    /// Config home handed to the binary
    config_home: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let posts_dir = temp_dir.path().join("posts");
        let config_home = temp_dir.path().join("config");
        std::fs::create_dir(&posts_dir).expect("Failed to create posts directory");
        std::fs::create_dir(&config_home).expect("Failed to create config directory");
        Self {
            _temp_dir: temp_dir,
            posts_dir,
            config_home,
        }
    }

    /// Returns the path to the posts directory.
    pub fn posts_dir(&self) -> &Path {
        &self.posts_dir
    }

    /// Returns a factory writing into the posts directory.
    pub fn factory(&self) -> PostFactory {
        PostFactory::new(&self.posts_dir)
    }

    /// Writes a test post through the factory and returns its handle.
    pub fn add_post(&self, test_post: &TestPost) -> Post {
        self.factory()
            .create(test_post.filename(), test_post.fields())
            .expect("Failed to write test post")
    }

    /// Reads a file in the posts directory as a string.
    pub fn read(&self, filename: &str) -> String {
        std::fs::read_to_string(self.posts_dir.join(filename)).expect("Failed to read post")
    }

    /// Writes the user config file read by the binary.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        let dir = self.config_home.join("post-fixtures");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        let path = dir.join("config.toml");
        std::fs::write(&path, contents).expect("Failed to write config");
        path
    }

    /// Creates a FixtureCommand with `--dir` set to this environment.
    pub fn cmd(&self) -> FixtureCommand {
        self.bare_cmd().dir(&self.posts_dir)
    }

    /// Creates a FixtureCommand with no posts directory configured.
    pub fn bare_cmd(&self) -> FixtureCommand {
        FixtureCommand::new().config_home(&self.config_home)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_posts_directory() {
        let env = TestEnv::new();
        assert!(env.posts_dir().is_dir());
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.posts_dir().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_add_post_creates_file() {
        let env = TestEnv::new();
        let post = env.add_post(&TestPost::new("hello.txt").title("Hello"));

        assert!(post.path().is_file());
        assert!(post.path().starts_with(env.posts_dir()));
        assert!(env.read("hello.txt").starts_with(":title: Hello\n"));
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1], env.posts_dir().to_string_lossy());
    }
}

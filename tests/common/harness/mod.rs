//! Test harness for CLI integration tests.
//!
//! Provides isolated test environments, programmatic post creation,
//! and CLI assertion helpers using `assert_cmd`.

mod env;
mod post;

// Re-export main types for external use
#[allow(unused_imports)]
pub use command::FixtureCommand;
#[allow(unused_imports)]
pub use env::TestEnv;
#[allow(unused_imports)]
pub use post::TestPost;

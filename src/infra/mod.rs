//! File I/O and the post fixture text format

pub mod format;
mod fs;

pub use format::{ParseError, parse, serialize};
pub use fs::{FsError, read_post, scan_posts_directory, write_post};

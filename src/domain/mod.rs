//! Core types: PostFields, Post, PostContent

mod fields;
mod post;

pub use fields::{DEFAULT_PUBLISHED_AT, PostFields};
pub use post::{PUBLISHED_AT_FORMAT, Post, PostContent};

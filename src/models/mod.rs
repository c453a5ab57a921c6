//! Data models module
//!
//! Defines the post metadata document, the gist reference attached to
//! published posts, and slug derivation for post directories.

pub mod post;
pub mod slug;

pub use post::{Gist, Post, PostMeta, PostStatus};
pub use slug::slugify;

//! Command-line interface module
//!
//! One module per subcommand:
//! - init: Create a blog repository
//! - new: Create a post
//! - edit: Open a post directory
//! - list: Show all posts
//! - publish: Publish or update a post's gist
//! - export: Zip every post

pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod new;
pub mod publish;

use crate::config::{self, BlogConfig, BlogPaths};
use crate::error::Result;

/// Open the blog in the current directory, failing when it is not initialized
fn current_blog() -> Result<(BlogPaths, BlogConfig)> {
    let paths = BlogPaths::new(".");
    let config = config::load(&paths)?;
    Ok((paths, config))
}

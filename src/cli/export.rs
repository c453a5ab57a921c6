use std::path::PathBuf;

use crate::archive;
use crate::error::{GblogError, Result};
use crate::posts;
use crate::renderer::PostStats;

/// Default archive name when none is given
pub const DEFAULT_OUTPUT: &str = "gblog-export.zip";

/// Export every post, public and private, to a zip archive
pub fn run(output: Option<PathBuf>) -> Result<()> {
    let output = output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    let (paths, _) = super::current_blog()?;

    let posts = posts::scan(&paths.posts_dir())?;
    if posts.is_empty() {
        return Err(GblogError::NoPosts);
    }
    println!("Exporting {} posts to {}...", posts.len(), output.display());

    let files = archive::export_to_file(&output, &paths.posts_dir(), &posts)?;

    let stats = PostStats::of(&posts);
    println!("Export completed successfully!");
    println!("Archive: {}", output.display());
    println!("Total posts: {} ({} files)", stats.total, files);
    println!(
        "Published: {}, Drafts: {}, Private: {}",
        stats.published,
        stats.drafts(),
        stats.private
    );
    Ok(())
}

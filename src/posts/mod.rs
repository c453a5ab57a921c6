//! Post metadata store
//!
//! One directory per post under `posts/`, named `<id>-<slug>`, each holding a
//! `.meta.json` document next to the post's content files.

mod resolve;

pub use resolve::find_by_prefix;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{GblogError, Result};
use crate::models::{Post, PostMeta};

/// Name of the metadata file inside a post directory
pub const META_FILE: &str = ".meta.json";

/// Create a post directory and write its initial metadata
pub fn create(
    post_dir: &Path,
    id: &str,
    title: &str,
    description: &str,
    public: bool,
) -> Result<PostMeta> {
    fs::create_dir_all(post_dir)?;

    let meta = PostMeta::new(id, title, description, public);
    update(post_dir, &meta)?;
    Ok(meta)
}

/// Load the metadata of a post directory
pub fn load(post_dir: &Path) -> Result<PostMeta> {
    let path = post_dir.join(META_FILE);
    let content = fs::read_to_string(&path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => GblogError::MissingMetadata(path.clone()),
        _ => GblogError::Io(e),
    })?;

    serde_json::from_str(&content).map_err(|source| GblogError::InvalidFormat { path, source })
}

/// Overwrite the metadata of a post directory
pub fn update(post_dir: &Path, meta: &PostMeta) -> Result<()> {
    let path = post_dir.join(META_FILE);
    let mut json = serde_json::to_string_pretty(meta)?;
    json.push('\n');
    fs::write(&path, json)?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

/// Load every post under the posts directory.
///
/// Directories without readable metadata are skipped with a warning. A
/// missing posts directory yields no posts.
pub fn scan(posts_root: &Path) -> Result<Vec<Post>> {
    if !posts_root.is_dir() {
        return Ok(Vec::new());
    }

    let mut posts = Vec::new();
    for entry in fs::read_dir(posts_root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }

        let dir = entry.file_name().to_string_lossy().to_string();
        match load(&entry.path()) {
            Ok(meta) => posts.push(Post { meta, dir }),
            Err(e) => {
                log::debug!("skipping post directory {}: {}", dir, e);
                eprintln!("Warning: could not read metadata for {}: {}", dir, e);
            }
        }
    }

    Ok(posts)
}

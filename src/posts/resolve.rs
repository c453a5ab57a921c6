use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GblogError, Result};

/// Normalize a user-supplied id: short numeric ids are zero-padded
fn normalize_id(id: &str) -> String {
    let id = id.trim();
    if !id.is_empty() && id.len() < 4 && id.chars().all(|c| c.is_ascii_digit()) {
        format!("{:0>4}", id)
    } else {
        id.to_string()
    }
}

/// Find the directory of a post by its id.
///
/// Only the directory name is consulted: the first subdirectory named
/// `<id>-...` wins. The hyphen is part of the match so `0001` never resolves
/// to `00011-...`. Names are compared in sorted order so duplicates resolve
/// the same way on every platform.
pub fn find_by_prefix(posts_root: &Path, id: &str) -> Result<PathBuf> {
    let id = normalize_id(id);
    let prefix = format!("{}-", id);

    let entries = fs::read_dir(posts_root).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => GblogError::PostNotFound(id.clone()),
        _ => GblogError::Io(e),
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            names.push(entry.file_name().to_string_lossy().to_string());
        }
    }
    names.sort();

    names
        .into_iter()
        .find(|name| name.starts_with(&prefix))
        .map(|name| posts_root.join(name))
        .ok_or(GblogError::PostNotFound(id))
}

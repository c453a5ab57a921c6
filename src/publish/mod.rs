//! Publish module
//!
//! Moves a post from draft to published by creating a gist from its files,
//! and re-sends the files of an already published post on `--update`.

mod gh;

pub use gh::{GhCli, GistHost};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GblogError, Result};
use crate::models::{Gist, PostMeta};
use crate::posts;

/// Result of a publish request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// A new gist was created and recorded
    Created(Gist),
    /// The existing gist received the current files
    Updated(Gist),
    /// The post already has a gist and no update was requested
    AlreadyPublished { url: String },
}

impl PublishOutcome {
    pub fn url(&self) -> &str {
        match self {
            PublishOutcome::Created(gist) | PublishOutcome::Updated(gist) => &gist.url,
            PublishOutcome::AlreadyPublished { url } => url,
        }
    }
}

/// Files sent to the gist: regular, non-hidden files directly inside the
/// post directory, in name order
pub fn gist_files(post_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(post_dir)? {
        let entry = entry?;
        let name = entry.file_name();
        if name.to_string_lossy().starts_with('.') {
            continue;
        }
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }

    files.sort();
    Ok(files)
}

/// Publish a post, or update its gist when `update` is set.
///
/// On success the metadata in `post_dir` is rewritten before returning; a
/// failure to do so is reported as [`GblogError::PublishedNotRecorded`].
pub fn publish(
    post_dir: &Path,
    meta: &mut PostMeta,
    update: bool,
    host: &dyn GistHost,
) -> Result<PublishOutcome> {
    let existing = meta.gist.clone();
    if let (Some(gist), false) = (&existing, update) {
        return Ok(PublishOutcome::AlreadyPublished {
            url: gist.url.clone(),
        });
    }

    let files = gist_files(post_dir)?;
    if files.is_empty() {
        return Err(GblogError::NoFilesToPublish(post_dir.to_path_buf()));
    }

    if !host.is_authenticated() {
        return Err(GblogError::AuthRequired);
    }

    let outcome = match existing {
        Some(gist) => {
            log::info!("updating gist {} with {} file(s)", gist.id, files.len());
            host.update_gist(&gist.id, &files)?;
            PublishOutcome::Updated(gist)
        }
        None => {
            log::info!("creating gist from {} file(s)", files.len());
            let output = host.create_gist(&files, meta.public, &meta.description)?;
            let gist = Gist::from_url(&output)
                .ok_or_else(|| GblogError::InvalidRemoteResponse(output.trim().to_string()))?;
            PublishOutcome::Created(gist)
        }
    };

    if let PublishOutcome::Created(gist) | PublishOutcome::Updated(gist) = &outcome {
        meta.gist = Some(gist.clone());
    }

    posts::update(post_dir, meta).map_err(|source| GblogError::PublishedNotRecorded {
        url: outcome.url().to_string(),
        source: Box::new(source),
    })?;

    Ok(outcome)
}

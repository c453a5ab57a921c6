//! Configuration module
//!
//! Handles loading and saving of the blog's `.gblog/config.json` and owns
//! the post identifier sequence.

mod types;

pub use types::{BlogConfig, BlogPaths};

use types::format_id;

use crate::error::{GblogError, Result};
use std::fs;
use std::io::ErrorKind;

/// Load the blog configuration
pub fn load(paths: &BlogPaths) -> Result<BlogConfig> {
    let path = paths.config_file();
    let content = fs::read_to_string(&path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => GblogError::NotInitialized,
        _ => GblogError::Io(e),
    })?;

    let config = serde_json::from_str(&content)
        .map_err(|source| GblogError::InvalidFormat { path, source })?;
    Ok(config)
}

/// Save the blog configuration, overwriting the previous document
pub fn save(config: &BlogConfig, paths: &BlogPaths) -> Result<()> {
    let path = paths.config_file();
    let mut json = serde_json::to_string_pretty(config)?;
    json.push('\n');

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(&path, json)?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

/// Hand out the next post identifier.
///
/// `create` receives the formatted identifier; the counter is incremented
/// and written back only when it succeeds. When the counter cannot be
/// written, `discard` undoes what `create` made so the identifier is free
/// again. There is no locking, two concurrent invocations can observe the
/// same identifier.
pub fn allocate_id<T>(
    paths: &BlogPaths,
    create: impl FnOnce(&BlogConfig, &str) -> Result<T>,
    discard: impl FnOnce(&T),
) -> Result<T> {
    let mut config = load(paths)?;
    let id = format_id(config.next_id);

    let created = create(&config, &id)?;

    config.next_id += 1;
    if let Err(e) = save(&config, paths) {
        log::debug!("could not record next_id {}, discarding {}", config.next_id, id);
        discard(&created);
        return Err(e);
    }
    log::debug!("next_id advanced to {}", config.next_id);

    Ok(created)
}

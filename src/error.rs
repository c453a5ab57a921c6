use std::path::PathBuf;
use thiserror::Error;

/// gblog error types
#[derive(Error, Debug)]
pub enum GblogError {
    #[error("gblog not initialized. Run 'gblog init' first")]
    NotInitialized,

    #[error("gblog is already initialized in '{0}'")]
    AlreadyInitialized(PathBuf),

    #[error("{0}")]
    InvalidInput(String),

    #[error("post with ID {0} not found")]
    PostNotFound(String),

    #[error("post metadata not found at '{0}'")]
    MissingMetadata(PathBuf),

    #[error("invalid format in '{path}': {source}")]
    InvalidFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no files found to publish in {0}")]
    NoFilesToPublish(PathBuf),

    #[error("GitHub CLI not authenticated. Run 'gh auth login' first")]
    AuthRequired,

    #[error("GitHub CLI failed: {0}")]
    Remote(String),

    #[error("invalid gist URL returned: '{0}'")]
    InvalidRemoteResponse(String),

    #[error("published to {url} but could not record it locally: {source}")]
    PublishedNotRecorded {
        url: String,
        #[source]
        source: Box<GblogError>,
    },

    #[error("no posts found to export")]
    NoPosts,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Directory walk error: {0}")]
    WalkDir(#[from] walkdir::Error),
}

/// Result type for gblog operations
pub type Result<T> = std::result::Result<T, GblogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_not_initialized() {
        let err = GblogError::NotInitialized;
        assert_eq!(
            err.to_string(),
            "gblog not initialized. Run 'gblog init' first"
        );
    }

    #[test]
    fn test_error_display_post_not_found() {
        let err = GblogError::PostNotFound("0042".to_string());
        assert_eq!(err.to_string(), "post with ID 0042 not found");
    }

    #[test]
    fn test_error_display_missing_metadata() {
        let err = GblogError::MissingMetadata(PathBuf::from("posts/0001-x/.meta.json"));
        assert_eq!(
            err.to_string(),
            "post metadata not found at 'posts/0001-x/.meta.json'"
        );
    }

    #[test]
    fn test_error_display_auth_required_is_actionable() {
        let err = GblogError::AuthRequired;
        assert!(err.to_string().contains("gh auth login"));
    }

    #[test]
    fn test_error_display_published_not_recorded() {
        let err = GblogError::PublishedNotRecorded {
            url: "https://gist.github.com/u/abc".to_string(),
            source: Box::new(GblogError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            ))),
        };
        let msg = err.to_string();
        assert!(msg.contains("https://gist.github.com/u/abc"));
        assert!(msg.contains("read-only"));
    }
}

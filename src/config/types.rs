use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory holding the tool state inside a blog repository
pub const STATE_DIR: &str = ".gblog";

/// Blog configuration stored in `.gblog/config.json`
///
/// Field order is the serialization order and is kept stable so the file
/// diffs cleanly in the blog repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogConfig {
    /// Identifier handed to the next created post
    pub next_id: u32,

    /// GitHub account owning the gists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_user: Option<String>,

    /// Visibility offered by default for new posts
    pub default_public: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_name: Option<String>,
}

impl BlogConfig {
    /// Configuration written by `gblog init`
    pub fn new(repo_name: &str) -> Self {
        Self {
            next_id: 1,
            github_user: None,
            default_public: true,
            blog_path: Some(".".to_string()),
            repo_name: Some(repo_name.to_string()),
        }
    }
}

/// Render a numeric identifier the way it appears in directory names
pub fn format_id(id: u32) -> String {
    format!("{:04}", id)
}

/// Well-known locations inside a blog repository
#[derive(Debug, Clone)]
pub struct BlogPaths {
    root: PathBuf,
}

impl BlogPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn state_dir(&self) -> PathBuf {
        self.root.join(STATE_DIR)
    }

    pub fn config_file(&self) -> PathBuf {
        self.state_dir().join("config.json")
    }

    pub fn posts_dir(&self) -> PathBuf {
        self.root.join("posts")
    }

    pub fn gitignore(&self) -> PathBuf {
        self.root.join(".gitignore")
    }

    pub fn readme(&self) -> PathBuf {
        self.root.join("README.md")
    }

    pub fn is_initialized(&self) -> bool {
        self.config_file().is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = BlogConfig::new("my-blog");
        assert_eq!(config.next_id, 1);
        assert!(config.default_public);
        assert_eq!(config.blog_path.as_deref(), Some("."));
        assert_eq!(config.repo_name.as_deref(), Some("my-blog"));
    }

    #[test]
    fn test_config_field_order() {
        let config = BlogConfig {
            github_user: Some("octocat".to_string()),
            ..BlogConfig::new("blog")
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(
            json,
            r#"{"next_id":1,"github_user":"octocat","default_public":true,"blog_path":".","repo_name":"blog"}"#
        );
    }

    #[test]
    fn test_config_minimal_document() {
        let config: BlogConfig =
            serde_json::from_str(r#"{"next_id":7,"default_public":false}"#).unwrap();
        assert_eq!(config.next_id, 7);
        assert!(!config.default_public);
        assert_eq!(config.github_user, None);
        assert_eq!(config.repo_name, None);
    }

    #[test]
    fn test_format_id() {
        assert_eq!(format_id(1), "0001");
        assert_eq!(format_id(42), "0042");
        assert_eq!(format_id(12345), "12345");
    }

    #[test]
    fn test_paths_layout() {
        let paths = BlogPaths::new("/blog");
        assert_eq!(paths.config_file(), PathBuf::from("/blog/.gblog/config.json"));
        assert_eq!(paths.posts_dir(), PathBuf::from("/blog/posts"));
        assert_eq!(paths.gitignore(), PathBuf::from("/blog/.gitignore"));
    }
}

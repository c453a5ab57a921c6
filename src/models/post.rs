use chrono::{DateTime, FixedOffset, Local};
use serde::{Deserialize, Serialize};

/// Remote gist a post has been published to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gist {
    #[serde(rename = "gist_id")]
    pub id: String,
    #[serde(rename = "gist_url")]
    pub url: String,
}

impl Gist {
    /// Derive the gist from the output of `gh gist create`.
    ///
    /// The URL is the last non-empty line of the output and must carry at
    /// least one path segment after the host; the identifier is the last one.
    pub fn from_url(output: &str) -> Option<Self> {
        let url = output
            .lines()
            .map(str::trim)
            .rfind(|line| !line.is_empty())?
            .trim_end_matches('/');

        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))?;
        let (host, path) = rest.split_once('/')?;
        let id = path.rsplit('/').next()?;
        if host.is_empty() || id.is_empty() || id.contains(char::is_whitespace) {
            return None;
        }

        Some(Self {
            id: id.to_string(),
            url: url.to_string(),
        })
    }
}

/// Metadata stored in each post directory as `.meta.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MetaDocument")]
pub struct PostMeta {
    /// Zero-padded identifier, also the directory name prefix
    pub id: String,
    pub title: String,
    pub description: String,
    pub public: bool,
    pub created_at: DateTime<FixedOffset>,
    /// Gist id and URL, both present once published
    #[serde(flatten)]
    pub gist: Option<Gist>,
}

/// `.meta.json` as written on disk, gist fields still separate
#[derive(Deserialize)]
struct MetaDocument {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    public: bool,
    created_at: DateTime<FixedOffset>,
    #[serde(default)]
    gist_id: Option<String>,
    #[serde(default)]
    gist_url: Option<String>,
}

impl TryFrom<MetaDocument> for PostMeta {
    type Error = String;

    fn try_from(doc: MetaDocument) -> Result<Self, Self::Error> {
        let gist = match (doc.gist_id, doc.gist_url) {
            (Some(id), Some(url)) => Some(Gist { id, url }),
            (None, None) => None,
            (Some(_), None) => return Err("gist_id is set without gist_url".to_string()),
            (None, Some(_)) => return Err("gist_url is set without gist_id".to_string()),
        };

        Ok(Self {
            id: doc.id,
            title: doc.title,
            description: doc.description,
            public: doc.public,
            created_at: doc.created_at,
            gist,
        })
    }
}

/// Publication state derived from the metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostStatus {
    Draft,
    Published,
}

impl PostMeta {
    pub fn new(id: &str, title: &str, description: &str, public: bool) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            public,
            created_at: Local::now().fixed_offset(),
            gist: None,
        }
    }

    pub fn status(&self) -> PostStatus {
        match self.gist {
            Some(_) => PostStatus::Published,
            None => PostStatus::Draft,
        }
    }

    pub fn gist_url(&self) -> Option<&str> {
        self.gist.as_ref().map(|g| g.url.as_str())
    }
}

/// A post found on disk: its metadata and directory name
#[derive(Debug, Clone)]
pub struct Post {
    pub meta: PostMeta,
    pub dir: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gist_from_url() {
        let gist = Gist::from_url("https://gist.github.com/octocat/aa5a315d61ae9438b18d\n").unwrap();
        assert_eq!(gist.id, "aa5a315d61ae9438b18d");
        assert_eq!(gist.url, "https://gist.github.com/octocat/aa5a315d61ae9438b18d");
    }

    #[test]
    fn test_gist_from_empty_output() {
        assert_eq!(Gist::from_url(""), None);
        assert_eq!(Gist::from_url("   \n"), None);
    }

    #[test]
    fn test_gist_from_url_without_path() {
        assert_eq!(Gist::from_url("https://gist.github.com/"), None);
        assert_eq!(Gist::from_url("https://gist.github.com"), None);
        assert_eq!(Gist::from_url("created gist"), None);
    }

    #[test]
    fn test_gist_from_multiline_output() {
        let output = "- Creating gist hello.md\n\nhttps://gist.github.com/me/abc123\n\n";
        let gist = Gist::from_url(output).unwrap();
        assert_eq!(gist.id, "abc123");
        assert_eq!(gist.url, "https://gist.github.com/me/abc123");

        assert_eq!(Gist::from_url("https://gist.github.com/me/abc123\nfailed"), None);
    }

    #[test]
    fn test_draft_has_no_gist_fields() {
        let meta = PostMeta::new("0001", "Hello", "", true);
        let json = serde_json::to_string(&meta).unwrap();
        assert!(!json.contains("gist_id"));
        assert!(!json.contains("gist_url"));
        assert_eq!(meta.status(), PostStatus::Draft);
    }

    #[test]
    fn test_published_fields_flattened() {
        let mut meta = PostMeta::new("0001", "Hello", "greeting", false);
        meta.gist = Gist::from_url("https://gist.github.com/u/abc123");
        let value = serde_json::to_value(&meta).unwrap();
        assert_eq!(value["gist_id"], "abc123");
        assert_eq!(value["gist_url"], "https://gist.github.com/u/abc123");
        assert_eq!(meta.status(), PostStatus::Published);
    }

    #[test]
    fn test_reads_existing_document() {
        let json = r#"{
  "id": "0003",
  "title": "Getting started",
  "description": "",
  "public": true,
  "created_at": "2024-03-05T21:14:07.123456789-08:00",
  "gist_id": "f00",
  "gist_url": "https://gist.github.com/me/f00"
}"#;
        let meta: PostMeta = serde_json::from_str(json).unwrap();
        assert_eq!(meta.id, "0003");
        assert_eq!(meta.created_at.format("%Y/%m/%d").to_string(), "2024/03/05");
        assert_eq!(meta.gist_url(), Some("https://gist.github.com/me/f00"));
    }

    #[test]
    fn test_rejects_half_set_gist() {
        let base = r#""id":"0001","title":"t","public":true,"created_at":"2024-01-01T00:00:00Z""#;

        let only_id = format!("{{{},\"gist_id\":\"abc\"}}", base);
        let err = serde_json::from_str::<PostMeta>(&only_id).unwrap_err();
        assert!(err.to_string().contains("gist_id is set without gist_url"));

        let only_url = format!("{{{},\"gist_url\":\"https://gist.github.com/me/abc\"}}", base);
        assert!(serde_json::from_str::<PostMeta>(&only_url).is_err());
    }

    #[test]
    fn test_reads_draft_document() {
        let json = r#"{"id":"0001","title":"t","description":"d","public":false,"created_at":"2024-01-01T00:00:00Z"}"#;
        let meta: PostMeta = serde_json::from_str(json).unwrap();
        assert_eq!(meta.gist, None);
        assert_eq!(meta.status(), PostStatus::Draft);
    }
}

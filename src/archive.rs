//! Zip export of every post
//!
//! Files land under `posts/YYYY/MM/DD/<dir>/`, keyed by the creation date of
//! their post, next to an `export-metadata.json` summary.

use chrono::{DateTime, FixedOffset, Local};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, Seek, Write};
use std::path::Path;
use walkdir::WalkDir;
use zip::write::FileOptions;
use zip::ZipWriter;

use crate::error::{GblogError, Result};
use crate::models::Post;

/// Name of the summary entry inside the archive
pub const SUMMARY_ENTRY: &str = "export-metadata.json";

#[derive(Debug, Serialize)]
struct ExportSummary<'a> {
    exported_at: DateTime<FixedOffset>,
    total_posts: usize,
    posts: Vec<ExportedPost<'a>>,
}

#[derive(Debug, Serialize)]
struct ExportedPost<'a> {
    id: &'a str,
    title: &'a str,
    public: bool,
    created_at: DateTime<FixedOffset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gist_url: Option<&'a str>,
}

/// Archive directory of a post
fn entry_prefix(post: &Post) -> String {
    format!(
        "posts/{}/{}",
        post.meta.created_at.format("%Y/%m/%d"),
        post.dir
    )
}

/// Add every file below `post_dir` to the archive, returning the entry count
fn add_post<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    post: &Post,
    post_dir: &Path,
) -> Result<usize> {
    let prefix = entry_prefix(post);
    let mut count = 0;

    for entry in WalkDir::new(post_dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(post_dir)
            .map_err(|e| io::Error::other(e.to_string()))?;
        let relative: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().to_string())
            .collect();
        let name = format!("{}/{}", prefix, relative.join("/"));

        zip.start_file(name, FileOptions::default())?;
        let mut file = File::open(entry.path())?;
        io::copy(&mut file, &mut *zip)?;
        count += 1;
    }

    Ok(count)
}

/// Write the archive of `posts` (read from `posts_root`) to `writer`.
///
/// Posts are written in creation order. Returns the number of file entries,
/// not counting the summary.
pub fn write_archive<W: Write + Seek>(
    writer: W,
    posts_root: &Path,
    posts: &[Post],
) -> Result<usize> {
    if posts.is_empty() {
        return Err(GblogError::NoPosts);
    }

    let mut sorted: Vec<&Post> = posts.iter().collect();
    sorted.sort_by_key(|p| p.meta.created_at);

    let mut zip = ZipWriter::new(writer);
    let mut entries = 0;

    for post in &sorted {
        log::debug!("adding post {} ({})", post.meta.id, post.dir);
        entries += add_post(&mut zip, post, &posts_root.join(&post.dir))?;
    }

    let summary = ExportSummary {
        exported_at: Local::now().fixed_offset(),
        total_posts: sorted.len(),
        posts: sorted
            .iter()
            .map(|p| ExportedPost {
                id: &p.meta.id,
                title: &p.meta.title,
                public: p.meta.public,
                created_at: p.meta.created_at,
                gist_url: p.meta.gist_url(),
            })
            .collect(),
    };
    zip.start_file(SUMMARY_ENTRY, FileOptions::default())?;
    let mut json = serde_json::to_string_pretty(&summary)?;
    json.push('\n');
    zip.write_all(json.as_bytes())?;

    zip.finish()?;
    Ok(entries)
}

/// Export `posts` to a zip file at `output`
pub fn export_to_file(output: &Path, posts_root: &Path, posts: &[Post]) -> Result<usize> {
    if posts.is_empty() {
        return Err(GblogError::NoPosts);
    }
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(output)?;
    write_archive(file, posts_root, posts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gist;
    use crate::posts;
    use std::io::{Cursor, Read};
    use tempfile::TempDir;
    use zip::ZipArchive;

    fn make_post(root: &Path, dir: &str, created: &str, files: &[(&str, &str)]) -> Post {
        let post_dir = root.join(dir);
        let id = dir.split('-').next().unwrap();
        let mut meta = posts::create(&post_dir, id, dir, "", true).unwrap();
        meta.created_at = DateTime::parse_from_rfc3339(created).unwrap();
        posts::update(&post_dir, &meta).unwrap();
        for (name, content) in files {
            let path = post_dir.join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        Post {
            meta,
            dir: dir.to_string(),
        }
    }

    fn archive_names(bytes: Vec<u8>) -> Vec<String> {
        let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        archive.file_names().map(String::from).collect()
    }

    #[test]
    fn test_entries_are_date_prefixed() {
        let temp = TempDir::new().unwrap();
        let post = make_post(
            temp.path(),
            "0001-hello",
            "2024-03-05T10:00:00-08:00",
            &[("hello.md", "# Hello"), ("img/cat.png", "png")],
        );

        let mut buffer = Cursor::new(Vec::new());
        let count = write_archive(&mut buffer, temp.path(), &[post]).unwrap();

        let mut names = archive_names(buffer.into_inner());
        names.sort();
        assert_eq!(count, 3);
        assert_eq!(
            names,
            vec![
                "export-metadata.json",
                "posts/2024/03/05/0001-hello/.meta.json",
                "posts/2024/03/05/0001-hello/hello.md",
                "posts/2024/03/05/0001-hello/img/cat.png",
            ]
        );
    }

    #[test]
    fn test_summary_lists_every_post() {
        let temp = TempDir::new().unwrap();
        let mut later = make_post(temp.path(), "0002-b", "2024-02-01T00:00:00Z", &[("b.md", "b")]);
        later.meta.gist = Gist::from_url("https://gist.github.com/me/b");
        let earlier = make_post(temp.path(), "0001-a", "2024-01-01T00:00:00Z", &[("a.md", "a")]);

        let mut buffer = Cursor::new(Vec::new());
        write_archive(&mut buffer, temp.path(), &[later, earlier]).unwrap();

        let mut archive = ZipArchive::new(Cursor::new(buffer.into_inner())).unwrap();
        let mut summary = String::new();
        archive
            .by_name(SUMMARY_ENTRY)
            .unwrap()
            .read_to_string(&mut summary)
            .unwrap();
        let summary: serde_json::Value = serde_json::from_str(&summary).unwrap();

        assert_eq!(summary["total_posts"], 2);
        assert_eq!(summary["posts"][0]["id"], "0001");
        assert!(summary["posts"][0].get("gist_url").is_none());
        assert_eq!(summary["posts"][1]["id"], "0002");
        assert_eq!(summary["posts"][1]["gist_url"], "https://gist.github.com/me/b");
        assert_eq!(summary["posts"][1]["public"], true);
    }

    #[test]
    fn test_file_contents_preserved() {
        let temp = TempDir::new().unwrap();
        let post = make_post(temp.path(), "0001-a", "2024-01-01T00:00:00Z", &[("a.md", "body text")]);

        let mut buffer = Cursor::new(Vec::new());
        write_archive(&mut buffer, temp.path(), &[post]).unwrap();

        let mut archive = ZipArchive::new(Cursor::new(buffer.into_inner())).unwrap();
        let mut content = String::new();
        archive
            .by_name("posts/2024/01/01/0001-a/a.md")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "body text");
    }

    #[test]
    fn test_no_posts() {
        let temp = TempDir::new().unwrap();
        let result = export_to_file(&temp.path().join("out.zip"), temp.path(), &[]);
        assert!(matches!(result, Err(GblogError::NoPosts)));
        assert!(!temp.path().join("out.zip").exists());
    }

    #[test]
    fn test_export_to_file() {
        let temp = TempDir::new().unwrap();
        let posts_root = temp.path().join("posts");
        let post = make_post(&posts_root, "0001-a", "2024-01-01T00:00:00Z", &[("a.md", "a")]);

        let output = temp.path().join("exports/blog.zip");
        export_to_file(&output, &posts_root, &[post]).unwrap();

        let names = archive_names(fs::read(&output).unwrap());
        assert!(names.contains(&"posts/2024/01/01/0001-a/a.md".to_string()));
    }
}

//! Markdown renderer module
//!
//! Generates the markdown gblog writes or prints: the post table shown by
//! `gblog list`, the skeleton of a new post, and the files seeded by
//! `gblog init`.

use crate::models::{Post, PostStatus};

const TITLE_WIDTH: usize = 30;
const URL_WIDTH: usize = 40;

/// Counts shown under the post table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PostStats {
    pub total: usize,
    pub published: usize,
    pub private: usize,
}

impl PostStats {
    pub fn of(posts: &[Post]) -> Self {
        Self {
            total: posts.len(),
            published: posts
                .iter()
                .filter(|p| p.meta.status() == PostStatus::Published)
                .count(),
            private: posts.iter().filter(|p| !p.meta.public).count(),
        }
    }

    pub fn drafts(&self) -> usize {
        self.total - self.published
    }
}

/// Shorten `text` to `max` characters, ending with "..." when cut
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Escape characters that would break a markdown table cell
fn cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Numeric ids compare by value, so `10000` follows `9999`; anything else
/// sorts below them by text
fn id_order(id: &str) -> (Option<u64>, &str) {
    (id.parse().ok(), id)
}

/// Render the post table, newest post first
pub fn render_post_list(posts: &[Post]) -> String {
    let mut sorted: Vec<&Post> = posts.iter().collect();
    sorted.sort_by(|a, b| id_order(&b.meta.id).cmp(&id_order(&a.meta.id)));

    let mut output = String::new();
    output.push_str("# Blog Posts\n\n");
    output.push_str("| ID | Title | Status | Visibility | Created | Gist URL |\n");
    output.push_str("|:-|:-|:-|:-|:-|:-|\n");

    for post in sorted {
        let meta = &post.meta;
        let status = match meta.status() {
            PostStatus::Published => "**Published**",
            PostStatus::Draft => "*Draft*",
        };
        let visibility = if meta.public { "Public" } else { "**Private**" };
        let url = meta
            .gist_url()
            .map(|url| truncate(url, URL_WIDTH))
            .unwrap_or_else(|| "-".to_string());

        output.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |\n",
            cell(&meta.id),
            cell(&truncate(&meta.title, TITLE_WIDTH)),
            status,
            visibility,
            meta.created_at.format("%Y-%m-%d"),
            cell(&url),
        ));
    }

    let stats = PostStats::of(posts);
    output.push_str(&format!("\nTotal posts: {}\n\n", stats.total));
    output.push_str(&format!(
        "Published: {}, Drafts: {}, Private: {}",
        stats.published,
        stats.drafts(),
        stats.private
    ));

    output
}

/// Markdown skeleton of a freshly created post
pub fn render_post_skeleton(title: &str, description: &str) -> String {
    let mut output = format!("# {}\n\n", title);
    if !description.is_empty() {
        output.push_str(&format!("*{}*\n\n", description));
    }
    output.push_str("Write your post content here...\n");
    output
}

/// README.md of a new blog repository
pub fn render_readme(blog_name: &str) -> String {
    format!(
        r#"# {name}

A gist-powered blog created with gblog.

## Posts

This repository contains my blog posts, each published as a GitHub Gist.

Posts are organized with descriptive filenames (e.g., `getting-started-with-go.md`) rather than generic names.

## Usage

- Create new post: `gblog new`
- List posts: `gblog list`
- Edit post: `gblog edit <id>`
- Publish post: `gblog publish <id>`
- Update existing gist: `gblog publish <id> --update`
- Export all: `gblog export`

## Posts Directory

All posts are organized in the `posts/` directory with the format `XXXX-post-title/`.
Each post contains a descriptively named markdown file and any auxiliary files.

## Workflow

1. `gblog new` - Create post with interactive prompts
2. `gblog edit <id>` - Open directory to write content
3. `git add . && git commit` - Version control your changes
4. `gblog publish <id>` - Publish to GitHub Gists
5. `gblog publish <id> --update` - Update gist after changes
"#,
        name = blog_name
    )
}

/// .gitignore of a new blog repository; private posts are appended later
pub fn render_gitignore() -> &'static str {
    "# gblog private posts will be added here automatically

# OS generated files
.DS_Store
.DS_Store?
._*
.Spotlight-V100
.Trashes
ehthumbs.db
Thumbs.db

# Export files
*.zip
"
}

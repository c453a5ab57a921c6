use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::{self, BlogPaths};
use crate::error::{GblogError, Result};
use crate::models::slugify;
use crate::posts;
use crate::prompt::{self, Answer, PostDraft, PostWizard, Wizard};
use crate::renderer;

/// A post just written to disk
#[derive(Debug, Clone)]
pub struct CreatedPost {
    pub id: String,
    pub dir_name: String,
    pub markdown: PathBuf,
}

/// Collect the post fields from flags, without prompting
fn draft_from_args(
    title: String,
    description: Option<String>,
    public: Option<bool>,
    default_public: bool,
) -> Result<PostDraft> {
    let visibility = match public {
        Some(public) => Answer::YesNo(public),
        None => Answer::Text(String::new()),
    };

    let wizard = PostWizard::new(default_public).advance(Answer::Text(title));
    if let Some(error) = wizard.error() {
        return Err(GblogError::InvalidInput(error.to_string()));
    }

    wizard
        .advance(Answer::Text(description.unwrap_or_default()))
        .advance(visibility)
        .finish()
        .ok_or_else(|| GblogError::InvalidInput("incomplete post details".to_string()))
}

/// Create the post directory, metadata and markdown skeleton, consuming the
/// next identifier
pub fn create_post(paths: &BlogPaths, draft: &PostDraft) -> Result<CreatedPost> {
    config::allocate_id(
        paths,
        |_, id| {
            let slug = slugify(&draft.title);
            let dir_name = format!("{}-{}", id, slug);
            let post_dir = paths.posts_dir().join(&dir_name);

            posts::create(&post_dir, id, &draft.title, &draft.description, draft.public)?;

            let markdown = post_dir.join(format!("{}.md", slug));
            fs::write(
                &markdown,
                renderer::render_post_skeleton(&draft.title, &draft.description),
            )?;

            Ok(CreatedPost {
                id: id.to_string(),
                dir_name,
                markdown,
            })
        },
        |created| {
            let post_dir = paths.posts_dir().join(&created.dir_name);
            if let Err(e) = fs::remove_dir_all(&post_dir) {
                eprintln!("Warning: could not remove {}: {}", post_dir.display(), e);
            }
        },
    )
}

/// Keep a private post out of the blog repository
fn ignore_post(paths: &BlogPaths, dir_name: &str) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.gitignore())?;
    writeln!(file, "posts/{}/", dir_name)
}

/// Create a new post, prompting for anything not given on the command line
pub fn run(
    title: Option<String>,
    description: Option<String>,
    public: Option<bool>,
) -> Result<()> {
    let (paths, config) = super::current_blog()?;

    let draft = match title {
        Some(title) => draft_from_args(title, description, public, config.default_public)?,
        None => match prompt::run(PostWizard::new(config.default_public))? {
            Some(draft) => draft,
            None => {
                println!("Cancelled.");
                return Ok(());
            }
        },
    };

    let created = create_post(&paths, &draft)?;

    if !draft.public {
        if let Err(e) = ignore_post(&paths, &created.dir_name) {
            eprintln!("Warning: could not update .gitignore: {}", e);
        }
    }

    println!("Created new post: {}", created.dir_name);
    println!("Directory: posts/{}/", created.dir_name);
    println!("Edit your post: {}", created.markdown.display());
    if !draft.public {
        println!("This post is private and added to .gitignore");
    }
    println!("\nWhen ready, publish with: gblog publish {}", created.id);

    Ok(())
}

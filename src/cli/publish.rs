use crate::error::Result;
use crate::launcher;
use crate::posts;
use crate::publish::{self, GhCli, PublishOutcome};

/// Publish a post as a gist, or push its current files with `update`
pub fn run(id: &str, update: bool, no_open: bool) -> Result<()> {
    let (paths, _) = super::current_blog()?;
    let post_dir = posts::find_by_prefix(&paths.posts_dir(), id)?;
    let mut meta = posts::load(&post_dir)?;

    if meta.gist.is_none() || update {
        println!("Publishing post '{}'...", meta.title);
    }

    let host = GhCli::new(paths.root());
    let outcome = publish::publish(&post_dir, &mut meta, update, &host)?;

    let gist = match &outcome {
        PublishOutcome::AlreadyPublished { url } => {
            println!("Post already published: {}", url);
            println!(
                "Use 'gblog publish {} --update' to update the existing gist.",
                meta.id
            );
            return Ok(());
        }
        PublishOutcome::Created(gist) => {
            println!("Published successfully!");
            gist
        }
        PublishOutcome::Updated(gist) => {
            println!("Updated existing gist!");
            gist
        }
    };

    println!("Gist URL: {}", gist.url);
    println!("Gist ID: {}", gist.id);

    if !no_open {
        if let Err(e) = launcher::open(&gist.url) {
            eprintln!("Warning: could not open browser: {}", e);
            println!("Please visit: {}", gist.url);
        }
    }

    Ok(())
}

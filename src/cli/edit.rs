use crate::error::Result;
use crate::launcher;
use crate::posts;

/// Open a post directory in the file manager
pub fn run(id: &str) -> Result<()> {
    let (paths, _) = super::current_blog()?;
    let post_dir = posts::find_by_prefix(&paths.posts_dir(), id)?;

    println!("Opening post directory: {}", post_dir.display());

    if let Err(e) = launcher::open(&post_dir.to_string_lossy()) {
        println!("Could not open file manager: {}", e);
        println!("Post directory: {}", post_dir.display());
        println!("You can manually navigate to this directory to edit your files");
        return Ok(());
    }

    println!("Opened in file manager");
    println!("Edit your files and run 'gblog publish {}' when ready", id);
    Ok(())
}

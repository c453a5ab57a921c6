use crate::display;
use crate::error::Result;
use crate::posts;
use crate::renderer;

/// Print every post with its status
pub fn run() -> Result<()> {
    let (paths, _) = super::current_blog()?;
    let posts = posts::scan(&paths.posts_dir())?;

    if posts.is_empty() {
        println!("No posts found. Create your first post with 'gblog new'");
        return Ok(());
    }

    display::print_markdown(&renderer::render_post_list(&posts));
    Ok(())
}

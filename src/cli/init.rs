use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{self, BlogConfig, BlogPaths};
use crate::error::{GblogError, Result};
use crate::prompt::{self, InitPlan, InitWizard};
use crate::publish::{GhCli, GistHost};
use crate::renderer;
use crate::vcs;

const REPO_DESCRIPTION: &str = "A gist-powered blog created with gblog";

fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Lay out a new blog repository at `root` and commit it
pub fn create_blog(root: &Path, name: &str) -> Result<BlogPaths> {
    let paths = BlogPaths::new(root);
    if paths.is_initialized() {
        return Err(GblogError::AlreadyInitialized(root.to_path_buf()));
    }

    fs::create_dir_all(root)?;
    let repo = vcs::init(root)?;

    fs::create_dir_all(paths.state_dir())?;
    fs::create_dir_all(paths.posts_dir())?;
    config::save(&BlogConfig::new(name), &paths)?;
    fs::write(paths.readme(), renderer::render_readme(name))?;
    fs::write(paths.gitignore(), renderer::render_gitignore())?;

    let commit = vcs::commit_all(&repo, vcs::INITIAL_COMMIT_MESSAGE)?;
    log::info!("created blog '{}' at {} ({})", name, root.display(), commit);

    Ok(paths)
}

/// Create the GitHub repository for the blog; failures only warn
fn create_remote_repo(host: &dyn GistHost, name: &str) {
    if !host.is_authenticated() {
        eprintln!("Warning: GitHub CLI not authenticated. Run 'gh auth login' to enable publishing");
        return;
    }

    println!("Creating GitHub repository...");
    match host.create_repo(name, true, REPO_DESCRIPTION) {
        Ok(()) => println!("GitHub repository created and pushed"),
        Err(e) => eprintln!("Warning: could not create GitHub repository: {}", e),
    }
}

/// Initialize a blog, prompting for the details when no name is given
pub fn run(name: Option<String>, path: Option<PathBuf>, no_repo: bool) -> Result<()> {
    let plan = match name {
        Some(name) => InitPlan {
            path: path.unwrap_or_else(|| home_dir().join(&name)),
            name,
            create_repo: !no_repo,
        },
        None => {
            let default_name = format!("gblog-{}", whoami::username());
            match prompt::run(InitWizard::new(&default_name, home_dir()))? {
                Some(plan) => plan,
                None => {
                    println!("Cancelled.");
                    return Ok(());
                }
            }
        }
    };

    println!("Initializing blog '{}' at {}", plan.name, plan.path.display());
    let paths = create_blog(&plan.path, &plan.name)?;
    println!("Created blog repository with initial commit");

    if plan.create_repo {
        create_remote_repo(&GhCli::new(paths.root()), &plan.name);
    }

    println!("\nYour blog is ready!");
    println!("Next steps:");
    println!("  cd {}", plan.path.display());
    println!("  gblog new");
    Ok(())
}

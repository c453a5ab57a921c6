//! Version control for the blog repository (libgit2)

use git2::{IndexAddOption, Oid, Repository, Signature};
use std::path::Path;

use crate::error::Result;

/// Message of the commit created by `gblog init`
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit: Initialize gblog";

/// Initialize a git repository at `path` (no-op on an existing repository)
pub fn init(path: &Path) -> Result<Repository> {
    let repo = match Repository::open(path) {
        Ok(repo) => repo,
        Err(_) => {
            log::debug!("git init {}", path.display());
            Repository::init(path)?
        }
    };
    Ok(repo)
}

/// Stage everything not ignored and commit it
pub fn commit_all(repo: &Repository, message: &str) -> Result<Oid> {
    let mut index = repo.index()?;
    index.add_all(["*"].iter(), IndexAddOption::DEFAULT, None)?;
    index.write()?;

    let tree_id = index.write_tree()?;
    let tree = repo.find_tree(tree_id)?;

    // Fall back to a fixed identity when user.name/user.email are unset
    let signature = repo
        .signature()
        .or_else(|_| Signature::now("gblog", "gblog@localhost"))?;

    let parent = match repo.head() {
        Ok(head) => Some(head.peel_to_commit()?),
        Err(_) => None,
    };
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    let oid = repo.commit(
        Some("HEAD"),
        &signature,
        &signature,
        message,
        &tree,
        &parents,
    )?;
    log::debug!("created commit {}", oid);
    Ok(oid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_init_and_commit() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("README.md"), "# blog\n").unwrap();

        let repo = init(temp.path()).unwrap();
        commit_all(&repo, INITIAL_COMMIT_MESSAGE).unwrap();

        let head = repo.head().unwrap().peel_to_commit().unwrap();
        assert_eq!(head.message(), Some(INITIAL_COMMIT_MESSAGE));
        assert!(head.tree().unwrap().get_name("README.md").is_some());
    }

    #[test]
    fn test_commit_respects_gitignore() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".gitignore"), "*.zip\n").unwrap();
        fs::write(temp.path().join("keep.md"), "keep").unwrap();
        fs::write(temp.path().join("export.zip"), "skip").unwrap();

        let repo = init(temp.path()).unwrap();
        commit_all(&repo, "snapshot").unwrap();

        let tree = repo.head().unwrap().peel_to_commit().unwrap().tree().unwrap();
        assert!(tree.get_name("keep.md").is_some());
        assert!(tree.get_name("export.zip").is_none());
    }

    #[test]
    fn test_second_commit_has_parent() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.md"), "a").unwrap();
        let repo = init(temp.path()).unwrap();
        let first = commit_all(&repo, "first").unwrap();

        fs::write(temp.path().join("b.md"), "b").unwrap();
        let second = commit_all(&repo, "second").unwrap();

        let commit = repo.find_commit(second).unwrap();
        assert_eq!(commit.parent_id(0).unwrap(), first);
    }

    #[test]
    fn test_init_reopens_existing_repository() {
        let temp = TempDir::new().unwrap();
        init(temp.path()).unwrap();
        assert!(init(temp.path()).is_ok());
    }
}

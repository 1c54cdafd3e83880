use std::path::{Path, PathBuf};

use anyhow::Result;
use gix::{ThreadSafeRepository, discover};

use crate::error::ResolveError;

/// Find git repository from current directory using gix
pub fn find_current_git_repo(current_dir: &Path) -> Result<ThreadSafeRepository> {
    let repo = discover(current_dir)?.into_sync();
    Ok(repo)
}

/// Working tree root of the repository containing `current_dir`.
///
/// # Errors
/// Returns [`ResolveError::RepositoryNotFound`] outside a git working tree.
pub fn find_repo_root(current_dir: &Path) -> Result<PathBuf> {
    let repo = find_current_git_repo(current_dir).map_err(|_| ResolveError::RepositoryNotFound)?;
    let root = repo
        .work_dir()
        .ok_or(ResolveError::RepositoryNotFound)?
        .to_path_buf();
    Ok(root)
}

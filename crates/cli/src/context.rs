use anyhow::Result;
use sdkversions_utils::find_repo_root;
use std::path::{Path, PathBuf};

pub struct CommandContext {
    repo_root_path: PathBuf,
}

impl CommandContext {
    /// # Errors
    /// Returns error if the current directory is not inside a git working tree.
    pub fn new() -> Result<Self> {
        let current_dir = Self::current_dir()?;
        let repo_root_path = find_repo_root(&current_dir)?;
        Ok(Self { repo_root_path })
    }

    /// Context rooted at an explicit directory, without git discovery.
    #[must_use]
    pub fn with_root(repo_root_path: PathBuf) -> Self {
        Self { repo_root_path }
    }

    #[must_use]
    pub fn repo_root_path(&self) -> &Path {
        &self.repo_root_path
    }

    /// # Errors
    /// Returns error if retrieving the current directory fails.
    pub fn current_dir() -> Result<PathBuf> {
        Ok(std::env::current_dir()?)
    }
}

use std::path::PathBuf;

use thiserror::Error;

/// Failures while locating the repository and the files a run targets.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Not a git repository or unable to determine root directory.")]
    RepositoryNotFound,

    #[error("Path '{}' does not exist or is not a file or directory.", path.display())]
    PathNotFound { path: PathBuf },
}

impl ResolveError {
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::RepositoryNotFound => "Git repository not found",
            Self::PathNotFound { .. } => "Path not found",
        }
    }
}

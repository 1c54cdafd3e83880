use std::path::Path;

use anyhow::{Context, Result};
use sdkversions_core::{FileTarget, split_path_arg};
use tokio::fs::{metadata, read_dir};

use crate::{error::ResolveError, get_absolute_path};

/// Expand `path[:pattern_type]` arguments into file targets.
///
/// A directory expands to the regular files directly inside it (not recursive, sorted
/// by path), each inheriting the directory's pattern type.
///
/// # Errors
/// Returns [`ResolveError::PathNotFound`] if a path is neither a file nor a directory,
/// or an I/O error if a directory cannot be listed.
pub async fn expand_paths(root: &Path, paths: &[String]) -> Result<Vec<FileTarget>> {
    let mut targets = Vec::new();
    for path in paths {
        let (path, pattern_type) = split_path_arg(path);
        let pattern_type = pattern_type.map(str::to_string);
        let absolute_path = get_absolute_path(root, path);

        let Ok(meta) = metadata(&absolute_path).await else {
            return Err(ResolveError::PathNotFound {
                path: absolute_path,
            }
            .into());
        };

        if meta.is_dir() {
            let mut files = Vec::new();
            let mut entries = read_dir(&absolute_path)
                .await
                .context(format!("Error reading directory - {}", absolute_path.display()))?;
            while let Some(entry) = entries.next_entry().await? {
                let entry_path = entry.path();
                if metadata(&entry_path).await.is_ok_and(|meta| meta.is_file()) {
                    files.push(entry_path);
                }
            }
            files.sort();
            targets.extend(
                files
                    .into_iter()
                    .map(|file| FileTarget::new(file, pattern_type.clone())),
            );
        } else if meta.is_file() {
            targets.push(FileTarget::new(absolute_path, pattern_type));
        } else {
            return Err(ResolveError::PathNotFound {
                path: absolute_path,
            }
            .into());
        }
    }
    Ok(targets)
}

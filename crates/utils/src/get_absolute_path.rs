use std::path::{Path, PathBuf};

/// Relative paths are taken from the repository root; absolute paths are kept.
#[must_use]
pub fn get_absolute_path(root: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

use std::path::{Path, PathBuf};

/// A file to process and the pattern type it was requested with, if any.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileTarget {
    path: PathBuf,
    pattern_type: Option<String>,
}

impl FileTarget {
    pub fn new(path: PathBuf, pattern_type: Option<String>) -> Self {
        Self { path, pattern_type }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn pattern_type(&self) -> Option<&str> {
        self.pattern_type.as_deref()
    }

    /// Catalog key for this file: the explicit pattern type, else the extension with
    /// its leading dot (`.swift`).
    #[must_use]
    pub fn type_key(&self) -> Option<String> {
        match &self.pattern_type {
            Some(pattern_type) => Some(pattern_type.clone()),
            None => self
                .path
                .extension()
                .map(|extension| format!(".{}", extension.to_string_lossy())),
        }
    }
}

/// Split a `path[:pattern_type]` argument at the first colon.
///
/// An empty pattern type (`file.swift:`) counts as no override.
#[must_use]
pub fn split_path_arg(arg: &str) -> (&str, Option<&str>) {
    match arg.split_once(':') {
        Some((path, pattern_type)) if !pattern_type.is_empty() => (path, Some(pattern_type)),
        Some((path, _)) => (path, None),
        None => (arg, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Package.swift:swift_spm", ("Package.swift", Some("swift_spm")))]
    #[case("AEPCore.podspec", ("AEPCore.podspec", None))]
    #[case("code/gradle.properties:", ("code/gradle.properties", None))]
    #[case("a:b:c", ("a", Some("b:c")))]
    fn test_split_path_arg(#[case] input: &str, #[case] expected: (&str, Option<&str>)) {
        assert_eq!(split_path_arg(input), expected);
    }

    #[rstest]
    #[case("/repo/Package.swift", Some("swift_spm"), Some("swift_spm"))]
    #[case("/repo/Constants.swift", None, Some(".swift"))]
    #[case("/repo/code/gradle.properties", None, Some(".properties"))]
    #[case("/repo/AEPCore.xcodeproj/project.pbxproj", None, Some(".pbxproj"))]
    #[case("/repo/Makefile", None, None)]
    #[case("/repo/.gitignore", None, None)]
    fn test_file_target_type_key(
        #[case] path: &str,
        #[case] pattern_type: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let target = FileTarget::new(PathBuf::from(path), pattern_type.map(str::to_string));
        assert_eq!(target.type_key().as_deref(), expected);
        assert_eq!(target.path(), Path::new(path));
        assert_eq!(target.pattern_type(), pattern_type);
    }
}

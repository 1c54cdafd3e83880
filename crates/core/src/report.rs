use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::{concrete_pattern::ConcretePattern, mode::Mode};

/// A pattern hit on a specific line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternMatch {
    pub line: usize,
    pub pattern: ConcretePattern,
}

/// Outcome of processing one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    path: PathBuf,
    mode: Mode,
    /// Rewrites (update) or exact matches (validate), in file order.
    matches: Vec<PatternMatch>,
    /// Patterns that never matched; always empty in update mode.
    unmatched: Vec<ConcretePattern>,
}

impl FileReport {
    pub fn new(
        path: PathBuf,
        mode: Mode,
        matches: Vec<PatternMatch>,
        unmatched: Vec<ConcretePattern>,
    ) -> Self {
        Self {
            path,
            mode,
            matches,
            unmatched,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map_or_else(|| self.path.display().to_string(), |name| {
                name.to_string_lossy().to_string()
            })
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn matches(&self) -> &[PatternMatch] {
        &self.matches
    }

    #[must_use]
    pub fn unmatched(&self) -> &[ConcretePattern] {
        &self.unmatched
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.unmatched.is_empty()
    }
}

/// Aggregated outcome of a whole run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    mode: Mode,
    version: String,
    success: bool,
    files: Vec<FileReport>,
}

impl RunReport {
    pub fn new(mode: Mode, version: impl Into<String>) -> Self {
        Self {
            mode,
            version: version.into(),
            success: true,
            files: Vec::new(),
        }
    }

    pub fn push(&mut self, file: FileReport) {
        self.success = file.is_success() && self.success;
        self.files.push(file);
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub fn files(&self) -> &[FileReport] {
        &self.files
    }

    /// Always true in update mode; in validate mode true only if every file passed.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.success
    }
}

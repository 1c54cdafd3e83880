use std::collections::HashMap;

use crate::pattern_spec::PatternSpec;

/// A platform's contribution to the catalog, keyed by file extension (`.swift`) or
/// named pattern type (`swift_spm`).
pub trait PatternProvider {
    /// Patterns for the project's own version; they never need a dependency name.
    fn own_version_patterns(&self) -> Vec<(&'static str, PatternSpec)>;
    /// Patterns parameterized by a dependency name.
    fn dependency_patterns(&self) -> Vec<(&'static str, PatternSpec)>;
}

/// Read-only lookup from file-type key to the pattern specs applicable to it.
#[derive(Debug, Default)]
pub struct PatternCatalog {
    own_version: HashMap<&'static str, Vec<PatternSpec>>,
    dependency: HashMap<&'static str, Vec<PatternSpec>>,
}

impl PatternCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, provider: &dyn PatternProvider) {
        for (key, spec) in provider.own_version_patterns() {
            self.own_version.entry(key).or_default().push(spec);
        }
        for (key, spec) in provider.dependency_patterns() {
            self.dependency.entry(key).or_default().push(spec);
        }
    }

    #[must_use]
    pub fn with(mut self, provider: &dyn PatternProvider) -> Self {
        self.register(provider);
        self
    }

    /// Unknown keys yield an empty slice so unrecognized files are a no-op.
    #[must_use]
    pub fn own_version_patterns(&self, key: &str) -> &[PatternSpec] {
        self.own_version.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    #[must_use]
    pub fn dependency_patterns(&self, key: &str) -> &[PatternSpec] {
        self.dependency.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    #[must_use]
    pub fn own_version_keys(&self) -> Vec<&'static str> {
        let mut keys = self.own_version.keys().copied().collect::<Vec<_>>();
        keys.sort_unstable();
        keys
    }

    #[must_use]
    pub fn dependency_keys(&self) -> Vec<&'static str> {
        let mut keys = self.dependency.keys().copied().collect::<Vec<_>>();
        keys.sort_unstable();
        keys
    }
}

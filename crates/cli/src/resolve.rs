use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use anyhow::Result;
use sdkversions_core::{
    ConcretePattern, DependencySpec, FileTarget, PatternCatalog, PatternError, PatternSpec,
};
use sdkversions_utils::{expand_paths, log_notice, split_list};

/// File -> concrete patterns, in the order files were first resolved.
#[derive(Debug, Default)]
pub struct PatternMap {
    entries: Vec<(PathBuf, Vec<ConcretePattern>)>,
    index: HashMap<PathBuf, usize>,
}

impl PatternMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `patterns` to `path`; files only get an entry once they have a pattern.
    pub fn extend(&mut self, path: PathBuf, patterns: Vec<ConcretePattern>) {
        if patterns.is_empty() {
            return;
        }
        match self.index.get(&path) {
            Some(&position) => self.entries[position].1.extend(patterns),
            None => {
                self.index.insert(path.clone(), self.entries.len());
                self.entries.push((path, patterns));
            }
        }
    }

    pub fn merge(&mut self, other: PatternMap) {
        for (path, patterns) in other.entries {
            self.extend(path, patterns);
        }
    }

    #[must_use]
    pub fn get(&self, path: &Path) -> Option<&[ConcretePattern]> {
        self.index
            .get(path)
            .map(|&position| self.entries[position].1.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Path, &[ConcretePattern])> {
        self.entries
            .iter()
            .map(|(path, patterns)| (path.as_path(), patterns.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn pattern_count(&self) -> usize {
        self.entries.iter().map(|(_, patterns)| patterns.len()).sum()
    }
}

/// Bind every spec to `name` and `version`.
///
/// # Errors
/// Returns the first [`PatternError`] raised by a spec.
pub fn bind_patterns(
    specs: &[PatternSpec],
    name: Option<&str>,
    version: &str,
) -> Result<Vec<ConcretePattern>, PatternError> {
    specs.iter().map(|spec| spec.bind(name, version)).collect()
}

fn own_version_specs<'a>(catalog: &'a PatternCatalog, target: &FileTarget) -> &'a [PatternSpec] {
    match target.type_key() {
        Some(key) => catalog.own_version_patterns(&key),
        None => &[],
    }
}

fn dependency_specs<'a>(catalog: &'a PatternCatalog, target: &FileTarget) -> &'a [PatternSpec] {
    match target.type_key() {
        Some(key) => catalog.dependency_patterns(&key),
        None => &[],
    }
}

/// `--dependencies` entries split into usable dependencies and skipped raw entries.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParsedDependencies {
    pub dependencies: Vec<DependencySpec>,
    /// Entries without a version, in input order.
    pub skipped: Vec<String>,
}

impl ParsedDependencies {
    pub fn log_skipped(&self) {
        for entry in &self.skipped {
            log_notice(
                &format!("Skipping dependency '{entry}'"),
                &format!("The dependency '{entry}' did not specify a version. Skipping..."),
            );
        }
    }
}

/// Parse the `--dependencies` list, setting aside entries without a version.
///
/// # Errors
/// Returns error if an entry is malformed beyond a missing version.
pub fn parse_dependencies(input: &str) -> Result<ParsedDependencies> {
    let mut parsed = ParsedDependencies::default();
    for entry in split_list(input, ',') {
        match DependencySpec::parse(&entry)? {
            Some(dependency) => parsed.dependencies.push(dependency),
            None => parsed.skipped.push(entry),
        }
    }
    Ok(parsed)
}

/// Own-version patterns for every file expanded from `paths`, bound to `version`.
///
/// # Errors
/// Returns error if a path does not exist or a templated spec cannot be resolved.
pub async fn resolve_own_version_patterns(
    root: &Path,
    paths: &[String],
    version: &str,
    name: Option<&str>,
    catalog: &PatternCatalog,
) -> Result<PatternMap> {
    let mut pattern_map = PatternMap::new();
    for target in expand_paths(root, paths).await? {
        let patterns = bind_patterns(own_version_specs(catalog, &target), name, version)?;
        pattern_map.extend(target.path().to_path_buf(), patterns);
    }
    Ok(pattern_map)
}

/// Dependency patterns for each dependency's files (its own `@` list, else `base_paths`).
///
/// # Errors
/// Returns error if a path does not exist or a dependency name cannot be turned into an
/// anchor.
pub async fn resolve_dependency_patterns(
    root: &Path,
    base_paths: &[String],
    dependencies: &[DependencySpec],
    catalog: &PatternCatalog,
) -> Result<PatternMap> {
    let mut pattern_map = PatternMap::new();
    for dependency in dependencies {
        for target in expand_paths(root, dependency.paths(base_paths)).await? {
            let patterns = bind_patterns(
                dependency_specs(catalog, &target),
                Some(dependency.name()),
                dependency.version(),
            )?;
            pattern_map.extend(target.path().to_path_buf(), patterns);
        }
    }
    Ok(pattern_map)
}

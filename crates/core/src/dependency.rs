use thiserror::Error;

/// Where a dependency's patterns apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyScope {
    /// Every file expanded from the base `--paths` list.
    All,
    /// Only these `path[:pattern_type]` entries.
    Paths(Vec<String>),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DependencyError {
    #[error("Dependency '{entry}' uses '@' but lists no paths.")]
    MissingPaths { entry: String },

    #[error("Dependency '{entry}' has more than one '@' path list.")]
    MultiplePathLists { entry: String },
}

impl DependencyError {
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::MissingPaths { .. } | Self::MultiplePathLists { .. } => "Malformed dependency",
        }
    }
}

/// A `<name> <version>[@path1;path2;...]` entry of the `--dependencies` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySpec {
    name: String,
    version: String,
    scope: DependencyScope,
}

impl DependencySpec {
    pub fn new(name: impl Into<String>, version: impl Into<String>, scope: DependencyScope) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            scope,
        }
    }

    /// Parse one dependency entry.
    ///
    /// Returns `Ok(None)` when the name/version part is not exactly two tokens; the
    /// caller skips such entries.
    ///
    /// # Errors
    /// Returns [`DependencyError::MissingPaths`] for a trailing `@` without paths and
    /// [`DependencyError::MultiplePathLists`] for a second `@`.
    pub fn parse(entry: &str) -> Result<Option<Self>, DependencyError> {
        let entry = entry.trim();
        let (base, paths) = match entry.split_once('@') {
            Some((_, paths)) if paths.contains('@') => {
                return Err(DependencyError::MultiplePathLists {
                    entry: entry.to_string(),
                });
            }
            Some((base, paths)) => (base, Some(paths)),
            None => (entry, None),
        };

        let parts = base.split_whitespace().collect::<Vec<_>>();
        let [name, version] = parts.as_slice() else {
            return Ok(None);
        };

        let scope = match paths {
            None => DependencyScope::All,
            Some(paths) => {
                let paths = paths
                    .split(';')
                    .map(str::trim)
                    .filter(|path| !path.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>();
                if paths.is_empty() {
                    return Err(DependencyError::MissingPaths {
                        entry: entry.to_string(),
                    });
                }
                DependencyScope::Paths(paths)
            }
        };

        Ok(Some(Self::new(*name, *version, scope)))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub const fn scope(&self) -> &DependencyScope {
        &self.scope
    }

    /// The path arguments this dependency applies to, falling back to `base_paths`.
    #[must_use]
    pub fn paths<'a>(&'a self, base_paths: &'a [String]) -> &'a [String] {
        match &self.scope {
            DependencyScope::All => base_paths,
            DependencyScope::Paths(paths) => paths,
        }
    }
}

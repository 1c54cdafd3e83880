use serde::Serialize;
use std::fmt::Display;

/// `MAJOR.MINOR.PATCH`, each component one or more digits.
pub const VERSION_REGEX: &str = r"[0-9]+\.[0-9]+\.[0-9]+";
/// Same shape as [`VERSION_REGEX`] but the major component may not start with a zero.
pub const TEST_VERSION_REGEX: &str = r"[1-9][0-9]*\.[0-9]+\.[0-9]+";
/// Everything up to the end of the line, used for workflow action refs.
pub const REST_OF_LINE_REGEX: &str = r".*$";

/// Grammar of the version token that follows an anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionGrammar {
    #[default]
    Semver,
    TestVersion,
    RestOfLine,
}

impl VersionGrammar {
    #[must_use]
    pub const fn regex(&self) -> &'static str {
        match self {
            Self::Semver => VERSION_REGEX,
            Self::TestVersion => TEST_VERSION_REGEX,
            Self::RestOfLine => REST_OF_LINE_REGEX,
        }
    }
}

impl Display for VersionGrammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.regex())
    }
}

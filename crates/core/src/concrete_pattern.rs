use regex::Regex;
use serde::Serialize;
use std::fmt::Display;

use crate::{error::PatternError, version_grammar::VersionGrammar};

/// An anchor + version grammar pair bound to one expected version.
///
/// Compared and hashed by value; the validate bookkeeping relies on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConcretePattern {
    description: String,
    anchor: String,
    expected_version: String,
    grammar: VersionGrammar,
}

impl ConcretePattern {
    pub fn new(
        description: impl Into<String>,
        anchor: impl Into<String>,
        expected_version: impl Into<String>,
        grammar: VersionGrammar,
    ) -> Self {
        Self {
            description: description.into(),
            anchor: anchor.into(),
            expected_version: expected_version.into(),
            grammar,
        }
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    #[must_use]
    pub fn expected_version(&self) -> &str {
        &self.expected_version
    }

    #[must_use]
    pub const fn grammar(&self) -> VersionGrammar {
        self.grammar
    }

    /// Two-group regex anchored at the start of the line: `(anchor)(version)`.
    #[must_use]
    pub fn regex_source(&self) -> String {
        format!("^({})({})", self.anchor, self.grammar.regex())
    }

    /// # Errors
    /// Returns [`PatternError::InvalidRegex`] if the anchor is not a valid regex.
    pub fn compile(&self) -> Result<Regex, PatternError> {
        Regex::new(&self.regex_source()).map_err(|source| PatternError::InvalidRegex {
            description: self.description.clone(),
            source,
        })
    }
}

impl Display for ConcretePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' with pattern `{}`", self.description, self.regex_source())
    }
}

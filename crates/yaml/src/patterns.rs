use regex::escape;
use sdkversions_core::{PatternError, PatternProvider, PatternSpec, VersionGrammar};

/// Workflow files whose `uses:` steps reference a dependency.
pub const YML_USES: &str = "yml_uses";

/// `uses: <name>@` in a GitHub Actions workflow; the name is escaped here.
///
/// # Errors
/// Never fails; the signature matches [`sdkversions_core::TemplateFn`].
pub fn yml_uses_template(name: &str) -> Result<String, PatternError> {
    Ok(format!(r"^[\s\S]*uses:\s*{}@", escape(name)))
}

#[derive(Debug, Default)]
pub struct YamlPatterns;

impl YamlPatterns {
    pub fn new() -> Self {
        Self
    }
}

impl PatternProvider for YamlPatterns {
    fn own_version_patterns(&self) -> Vec<(&'static str, PatternSpec)> {
        vec![]
    }

    fn dependency_patterns(&self) -> Vec<(&'static str, PatternSpec)> {
        // action refs are branches, tags or SHAs, so the whole rest of the line is the version
        vec![(
            YML_USES,
            PatternSpec::templated("uses:", yml_uses_template)
                .with_grammar(VersionGrammar::RestOfLine),
        )]
    }
}

use crate::{
    concrete_pattern::ConcretePattern,
    error::PatternError,
    template::{PatternTemplate, TemplateFn},
    version_grammar::VersionGrammar,
};

/// One named "thing to find" in a file, as registered in the catalog.
///
/// The anchor regexes are permissive with whitespace so formatting styles and access
/// levels do not block matching.
#[derive(Debug, Clone, Copy)]
pub struct PatternSpec {
    description: &'static str,
    template: PatternTemplate,
    grammar: VersionGrammar,
}

impl PatternSpec {
    #[must_use]
    pub const fn fixed(description: &'static str, anchor: &'static str) -> Self {
        Self {
            description,
            template: PatternTemplate::Static(anchor),
            grammar: VersionGrammar::Semver,
        }
    }

    #[must_use]
    pub const fn templated(description: &'static str, template: TemplateFn) -> Self {
        Self {
            description,
            template: PatternTemplate::Templated(template),
            grammar: VersionGrammar::Semver,
        }
    }

    #[must_use]
    pub const fn with_grammar(mut self, grammar: VersionGrammar) -> Self {
        self.grammar = grammar;
        self
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.description
    }

    #[must_use]
    pub const fn template(&self) -> &PatternTemplate {
        &self.template
    }

    #[must_use]
    pub const fn grammar(&self) -> VersionGrammar {
        self.grammar
    }

    /// # Errors
    /// Returns error if the template needs a name and none was given, or rejects it.
    pub fn generate_anchor(&self, name: Option<&str>) -> Result<String, PatternError> {
        self.template.generate(self.description, name)
    }

    /// Resolve the anchor against `name` and bind it to the version the run expects.
    ///
    /// # Errors
    /// See [`PatternSpec::generate_anchor`].
    pub fn bind(&self, name: Option<&str>, version: &str) -> Result<ConcretePattern, PatternError> {
        let anchor = self.generate_anchor(name)?;
        Ok(ConcretePattern::new(
            self.description,
            anchor,
            version,
            self.grammar,
        ))
    }
}

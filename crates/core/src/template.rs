use crate::error::PatternError;

/// Prefix carried by every SDK module name (`AEPCore`, `AEPEdgeIdentity`, ...).
pub const SDK_NAME_PREFIX: &str = "AEP";

/// Builds an anchor regex from an already validated, non-empty name.
pub type TemplateFn = fn(&str) -> Result<String, PatternError>;

/// Anchor source of a catalog entry: either a fixed regex or a function of a name.
#[derive(Debug, Clone, Copy)]
pub enum PatternTemplate {
    Static(&'static str),
    Templated(TemplateFn),
}

impl PatternTemplate {
    /// Resolve the anchor regex.
    ///
    /// # Errors
    /// Returns [`PatternError::MissingName`] when a templated anchor gets no name (or an
    /// empty one), or whatever the template itself rejects.
    pub fn generate(&self, description: &str, name: Option<&str>) -> Result<String, PatternError> {
        match self {
            Self::Static(anchor) => Ok((*anchor).to_string()),
            Self::Templated(template) => match name.filter(|name| !name.is_empty()) {
                Some(name) => template(name),
                None => Err(PatternError::MissingName {
                    description: description.to_string(),
                }),
            },
        }
    }
}

/// `AEPEdgeIdentity` -> `EdgeIdentity`; names without the prefix are returned as is.
#[must_use]
pub fn strip_sdk_prefix(name: &str) -> &str {
    name.strip_prefix(SDK_NAME_PREFIX).unwrap_or(name)
}

#[must_use]
pub fn lowercase_first_char(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

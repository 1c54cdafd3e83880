use thiserror::Error;

/// Failures while turning catalog entries into concrete patterns.
///
/// All of them abort the run: a template that cannot produce its anchor must never
/// fall back to a wrong or empty one.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("Name is required for dynamic pattern generation in '{description}'.")]
    MissingName { description: String },

    #[error(
        "Unknown dependency name '{name}'. Cannot construct iOS repo URL. Please use format 'AEP<DependencyName>' (ex: 'AEPCore')."
    )]
    UnknownDependency { name: String },

    #[error("Pattern for '{description}' is not a valid regex: {source}")]
    InvalidRegex {
        description: String,
        #[source]
        source: regex::Error,
    },
}

impl PatternError {
    /// Short title used when the error is reported as an annotation.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::MissingName { .. } => "Name required",
            Self::UnknownDependency { .. } => "Unknown dependency",
            Self::InvalidRegex { .. } => "Invalid pattern",
        }
    }
}

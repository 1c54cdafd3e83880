use sdkversions_core::{DependencyError, PatternError};
use sdkversions_utils::ResolveError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("One or more versions do not match the expected value.")]
    VersionMismatch,
}

impl RunError {
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::VersionMismatch => "Version mismatch",
        }
    }
}

/// Annotation title for a fatal error.
#[must_use]
pub fn error_title(error: &anyhow::Error) -> &'static str {
    if let Some(error) = error.downcast_ref::<RunError>() {
        error.title()
    } else if let Some(error) = error.downcast_ref::<PatternError>() {
        error.title()
    } else if let Some(error) = error.downcast_ref::<ResolveError>() {
        error.title()
    } else if let Some(error) = error.downcast_ref::<DependencyError>() {
        error.title()
    } else if error.downcast_ref::<clap::Error>().is_some() {
        "Invalid arguments"
    } else {
        "Error"
    }
}

/// Single-line message for a fatal error, including its context chain.
#[must_use]
pub fn error_message(error: &anyhow::Error) -> String {
    format!("{error:#}")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

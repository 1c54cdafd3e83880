use serde::Serialize;

/// Whether a run rewrites version tokens or only checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Update,
    Validate,
}

impl Mode {
    #[must_use]
    pub const fn from_update_flag(update: bool) -> Self {
        if update { Self::Update } else { Self::Validate }
    }

    #[must_use]
    pub const fn is_update(&self) -> bool {
        matches!(self, Self::Update)
    }

    /// Progress verb: "Updating" / "Validating".
    #[must_use]
    pub const fn verb(&self) -> &'static str {
        match self {
            Self::Update => "Updating",
            Self::Validate => "Validating",
        }
    }
}

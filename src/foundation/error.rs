/// Crate-wide result alias.
pub type WorkshopResult<T> = Result<T, WorkshopError>;

/// Errors raised by the workshop core.
///
/// Most edits are soft failures (no-ops) and never produce one of these; errors are reserved for
/// broken invariants and boundary parsing.
#[derive(thiserror::Error, Debug)]
pub enum WorkshopError {
    /// A scene or subtree would break a structural invariant (duplicate ids, bad values).
    #[error("validation error: {0}")]
    Validation(String),

    /// A component type or preset could not be resolved by the registry.
    #[error("registry error: {0}")]
    Registry(String),

    /// JSON encode/decode failure at the boundary.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, with its source chain preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WorkshopError {
    /// Build a [`WorkshopError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`WorkshopError::Registry`].
    pub fn registry(msg: impl Into<String>) -> Self {
        Self::Registry(msg.into())
    }

    /// Build a [`WorkshopError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

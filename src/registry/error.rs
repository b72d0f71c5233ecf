//! Registry error type.

/// Error type for all registry operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The payload failed validation. Carries the rule that failed.
    #[error("Invalid student payload: {0}")]
    Validation(String),

    /// No record has the requested id.
    #[error("Not found: student with id {id}")]
    NotFound {
        /// The id that was looked up, as received.
        id: String,
    },
}

impl RegistryError {
    /// Builds a [`RegistryError::NotFound`] for a numeric id.
    #[must_use]
    pub fn not_found(id: u64) -> Self {
        Self::NotFound { id: id.to_string() }
    }
}

/// Result alias for registry operations.
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;

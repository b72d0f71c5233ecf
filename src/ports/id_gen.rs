//! ID generator port for request identifiers.

/// Generates unique identifiers for incoming requests.
///
/// Student ids are owned by the registry; this port only covers the
/// correlation id attached to each request's log span.
pub trait IdGenerator: Send + Sync {
    /// Generates a new unique identifier string.
    fn generate_id(&self) -> String;
}

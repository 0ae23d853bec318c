use crate::types::DbId;

/// Domain-level error taxonomy shared by the repository and API layers.
///
/// Every provider failure is converted into one of these kinds before it
/// reaches presentation; the API layer maps them onto HTTP statuses.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested entity does not exist. Rendered as a dedicated
    /// not-found state, never conflated with an internal error.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A single-message rule break (bad status value, invalid transition).
    /// Field-level form errors use [`crate::validation::FieldErrors`] instead.
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing or invalid credentials/token. The client redirects to
    /// sign-in with a return path when it sees this.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The caller is signed in but does not own the resource.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

//! Domain-level error taxonomy.
//!
//! Variants map one-to-one onto the HTTP statuses produced by the API
//! crate's `AppError`; see `tasklane-api/src/error.rs`.

use crate::types::DbId;

/// A domain error raised by repositories, guards, or pure domain logic.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A required field is missing or a supplied value is invalid.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The referenced entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A uniqueness rule was violated (duplicate membership, label
    /// attachment, or email).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The caller is not authenticated.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The caller is authenticated but not allowed to do this.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// An unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

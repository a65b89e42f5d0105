use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// A delete affected no rows even though the row existed moments
    /// earlier. Unexpected, so it maps to a 500 rather than a 404.
    #[error("Delete failed: {entity} with id {id}")]
    DeleteFailed { entity: &'static str, id: DbId },

    #[error("Internal error: {0}")]
    Internal(String),
}

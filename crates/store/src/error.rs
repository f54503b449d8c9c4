use thiserror::Error;

use crate::EntityId;

/// Errors that can occur when interacting with the entity store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record with the same unique key is already stored.
    #[error("Unique constraint violated for {kind}: key '{key}' already exists")]
    UniqueViolation { kind: &'static str, key: String },

    /// A record with the same id is already stored.
    #[error("Duplicate id for {kind}: {id}")]
    DuplicateId { kind: &'static str, id: EntityId },

    /// The backing storage cannot serve the request.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for entity store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

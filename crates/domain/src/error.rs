//! Domain fault types.

use store::StoreError;
use thiserror::Error;

/// Faults that a handler did not anticipate.
///
/// Expected business conditions travel as [`crate::Outcome::Errors`]; only
/// these propagate to the top-level fault handler.
#[derive(Debug, Error)]
pub enum DomainError {
    /// An error occurred in the entity store.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::store::{EntityStore, Filter, Record};
use crate::{EntityId, Result, StoreError};

/// In-memory entity store.
///
/// Records live in a vector behind a tokio `RwLock` and are scanned linearly.
/// Nothing survives the process. Clones share the same underlying records.
///
/// With the unique constraint enabled (the default), `add` checks the
/// record's unique key and appends it inside one write-locked section, so two
/// concurrent inserts with the same key cannot both succeed.
pub struct InMemoryStore<R: Record> {
    records: Arc<RwLock<Vec<R>>>,
    enforce_unique: bool,
}

impl<R: Record> InMemoryStore<R> {
    /// Creates an empty store that enforces unique keys.
    pub fn new() -> Self {
        Self::with_unique_constraint(true)
    }

    /// Creates an empty store, choosing whether unique keys are enforced.
    pub fn with_unique_constraint(enforce_unique: bool) -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            enforce_unique,
        }
    }

    /// Returns whether `add` rejects duplicate unique keys.
    pub fn enforces_unique(&self) -> bool {
        self.enforce_unique
    }
}

impl<R: Record> Default for InMemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> Clone for InMemoryStore<R> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
            enforce_unique: self.enforce_unique,
        }
    }
}

#[async_trait]
impl<R: Record> EntityStore<R> for InMemoryStore<R> {
    async fn add(&self, record: R) -> Result<()> {
        let mut records = self.records.write().await;

        let id = record.id();
        if records.iter().any(|r| r.id() == id) {
            return Err(StoreError::DuplicateId { kind: R::KIND, id });
        }

        if self.enforce_unique
            && let Some(key) = record.unique_key()
            && records.iter().any(|r| r.unique_key() == Some(key))
        {
            return Err(StoreError::UniqueViolation {
                kind: R::KIND,
                key: key.to_string(),
            });
        }

        tracing::trace!(kind = R::KIND, %id, "record added");
        records.push(record);
        Ok(())
    }

    async fn get(&self, id: EntityId) -> Result<Option<R>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    async fn find_first(&self, filter: Filter<'_, R>) -> Result<Option<R>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| filter(r)).cloned())
    }

    async fn find_all(&self, filter: Filter<'_, R>) -> Result<Vec<R>> {
        let records = self.records.read().await;
        Ok(records.iter().filter(|r| filter(r)).cloned().collect())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.records.read().await.len())
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::{EntityId, Result};

/// A domain record that can be held by an [`EntityStore`].
pub trait Record: Clone + Send + Sync + 'static {
    /// Human-readable record kind, used in errors and log fields.
    const KIND: &'static str;

    /// Returns the record's identifier.
    fn id(&self) -> EntityId;

    /// Returns the value that must be unique across all records of this kind.
    ///
    /// Stores that support a unique constraint reject a second record with
    /// an equal key. `None` means the record carries no unique key.
    fn unique_key(&self) -> Option<&str> {
        None
    }
}

/// Predicate used to query records by field equality (or any other test).
pub type Filter<'a, R> = &'a (dyn Fn(&R) -> bool + Send + Sync);

/// Core trait for entity store implementations.
///
/// A store owns its records; callers receive clones. All implementations
/// must be thread-safe (Send + Sync).
#[async_trait]
pub trait EntityStore<R: Record>: Send + Sync {
    /// Adds a new record.
    ///
    /// Fails with `DuplicateId` if a record with the same id exists, and with
    /// `UniqueViolation` if the store enforces unique keys and the key is taken.
    /// The insert is all-or-nothing.
    async fn add(&self, record: R) -> Result<()>;

    /// Retrieves a record by id.
    async fn get(&self, id: EntityId) -> Result<Option<R>>;

    /// Returns the first record (in insertion order) matching the filter.
    async fn find_first(&self, filter: Filter<'_, R>) -> Result<Option<R>>;

    /// Returns every record matching the filter, in insertion order.
    async fn find_all(&self, filter: Filter<'_, R>) -> Result<Vec<R>>;

    /// Returns the number of stored records.
    async fn count(&self) -> Result<usize>;
}

#[async_trait]
impl<R: Record, T: EntityStore<R> + ?Sized> EntityStore<R> for Arc<T> {
    async fn add(&self, record: R) -> Result<()> {
        (**self).add(record).await
    }

    async fn get(&self, id: EntityId) -> Result<Option<R>> {
        (**self).get(id).await
    }

    async fn find_first(&self, filter: Filter<'_, R>) -> Result<Option<R>> {
        (**self).find_first(filter).await
    }

    async fn find_all(&self, filter: Filter<'_, R>) -> Result<Vec<R>> {
        (**self).find_all(filter).await
    }

    async fn count(&self) -> Result<usize> {
        (**self).count().await
    }
}

/// Extension trait providing convenience methods for entity stores.
#[async_trait]
pub trait EntityStoreExt<R: Record>: EntityStore<R> {
    /// Checks whether any record matches the filter.
    async fn exists(&self, filter: Filter<'_, R>) -> Result<bool> {
        Ok(self.find_first(filter).await?.is_some())
    }

    /// Finds the record whose unique key equals `key`.
    async fn find_by_unique_key(&self, key: &str) -> Result<Option<R>> {
        self.find_first(&|record: &R| record.unique_key() == Some(key))
            .await
    }
}

impl<R: Record, T: EntityStore<R> + ?Sized> EntityStoreExt<R> for T {}

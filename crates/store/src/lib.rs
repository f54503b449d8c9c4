//! Entity store for the product catalog.
//!
//! Handlers depend on the [`EntityStore`] trait; [`InMemoryStore`] is the
//! volatile implementation used by the API server and the tests.

pub mod error;
pub mod memory;
pub mod store;

pub use common::EntityId;
pub use error::{Result, StoreError};
pub use memory::InMemoryStore;
pub use store::{EntityStore, EntityStoreExt, Filter, Record};

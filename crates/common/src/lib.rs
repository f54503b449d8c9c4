//! Shared types used across the product catalog crates.

pub mod types;

pub use types::EntityId;

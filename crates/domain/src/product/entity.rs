//! The product entity.

use common::EntityId;
use rust_decimal::Decimal;
use store::Record;

/// A catalog product.
///
/// Created only by [`crate::product::CreateProductHandler`] and never
/// modified afterwards. `name` is unique across the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
}

impl Product {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
        }
    }
}

impl Record for Product {
    const KIND: &'static str = "Product";

    fn id(&self) -> EntityId {
        self.id
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.name)
    }
}

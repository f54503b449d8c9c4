//! Product commands.

use common::EntityId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::pipeline::Command;

/// Command to add a new product to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateProduct {
    /// Unique name of the product.
    pub name: String,

    /// Free-text specifications and marketing copy.
    pub description: String,

    /// Retail price; must be greater than zero.
    pub price: Decimal,
}

impl CreateProduct {
    /// Creates a new CreateProduct command.
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
        }
    }
}

impl Command for CreateProduct {
    type Response = CreateProductResponse;
    const NAME: &'static str = "CreateProduct";
}

/// Returned when a product has been created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateProductResponse {
    pub id: EntityId,
    pub name: String,
}

//! Business errors raised by product handlers.

use crate::outcome::Error;

/// Code reported when a product name is already taken.
pub const DUPLICATE_NAME: &str = "Product.DuplicateName";

pub fn duplicate_name(name: &str) -> Error {
    Error::conflict(
        DUPLICATE_NAME,
        format!("A product with the name '{name}' already exists."),
    )
}

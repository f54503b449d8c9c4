//! Product catalog feature: the entity and the create-product use case.

mod commands;
mod entity;
pub mod errors;
mod handler;
mod validator;

pub use commands::{CreateProduct, CreateProductResponse};
pub use entity::Product;
pub use handler::CreateProductHandler;
pub use validator::{CreateProductValidator, MAX_NAME_LENGTH};

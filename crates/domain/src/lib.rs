//! Domain layer for the product catalog.
//!
//! This crate provides:
//! - `Outcome`, the success/error union returned by every handler
//! - the request pipeline (`Pipeline`, `PipelineStage`, `RequestHandler`)
//! - `ValidationStage` and the `Validator` trait
//! - the `Mediator` registry that routes each command to its pipeline
//! - the product feature: entity, `CreateProduct` command, validator, handler

pub mod error;
pub mod mediator;
pub mod outcome;
pub mod pipeline;
pub mod product;
pub mod validation;

pub use error::DomainError;
pub use mediator::{Dispatch, Mediator};
pub use outcome::{Error, ErrorKind, Outcome};
pub use pipeline::{Command, HandlerResult, Next, Pipeline, PipelineStage, RequestHandler};
pub use product::{
    CreateProduct, CreateProductHandler, CreateProductResponse, CreateProductValidator, Product,
};
pub use validation::{ValidationFailure, ValidationStage, Validator};

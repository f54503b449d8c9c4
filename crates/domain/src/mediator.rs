//! Command dispatch registry.
//!
//! The [`Mediator`] owns one [`Pipeline`] per command type. Which pipeline
//! serves which command is fixed by the [`Dispatch`] impls below, so an
//! unregistered command is a compile error rather than a runtime lookup miss.

use store::EntityStore;

use crate::pipeline::{Command, HandlerResult, Pipeline};
use crate::product::{CreateProduct, CreateProductHandler, CreateProductValidator, Product};
use crate::validation::ValidationStage;

/// Links a command type to the pipeline that serves it.
pub trait Dispatch<C: Command> {
    fn pipeline(&self) -> &Pipeline<C>;
}

/// Entry point for sending commands.
pub struct Mediator {
    create_product: Pipeline<CreateProduct>,
}

impl Mediator {
    /// Builds every pipeline against the given product store.
    pub fn new<S>(products: S) -> Self
    where
        S: EntityStore<Product> + 'static,
    {
        let create_product = Pipeline::new(CreateProductHandler::new(products))
            .with_stage(ValidationStage::new().with_validator(CreateProductValidator));

        Self { create_product }
    }

    /// Sends a command through its pipeline.
    pub async fn send<C>(&self, command: C) -> HandlerResult<C::Response>
    where
        C: Command,
        Self: Dispatch<C>,
    {
        tracing::debug!(request = C::NAME, "dispatching");
        <Self as Dispatch<C>>::pipeline(self).send(command).await
    }
}

impl Dispatch<CreateProduct> for Mediator {
    fn pipeline(&self) -> &Pipeline<CreateProduct> {
        &self.create_product
    }
}

//! Field-level validation and the pipeline stage that enforces it.

use std::sync::Arc;

use async_trait::async_trait;

use crate::outcome::{Error, Outcome};
use crate::pipeline::{Command, HandlerResult, Next, PipelineStage};

/// A single broken rule: which field, and what is wrong with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub field: String,
    pub message: String,
}

impl ValidationFailure {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<ValidationFailure> for Error {
    fn from(failure: ValidationFailure) -> Self {
        Error::validation(failure.field, failure.message)
    }
}

/// Stateless rule set for a command type.
///
/// Every rule is evaluated; the result lists all failures in rule order and
/// is empty when the command is valid.
pub trait Validator<C>: Send + Sync {
    fn validate(&self, command: &C) -> Vec<ValidationFailure>;
}

/// Pipeline stage that rejects a command before its handler when any
/// registered validator reports a failure.
pub struct ValidationStage<C> {
    validators: Vec<Arc<dyn Validator<C>>>,
}

impl<C: Command> ValidationStage<C> {
    /// Creates a stage with no validators; it forwards every command.
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    pub fn with_validator(mut self, validator: impl Validator<C> + 'static) -> Self {
        self.validators.push(Arc::new(validator));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Runs every validator and collects their failures in registration order.
    pub fn validate(&self, command: &C) -> Vec<ValidationFailure> {
        self.validators
            .iter()
            .flat_map(|validator| validator.validate(command))
            .collect()
    }
}

impl<C: Command> Default for ValidationStage<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<C: Command> PipelineStage<C> for ValidationStage<C> {
    async fn handle(&self, command: C, next: Next<'_, C>) -> HandlerResult<C::Response> {
        if self.validators.is_empty() {
            return next.run(command).await;
        }

        tracing::debug!(request = C::NAME, "validating request");

        let failures = self.validate(&command);
        if !failures.is_empty() {
            tracing::warn!(
                request = C::NAME,
                failures = failures.len(),
                "validation failed"
            );
            metrics::counter!("pipeline_validation_failures_total", "command" => C::NAME)
                .increment(1);

            let errors = failures.into_iter().map(Error::from).collect();
            return Ok(Outcome::errors(errors));
        }

        next.run(command).await
    }
}

//! Request pipeline infrastructure.
//!
//! A [`Pipeline`] wraps one [`RequestHandler`] in an ordered chain of
//! [`PipelineStage`]s. Each stage receives the command together with a
//! [`Next`] continuation and either calls `next.run(command)` or returns its
//! own outcome without doing so.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::DomainError;
use crate::outcome::Outcome;

/// Value produced by every handler and stage.
pub type HandlerResult<T> = Result<Outcome<T>, DomainError>;

/// Trait for commands that can be dispatched through a pipeline.
///
/// Commands represent an intention to change state. They may be rejected by
/// a stage (e.g. validation) before reaching their handler.
pub trait Command: Send + 'static {
    /// The success payload produced by the command's handler.
    type Response: Send + 'static;

    /// Command name used in logs and metric labels.
    const NAME: &'static str;
}

/// Handles a single command type. This is where business logic lives.
#[async_trait]
pub trait RequestHandler<C: Command>: Send + Sync {
    async fn handle(&self, command: C) -> HandlerResult<C::Response>;
}

/// Cross-cutting logic composed around a handler.
#[async_trait]
pub trait PipelineStage<C: Command>: Send + Sync {
    async fn handle(&self, command: C, next: Next<'_, C>) -> HandlerResult<C::Response>;
}

/// Continuation handed to a stage: the rest of the chain plus the handler.
pub struct Next<'a, C: Command> {
    stages: &'a [Arc<dyn PipelineStage<C>>],
    handler: &'a dyn RequestHandler<C>,
}

impl<'a, C: Command> Next<'a, C> {
    /// Runs the remaining stages and then the handler.
    pub async fn run(self, command: C) -> HandlerResult<C::Response> {
        match self.stages.split_first() {
            Some((stage, rest)) => {
                let next = Next {
                    stages: rest,
                    handler: self.handler,
                };
                stage.handle(command, next).await
            }
            None => self.handler.handle(command).await,
        }
    }
}

/// A handler wrapped in its stages.
///
/// Stages run in the order they were added; the first one added is the
/// outermost.
pub struct Pipeline<C: Command> {
    stages: Vec<Arc<dyn PipelineStage<C>>>,
    handler: Arc<dyn RequestHandler<C>>,
}

impl<C: Command> Pipeline<C> {
    /// Creates a pipeline with no stages around `handler`.
    pub fn new(handler: impl RequestHandler<C> + 'static) -> Self {
        Self {
            stages: Vec::new(),
            handler: Arc::new(handler),
        }
    }

    /// Appends a stage inside the ones already added.
    pub fn with_stage(mut self, stage: impl PipelineStage<C> + 'static) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    /// Returns the number of stages around the handler.
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Dispatches a command through every stage to the handler.
    pub async fn send(&self, command: C) -> HandlerResult<C::Response> {
        metrics::counter!("pipeline_requests_total", "command" => C::NAME).increment(1);

        let next = Next {
            stages: &self.stages,
            handler: self.handler.as_ref(),
        };
        next.run(command).await
    }
}

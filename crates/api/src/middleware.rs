//! Request middleware.

use std::any::Any;
use std::convert::Infallible;
use std::panic::AssertUnwindSafe;

use axum::extract::{FromRequestParts, OriginalUri, Request};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use futures_util::FutureExt;

use crate::error::Problem;

/// `"<METHOD> <PATH>"` of the current request, used as the problem
/// `instance`. Uses the path before any nesting was stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance(pub String);

impl Instance {
    fn from_parts(parts: &Parts) -> Self {
        let path = parts
            .extensions
            .get::<OriginalUri>()
            .map(|uri| uri.0.path())
            .unwrap_or_else(|| parts.uri.path());
        Instance(format!("{} {}", parts.method, path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Instance {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Instance::from_parts(parts))
    }
}

/// Last-resort handler for panics raised while serving a request.
///
/// Logs the fault and answers with the generic 500 problem instead of
/// dropping the connection.
pub async fn fault_barrier(request: Request, next: Next) -> Response {
    let instance = format!("{} {}", request.method(), request.uri().path());

    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        Err(panic) => {
            let message = panic_message(panic.as_ref());
            tracing::error!(
                %instance,
                fault = %message,
                "unhandled fault while processing request"
            );
            Problem::internal(instance, message).into_response()
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

//! Product catalog endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use domain::{CreateProduct, CreateProductResponse, Outcome};

use super::{API_PREFIX, DeclaredResponse, Endpoint, RouteDescriptor};
use crate::AppState;
use crate::error::ApiError;
use crate::middleware::Instance;

static CREATE_PRODUCT: RouteDescriptor = RouteDescriptor {
    method: "POST",
    path: "/products",
    name: "CreateProduct",
    tag: "Products",
    summary: "Creates a new product in the catalog.",
    description: "Adds a new product. The product name must be unique across the entire catalog.",
    responses: &[
        DeclaredResponse::new(201),
        DeclaredResponse::new(400),
        DeclaredResponse::new(409),
        DeclaredResponse::new(500),
    ],
};

/// `POST /products`
pub struct CreateProductEndpoint;

impl Endpoint for CreateProductEndpoint {
    fn descriptor(&self) -> &'static RouteDescriptor {
        &CREATE_PRODUCT
    }

    fn register(&self, router: Router<Arc<AppState>>) -> Router<Arc<AppState>> {
        router.route(CREATE_PRODUCT.path, post(create))
    }
}

/// Location of a product resource.
pub fn location(response: &CreateProductResponse) -> String {
    format!("{API_PREFIX}/products/{}", response.id)
}

/// POST /api/v1/products — create a product.
#[tracing::instrument(skip_all, fields(instance = %instance.as_str()))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    instance: Instance,
    body: Result<Json<CreateProduct>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(command) =
        body.map_err(|rejection| ApiError::bad_request(instance.as_str(), rejection.body_text()))?;

    let outcome = state
        .mediator
        .send(command)
        .await
        .map_err(|e| ApiError::internal(instance.as_str(), e))?;

    match outcome {
        Outcome::Success(created) => {
            let location = location(&created);
            Ok((
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(created),
            )
                .into_response())
        }
        Outcome::Errors(errors) => Err(ApiError::Rejected {
            instance: instance.0,
            errors,
        }),
    }
}

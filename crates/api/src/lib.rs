//! HTTP API server for the product catalog.
//!
//! Serves `POST /api/v1/products` through the command pipeline, with
//! structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use domain::{Mediator, Product};
use metrics_exporter_prometheus::PrometheusHandle;
use store::{EntityStore, InMemoryStore};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;

/// Shared state for the HTTP handlers.
pub struct AppState {
    pub mediator: Mediator,
    pub products: Arc<dyn EntityStore<Product>>,
}

impl AppState {
    /// Wires the mediator and the health check to the same product store.
    pub fn new<S>(products: S) -> Self
    where
        S: EntityStore<Product> + 'static,
    {
        let products: Arc<dyn EntityStore<Product>> = Arc::new(products);
        Self {
            mediator: Mediator::new(products.clone()),
            products,
        }
    }
}

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/", get(routes::root))
        .route("/health", get(routes::health::check))
        .nest(routes::API_PREFIX, routes::api_router())
        .with_state(state)
        .merge(metrics_router)
        .layer(axum::middleware::from_fn(middleware::fault_barrier))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the default application state over a fresh in-memory store.
///
/// The returned store shares its records with the state.
pub fn create_default_state(config: &Config) -> (Arc<AppState>, InMemoryStore<Product>) {
    let store = InMemoryStore::with_unique_constraint(config.enforce_unique_names);
    let state = Arc::new(AppState::new(store.clone()));
    (state, store)
}

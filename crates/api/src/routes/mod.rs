//! HTTP routes.
//!
//! Business endpoints are listed explicitly in [`ENDPOINTS`]; `create_app`
//! mounts each of them under [`API_PREFIX`]. Each endpoint also carries a
//! [`RouteDescriptor`] describing the responses it declares. Descriptors are
//! documentation only and do not change runtime behaviour.

pub mod health;
pub mod metrics;
pub mod products;

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::response::Redirect;
use serde::Serialize;

use crate::AppState;

/// Path prefix of the versioned API.
pub const API_PREFIX: &str = "/api/v1";

/// A status code an endpoint may answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeclaredResponse {
    pub status: u16,
    pub description: &'static str,
}

impl DeclaredResponse {
    pub const fn new(status: u16) -> Self {
        Self {
            status,
            description: describe_status(status),
        }
    }
}

/// Standard description for a declared status code.
pub const fn describe_status(status: u16) -> &'static str {
    match status {
        200 => "The request succeeded.",
        201 => "The resource was successfully created.",
        400 => "Validation failed. Please check the provided data.",
        404 => "The requested resource could not be found.",
        409 => "A conflict occurred, such as a duplicate resource.",
        500 => "An unexpected error occurred on the server.",
        _ => "",
    }
}

/// Documentation metadata for one endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct RouteDescriptor {
    pub method: &'static str,
    /// Path relative to [`API_PREFIX`].
    pub path: &'static str,
    pub name: &'static str,
    pub tag: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub responses: &'static [DeclaredResponse],
}

/// An endpoint that knows how to describe and mount itself.
pub trait Endpoint: Send + Sync {
    fn descriptor(&self) -> &'static RouteDescriptor;

    fn register(&self, router: Router<Arc<AppState>>) -> Router<Arc<AppState>>;
}

/// Every business endpoint served under [`API_PREFIX`].
pub static ENDPOINTS: &[&dyn Endpoint] = &[&products::CreateProductEndpoint];

/// Mounts every endpoint in [`ENDPOINTS`] on a fresh router.
pub fn api_router() -> Router<Arc<AppState>> {
    ENDPOINTS
        .iter()
        .fold(Router::new(), |router, endpoint| endpoint.register(router))
        .route("/routes", axum::routing::get(list))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteTable {
    pub base_path: &'static str,
    pub routes: Vec<&'static RouteDescriptor>,
}

/// GET /api/v1/routes — lists the registered endpoints.
pub async fn list() -> Json<RouteTable> {
    Json(RouteTable {
        base_path: API_PREFIX,
        routes: ENDPOINTS.iter().map(|e| e.descriptor()).collect(),
    })
}

/// GET / — sends callers to the route table.
pub async fn root() -> Redirect {
    Redirect::temporary(&format!("{API_PREFIX}/routes"))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn endpoint_names_and_routes_are_unique() {
        let mut names = HashSet::new();
        let mut routes = HashSet::new();
        for endpoint in ENDPOINTS {
            let d = endpoint.descriptor();
            assert!(names.insert(d.name), "duplicate name {}", d.name);
            assert!(routes.insert((d.method, d.path)), "duplicate route {} {}", d.method, d.path);
        }
    }

    #[test]
    fn every_declared_status_has_a_description() {
        for endpoint in ENDPOINTS {
            for response in endpoint.descriptor().responses {
                assert!(
                    !response.description.is_empty(),
                    "status {} undocumented",
                    response.status
                );
            }
        }
    }

    #[test]
    fn unknown_status_has_empty_description() {
        assert_eq!(describe_status(418), "");
        assert_eq!(DeclaredResponse::new(409).description, describe_status(409));
    }
}

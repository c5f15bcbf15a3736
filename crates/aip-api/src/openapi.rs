//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented routes into an OpenAPI spec served
//! at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the resolver surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "AIP Resolver API",
        description = "Resolves archival package identifiers (UUID or name) to their canonical UUID, derived name, master-file path, and administrative URL.",
        license(name = "MIT")
    ),
    paths(crate::routes::resolve::resolve_package),
    components(schemas(
        aip_core::Resolution,
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "packages", description = "Package identifier resolution"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

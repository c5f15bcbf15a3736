//! Package identifier resolution endpoint.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use aip_core::Resolution;

use crate::error::AppError;
use crate::state::AppState;

/// Build the resolution router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/packages/:id", get(resolve_package))
}

/// GET /api/packages/{id} — Resolve a package identifier.
///
/// The identifier may be a package UUID (any letter case) or a package
/// name; anything that does not parse as a UUID is treated as a name.
#[utoipa::path(
    get,
    path = "/api/packages/{id}",
    params(
        ("id" = String, Path, description = "Package UUID or name"),
    ),
    responses(
        (status = 200, description = "Resolved package", body = Resolution),
        (status = 404, description = "No single package matches the identifier", body = crate::error::ErrorBody),
        (status = 500, description = "A backing source failed", body = crate::error::ErrorBody),
    ),
    tag = "packages"
)]
pub async fn resolve_package(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Resolution>, AppError> {
    tracing::info!(identifier = id, "resolving package identifier");
    let resolution = state.resolver.resolve(&id).await?;
    Ok(Json(resolution))
}

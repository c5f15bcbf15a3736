//! # aip-api — Archival Package Resolver Service
//!
//! HTTP service that resolves an archival-package identifier (UUID or
//! name) to its canonical UUID, derived name, master-file path, and an
//! administrative URL. Metadata and location lookups are served either
//! from the archive databases directly or from the archive's remote
//! HTTP APIs, selected independently per concern at startup.
//!
//! ## API Surface
//!
//! | Route                  | Module               | Purpose                   |
//! |------------------------|----------------------|---------------------------|
//! | `/api/packages/{id}`   | [`routes::resolve`]  | Identifier resolution     |
//! | `/openapi.json`        | [`openapi`]          | Generated API spec        |
//! | `/health/*`            | (this module)        | Liveness/readiness probes |
//! | `/`                    | (this module)        | Service name and version  |

pub mod bootstrap;
pub mod config;
pub mod db;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod sources;
pub mod state;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
        .merge(routes::resolve::router())
        .merge(openapi::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET / — Service identification.
async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — pings whichever database pools are configured.
///
/// Remote-API backends carry no persistent connection, so a fully
/// API-backed deployment is ready as soon as the process is up.
async fn readiness(State(state): State<AppState>) -> Result<&'static str, StatusCode> {
    if let Some(pool) = &state.metadata_pool {
        sqlx::query("SELECT 1").execute(pool).await.map_err(|err| {
            tracing::warn!(error = %err, "metadata database unreachable");
            StatusCode::SERVICE_UNAVAILABLE
        })?;
    }
    if let Some(pool) = &state.location_pool {
        sqlx::query("SELECT 1").execute(pool).await.map_err(|err| {
            tracing::warn!(error = %err, "location database unreachable");
            StatusCode::SERVICE_UNAVAILABLE
        })?;
    }
    Ok("ready")
}

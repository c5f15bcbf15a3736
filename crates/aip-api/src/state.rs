//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor. Holds the lookup orchestrator with its
//! injected backing sources, plus the database pools (when the database
//! backends are selected) so the readiness probe can ping them.

use std::sync::Arc;

use sqlx::{MySqlPool, SqlitePool};

use aip_core::Resolver;

/// Process-long application state. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// The lookup orchestrator.
    pub resolver: Arc<Resolver>,
    /// Application database pool, present when the metadata backend is
    /// the database.
    pub metadata_pool: Option<MySqlPool>,
    /// Storage-service database pool, present when the location backend
    /// is the database.
    pub location_pool: Option<SqlitePool>,
}

impl AppState {
    pub fn new(
        resolver: Arc<Resolver>,
        metadata_pool: Option<MySqlPool>,
        location_pool: Option<SqlitePool>,
    ) -> Self {
        Self {
            resolver,
            metadata_pool,
            location_pool,
        }
    }
}

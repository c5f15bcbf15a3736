//! # Database resolver backends
//!
//! Read-only sqlx backends for the two resolver contracts:
//!
//! - [`metadata::DbMetadataSource`] — MySQL application database (SIPs table)
//! - [`locations::DbLocationSource`] — SQLite storage-service database
//!   (package/location/space join)
//!
//! Every predicate is bound via placeholders; identifiers and names are
//! never interpolated into SQL text.

pub mod locations;
pub mod metadata;

use std::time::Duration;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

/// Connect to the MySQL application database.
pub async fn init_metadata_pool(url: &str) -> Result<MySqlPool, sqlx::Error> {
    let pool = MySqlPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(url)
        .await?;
    tracing::info!("connected to application database");
    Ok(pool)
}

/// Connect to the SQLite storage-service database.
///
/// Pass `?mode=ro` in the URL to open the file read-only; this service
/// never writes.
pub async fn init_location_pool(url: &str) -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(url)
        .await?;
    tracing::info!("connected to storage-service database");
    Ok(pool)
}

//! Master-file location lookup against the SQLite storage-service database.
//!
//! Joins the package entry to the storage location it currently resides
//! in and the storage space that location belongs to. Only enabled
//! archival-storage locations holding fully ingested archival packages
//! are eligible. The master-file path is the concatenation of the space
//! base path, the location's relative path, a separator, and the
//! package's current relative path.

use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

use aip_core::{single_match, LocationRecord, LocationSource, LookupError, Stage};

const MASTER_FILE_QUERY: &str = "SELECT s.path || l.relative_path || '/' || p.current_path AS master_file \
     FROM locations_package p \
     LEFT JOIN locations_location l ON p.current_location_id = l.uuid \
     LEFT JOIN locations_space s ON l.space_id = s.uuid \
     WHERE l.enabled = 1 AND l.purpose = 'AS' AND p.package_type = 'AIP' \
       AND p.status = 'UPLOADED' AND p.uuid = ?";

/// Location resolver backed by the storage-service database.
#[derive(Debug, Clone)]
pub struct DbLocationSource {
    pool: SqlitePool,
}

impl DbLocationSource {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LocationSource for DbLocationSource {
    async fn resolve_master_file(&self, uuid: &Uuid) -> Result<LocationRecord, LookupError> {
        let rows: Vec<Option<String>> = sqlx::query_scalar(MASTER_FILE_QUERY)
            .bind(uuid.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(uuid = %uuid, error = %e, "storage-service database query failed");
                LookupError::source(Stage::Location, e)
            })?;

        let records = rows
            .into_iter()
            .map(|path| {
                // A NULL concatenation means the space row was missing.
                path.map(|master_file| LocationRecord { master_file })
                    .ok_or_else(|| {
                        LookupError::source(
                            Stage::Location,
                            "location row is missing path components",
                        )
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        single_match(records, Stage::Location)
    }
}

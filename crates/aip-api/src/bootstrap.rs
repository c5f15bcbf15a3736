//! Startup wiring.
//!
//! Builds the backing sources selected by configuration, injects them
//! into the orchestrator, and assembles [`AppState`]. Assumes
//! [`Config::validate`] has already run — backend-conditional options
//! are present by the time this is called.

use std::sync::Arc;

use aip_client::{ApiClientError, ArchiveApiConfig, ArchiveClient};
use aip_core::{LocationSource, MetadataSource, Resolver};

use crate::config::{Backend, Config};
use crate::db::{self, locations::DbLocationSource, metadata::DbMetadataSource};
use crate::sources::{RemoteLocationSource, RemoteMetadataSource};
use crate::state::AppState;

/// Startup failures.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("database initialization failed: {0}")]
    Database(#[from] sqlx::Error),
    #[error("API client initialization failed: {0}")]
    Client(#[from] ApiClientError),
}

/// Build the application state from validated configuration.
pub async fn bootstrap(config: &Config) -> Result<AppState, BootstrapError> {
    let mut metadata_pool = None;
    let mut location_pool = None;

    let metadata: Arc<dyn MetadataSource> = match config.metadata_backend {
        Backend::Database => {
            let url = config.metadata_db_url.as_deref().unwrap_or_default();
            let pool = db::init_metadata_pool(url).await?;
            metadata_pool = Some(pool.clone());
            Arc::new(DbMetadataSource::new(pool))
        }
        Backend::Api => Arc::new(RemoteMetadataSource::new(archive_client(config)?)),
    };

    let locations: Arc<dyn LocationSource> = match config.location_backend {
        Backend::Database => {
            let url = config.location_db_url.as_deref().unwrap_or_default();
            let pool = db::init_location_pool(url).await?;
            location_pool = Some(pool.clone());
            Arc::new(DbLocationSource::new(pool))
        }
        Backend::Api => Arc::new(RemoteLocationSource::new(archive_client(config)?)),
    };

    let resolver = Arc::new(Resolver::new(
        metadata,
        locations,
        config.admin_url_template.clone(),
    ));

    Ok(AppState::new(resolver, metadata_pool, location_pool))
}

fn archive_client(config: &Config) -> Result<Arc<ArchiveClient>, ApiClientError> {
    let api_config = ArchiveApiConfig {
        metadata_url_template: config
            .metadata_api_url_template
            .clone()
            .unwrap_or_default(),
        metadata_user: config.metadata_api_user.clone().unwrap_or_default(),
        metadata_key: config.metadata_api_key.clone().unwrap_or_default(),
        storage_url_template: config
            .location_api_url_template
            .clone()
            .unwrap_or_default(),
        storage_user: config.location_api_user.clone().unwrap_or_default(),
        storage_key: config.location_api_key.clone().unwrap_or_default(),
        timeout_secs: config.api_timeout_secs,
    };
    tracing::info!(config = ?api_config, "remote API client configured");
    Ok(Arc::new(ArchiveClient::new(api_config)?))
}

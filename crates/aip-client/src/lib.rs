//! # aip-client — Typed client for the archival package APIs
//!
//! Ergonomic, typed access to the two remote backing APIs of the resolver
//! service:
//!
//! - the **application API** (package metadata, keyed by package UUID)
//! - the **storage-service API** (master-file locations, keyed by UUID)
//!
//! Both endpoints are configured as URL templates with a `{UUID}`
//! placeholder and authenticate with an `Authorization: ApiKey <user>:<key>`
//! header. Responses share the counted-page shape
//! `{meta: {total_count}, objects: [{uuid, current_full_path}, ...]}`.
//!
//! ## Timeout & Retry
//!
//! Every request carries a bounded timeout (default 10 seconds). Retries
//! are NOT built into the client — transient-retry policy belongs to the
//! caller if it wants one.

pub mod config;
pub mod error;
pub mod types;

pub use config::ArchiveApiConfig;
pub use error::ApiClientError;
pub use types::{PackageObject, PackagePage, PageMeta};

use std::time::Duration;

use uuid::Uuid;

/// Placeholder token substituted with the package UUID in endpoint templates.
const UUID_PLACEHOLDER: &str = "{UUID}";

/// Client for the application and storage-service package APIs.
///
/// Cheap to clone; designed to be shared across async tasks.
#[derive(Debug, Clone)]
pub struct ArchiveClient {
    http: reqwest::Client,
    config: ArchiveApiConfig,
}

impl ArchiveClient {
    /// Build a client from configuration.
    pub fn new(config: ArchiveApiConfig) -> Result<Self, ApiClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiClientError::Http {
                endpoint: "client builder".to_string(),
                source: e,
            })?;
        Ok(Self { http, config })
    }

    /// Fetch the metadata page for a package UUID from the application API.
    ///
    /// Calls `GET` on the metadata URL template with `{UUID}` substituted.
    pub async fn package_metadata(&self, uuid: &Uuid) -> Result<PackagePage, ApiClientError> {
        self.fetch_page(
            &self.config.metadata_url_template,
            &self.config.metadata_user,
            &self.config.metadata_key,
            uuid,
            "metadata",
        )
        .await
    }

    /// Fetch the location page for a package UUID from the storage-service API.
    pub async fn package_location(&self, uuid: &Uuid) -> Result<PackagePage, ApiClientError> {
        self.fetch_page(
            &self.config.storage_url_template,
            &self.config.storage_user,
            &self.config.storage_key,
            uuid,
            "storage",
        )
        .await
    }

    async fn fetch_page(
        &self,
        template: &str,
        user: &str,
        key: &str,
        uuid: &Uuid,
        service: &str,
    ) -> Result<PackagePage, ApiClientError> {
        let url = template.replacen(UUID_PLACEHOLDER, &uuid.to_string(), 1);
        let endpoint = format!("GET {service} package {uuid}");

        tracing::debug!(%url, "requesting package page");

        let resp = self
            .http
            .get(&url)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("ApiKey {user}:{key}"),
            )
            .send()
            .await
            .map_err(|e| ApiClientError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiClientError::ApiError {
                endpoint,
                status,
                body,
            });
        }

        resp.json().await.map_err(|e| ApiClientError::Deserialization {
            endpoint,
            source: e,
        })
    }
}

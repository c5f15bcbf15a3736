//! Remote API resolver backends.
//!
//! Wraps [`aip_client::ArchiveClient`] behind the core resolver traits.
//! The counted-page `total_count` drives the same zero/one/many semantics
//! as the database backends. Transport failures, non-2xx statuses, and
//! malformed responses all map to `LookupError::Source` — never to
//! NotFound, which is reserved for a well-formed empty result.
//!
//! The remote APIs are keyed by package UUID; a name-classified
//! identifier cannot be resolved remotely and reports NotFound.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use aip_client::{ApiClientError, ArchiveClient, PackageObject, PackagePage};
use aip_core::{
    derive_package_name, Identifier, LocationRecord, LocationSource, LookupError, MetadataSource,
    PackageRecord, Stage,
};

/// Metadata resolver backed by the application API.
#[derive(Debug, Clone)]
pub struct RemoteMetadataSource {
    client: Arc<ArchiveClient>,
}

impl RemoteMetadataSource {
    pub fn new(client: Arc<ArchiveClient>) -> Self {
        Self { client }
    }
}

/// Location resolver backed by the storage-service API.
#[derive(Debug, Clone)]
pub struct RemoteLocationSource {
    client: Arc<ArchiveClient>,
}

impl RemoteLocationSource {
    pub fn new(client: Arc<ArchiveClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MetadataSource for RemoteMetadataSource {
    async fn resolve_package(&self, id: &Identifier) -> Result<PackageRecord, LookupError> {
        let uuid = match id {
            Identifier::Uuid(uuid) => uuid,
            Identifier::Name(name) => {
                tracing::debug!(name, "remote metadata source resolves UUIDs only");
                return Err(LookupError::NotFound(Stage::Metadata));
            }
        };

        let page = self
            .client
            .package_metadata(uuid)
            .await
            .map_err(|e| map_client_error(e, Stage::Metadata))?;

        let object = single_object(page, Stage::Metadata)?;
        let name = derived_name_from_path(&object);

        Ok(PackageRecord {
            uuid: object.uuid,
            name,
        })
    }
}

#[async_trait]
impl LocationSource for RemoteLocationSource {
    async fn resolve_master_file(&self, uuid: &Uuid) -> Result<LocationRecord, LookupError> {
        let page = self
            .client
            .package_location(uuid)
            .await
            .map_err(|e| map_client_error(e, Stage::Location))?;

        let object = single_object(page, Stage::Location)?;
        let master_file = object.current_full_path.ok_or_else(|| {
            LookupError::source(Stage::Location, "response is missing current_full_path")
        })?;

        Ok(LocationRecord { master_file })
    }
}

fn map_client_error(e: ApiClientError, stage: Stage) -> LookupError {
    tracing::error!(stage = %stage, error = %e, "remote source call failed");
    LookupError::source(stage, e)
}

/// Apply the counted-page zero/one/many semantics.
fn single_object(page: PackagePage, stage: Stage) -> Result<PackageObject, LookupError> {
    match page.meta.total_count {
        0 => Err(LookupError::NotFound(stage)),
        1 => page.objects.into_iter().next().ok_or_else(|| {
            LookupError::source(stage, "page reports one result but carries no objects")
        }),
        n => {
            tracing::warn!(stage = %stage, matches = n, "ambiguous lookup result");
            Err(LookupError::Ambiguous(stage))
        }
    }
}

/// Derive the package name from the final path segment of
/// `current_full_path`, when the response carries one.
fn derived_name_from_path(object: &PackageObject) -> Option<String> {
    object
        .current_full_path
        .as_deref()
        .map(|path| {
            let filename = path.rsplit('/').next().unwrap_or(path);
            derive_package_name(filename, &object.uuid)
        })
        .filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use aip_client::PageMeta;

    use super::*;

    const UUID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

    fn page(total_count: u64, objects: Vec<PackageObject>) -> PackagePage {
        PackagePage {
            meta: PageMeta { total_count },
            objects,
        }
    }

    fn object(path: Option<&str>) -> PackageObject {
        PackageObject {
            uuid: UUID.parse().unwrap(),
            current_full_path: path.map(str::to_string),
        }
    }

    #[test]
    fn empty_page_is_not_found() {
        assert!(matches!(
            single_object(page(0, vec![]), Stage::Metadata),
            Err(LookupError::NotFound(Stage::Metadata))
        ));
    }

    #[test]
    fn multi_result_page_is_ambiguous() {
        let p = page(2, vec![object(None), object(None)]);
        assert!(matches!(
            single_object(p, Stage::Location),
            Err(LookupError::Ambiguous(Stage::Location))
        ));
    }

    #[test]
    fn count_object_mismatch_is_a_source_error() {
        assert!(matches!(
            single_object(page(1, vec![]), Stage::Metadata),
            Err(LookupError::Source { .. })
        ));
    }

    #[test]
    fn name_derives_from_final_path_segment() {
        let obj = object(Some(&format!("/space/rel/path/to/report-{UUID}.7z")));
        assert_eq!(derived_name_from_path(&obj).as_deref(), Some("report"));
    }

    #[test]
    fn missing_path_yields_no_name() {
        assert_eq!(derived_name_from_path(&object(None)), None);
    }
}

//! Resolver contracts and the lookup orchestrator.
//!
//! Each source trait has exactly one contract and interchangeable backing
//! implementations (relational query or remote API call), chosen at
//! startup. The [`Resolver`] sequences classify → metadata → location →
//! assemble and short-circuits on the first failure, propagating it
//! unchanged. No retries at this layer — transient-retry policy, if any,
//! belongs to a backing implementation.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::{LookupError, Stage};
use crate::identifier::Identifier;
use crate::record::{assemble, LocationRecord, PackageRecord, Resolution};

/// Application-side package metadata lookup.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Resolve a classified identifier to exactly one package record.
    ///
    /// Zero matches is `NotFound`, more than one is `Ambiguous` — an
    /// implementation must never silently pick one of several matches.
    async fn resolve_package(&self, id: &Identifier) -> Result<PackageRecord, LookupError>;
}

/// Storage-side master-file location lookup, keyed by canonical UUID only.
#[async_trait]
pub trait LocationSource: Send + Sync {
    /// Resolve a canonical UUID to exactly one master-file location.
    async fn resolve_master_file(&self, uuid: &Uuid) -> Result<LocationRecord, LookupError>;
}

/// Enforce the zero/one/many semantics shared by every backing
/// implementation: zero matches → NotFound, more than one → Ambiguous.
pub fn single_match<T>(mut matches: Vec<T>, stage: Stage) -> Result<T, LookupError> {
    match matches.len() {
        0 => Err(LookupError::NotFound(stage)),
        1 => Ok(matches.remove(0)),
        n => {
            tracing::warn!(stage = %stage, matches = n, "ambiguous lookup result");
            Err(LookupError::Ambiguous(stage))
        }
    }
}

/// The lookup orchestrator.
///
/// Holds its backing sources and the admin-URL template as explicit,
/// process-long dependencies. Lookups are self-contained units of work
/// with no shared mutable state, so a single `Resolver` is safely shared
/// across concurrent requests.
pub struct Resolver {
    metadata: Arc<dyn MetadataSource>,
    locations: Arc<dyn LocationSource>,
    admin_url_template: String,
}

impl Resolver {
    pub fn new(
        metadata: Arc<dyn MetadataSource>,
        locations: Arc<dyn LocationSource>,
        admin_url_template: impl Into<String>,
    ) -> Self {
        Self {
            metadata,
            locations,
            admin_url_template: admin_url_template.into(),
        }
    }

    /// Resolve a raw identifier string to a full [`Resolution`].
    ///
    /// The two backing calls are sequential — the location lookup depends
    /// on the canonical UUID the metadata lookup produces.
    pub async fn resolve(&self, raw: &str) -> Result<Resolution, LookupError> {
        let id = Identifier::classify(raw);
        match &id {
            Identifier::Uuid(uuid) => {
                tracing::debug!(identifier = raw, uuid = %uuid, "looking up by UUID")
            }
            Identifier::Name(_) => {
                tracing::debug!(identifier = raw, "not a UUID; looking up by name")
            }
        }

        let package = self.metadata.resolve_package(&id).await.map_err(|e| {
            tracing::info!(identifier = raw, error = %e, "metadata lookup failed");
            e
        })?;

        let location = self
            .locations
            .resolve_master_file(&package.uuid)
            .await
            .map_err(|e| {
                tracing::info!(uuid = %package.uuid, error = %e, "location lookup failed");
                e
            })?;

        Ok(assemble(&package, &location, &self.admin_url_template))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    const UUID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

    struct FixedMetadata {
        result: fn() -> Result<PackageRecord, LookupError>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl MetadataSource for FixedMetadata {
        async fn resolve_package(&self, _id: &Identifier) -> Result<PackageRecord, LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.result)()
        }
    }

    struct FixedLocation {
        result: fn() -> Result<LocationRecord, LookupError>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl LocationSource for FixedLocation {
        async fn resolve_master_file(&self, _uuid: &Uuid) -> Result<LocationRecord, LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.result)()
        }
    }

    fn found_package() -> Result<PackageRecord, LookupError> {
        Ok(PackageRecord {
            uuid: UUID.parse().unwrap(),
            name: Some("report".to_string()),
        })
    }

    fn found_location() -> Result<LocationRecord, LookupError> {
        Ok(LocationRecord {
            master_file: "/space/rel/path/to/file".to_string(),
        })
    }

    fn resolver(
        metadata: fn() -> Result<PackageRecord, LookupError>,
        location: fn() -> Result<LocationRecord, LookupError>,
    ) -> (Resolver, Arc<FixedMetadata>, Arc<FixedLocation>) {
        let metadata = Arc::new(FixedMetadata {
            result: metadata,
            calls: AtomicUsize::new(0),
        });
        let locations = Arc::new(FixedLocation {
            result: location,
            calls: AtomicUsize::new(0),
        });
        let resolver = Resolver::new(
            metadata.clone(),
            locations.clone(),
            "https://admin.example.edu/archival-storage/{UUID}",
        );
        (resolver, metadata, locations)
    }

    #[tokio::test]
    async fn successful_lookup_assembles_full_resolution() {
        let (resolver, _, _) = resolver(found_package, found_location);
        let resolution = resolver.resolve(UUID).await.unwrap();
        assert_eq!(
            resolution.identifiers,
            vec!["report".to_string(), UUID.to_string()]
        );
        assert_eq!(
            resolution.administrative_url,
            format!("https://admin.example.edu/archival-storage/{UUID}")
        );
        assert_eq!(resolution.master_file, "/space/rel/path/to/file");
    }

    #[tokio::test]
    async fn metadata_not_found_skips_location_lookup() {
        let (resolver, _, locations) = resolver(
            || Err(LookupError::NotFound(Stage::Metadata)),
            found_location,
        );
        let err = resolver.resolve("unknown-name").await.unwrap_err();
        assert!(matches!(err, LookupError::NotFound(Stage::Metadata)));
        assert_eq!(locations.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn location_not_found_is_distinct_from_metadata_stage() {
        let (resolver, _, _) = resolver(found_package, || {
            Err(LookupError::NotFound(Stage::Location))
        });
        let err = resolver.resolve(UUID).await.unwrap_err();
        assert!(matches!(err, LookupError::NotFound(Stage::Location)));
    }

    #[tokio::test]
    async fn source_error_propagates_unchanged() {
        let (resolver, _, _) = resolver(
            || Err(LookupError::source(Stage::Metadata, "timed out")),
            found_location,
        );
        match resolver.resolve(UUID).await.unwrap_err() {
            LookupError::Source { stage, reason } => {
                assert_eq!(stage, Stage::Metadata);
                assert_eq!(reason, "timed out");
            }
            other => panic!("expected Source, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn repeated_lookups_are_idempotent() {
        let (resolver, metadata, _) = resolver(found_package, found_location);
        let first = resolver.resolve(UUID).await.unwrap();
        let second = resolver.resolve(UUID).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(metadata.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn single_match_enforces_one_result() {
        assert!(matches!(
            single_match(Vec::<u8>::new(), Stage::Metadata),
            Err(LookupError::NotFound(Stage::Metadata))
        ));
        assert_eq!(single_match(vec![7], Stage::Metadata).unwrap(), 7);
        assert!(matches!(
            single_match(vec![1, 2], Stage::Location),
            Err(LookupError::Ambiguous(Stage::Location))
        ));
    }
}

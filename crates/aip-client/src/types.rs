//! Counted-page response types shared by both backing APIs.
//!
//! Fields use `#[serde(default)]` for resilience against schema evolution
//! in the live APIs — only the fields this service consumes are modeled,
//! and unknown fields are ignored.

use serde::Deserialize;
use uuid::Uuid;

/// Pagination metadata. Only `total_count` matters here: it drives the
/// zero/one/many result semantics.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub total_count: u64,
}

/// One package object as returned by either API.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageObject {
    pub uuid: Uuid,
    /// Full path of the package file in its current location.
    #[serde(default)]
    pub current_full_path: Option<String>,
}

/// A counted page of package objects.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackagePage {
    #[serde(default)]
    pub meta: PageMeta,
    #[serde(default)]
    pub objects: Vec<PackageObject>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_parses_full_shape() {
        let page: PackagePage = serde_json::from_str(
            r#"{
                "meta": {"total_count": 1, "limit": 20, "offset": 0},
                "objects": [{
                    "uuid": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
                    "current_full_path": "/space/rel/path/to/file",
                    "status": "UPLOADED"
                }]
            }"#,
        )
        .unwrap();
        assert_eq!(page.meta.total_count, 1);
        assert_eq!(page.objects.len(), 1);
        assert_eq!(
            page.objects[0].current_full_path.as_deref(),
            Some("/space/rel/path/to/file")
        );
    }

    #[test]
    fn page_tolerates_missing_fields() {
        let page: PackagePage = serde_json::from_str("{}").unwrap();
        assert_eq!(page.meta.total_count, 0);
        assert!(page.objects.is_empty());
    }
}

//! Domain records and result assembly.
//!
//! [`PackageRecord`] and [`LocationRecord`] are produced once per lookup by
//! the two sources and discarded after the response is built. [`Resolution`]
//! is the assembled unit returned to the caller and serialized to JSON.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Placeholder token substituted with the canonical UUID in URL templates.
pub const UUID_PLACEHOLDER: &str = "{UUID}";

/// One archival package as known to the metadata source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    /// Canonical package UUID as stored by the metadata source.
    pub uuid: Uuid,
    /// Human-readable name derived from the stored filename, when the
    /// lookup path produced one.
    pub name: Option<String>,
}

/// Physical location of a package's master file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationRecord {
    /// Full file-system path to the master file.
    pub master_file: String,
}

/// The assembled lookup result returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    /// Known identifiers, insertion order meaningful: derived name first
    /// when known, then the canonical UUID. Never empty.
    pub identifiers: Vec<String>,
    /// Management UI link for the package.
    pub administrative_url: String,
    /// Full path to the package's master file.
    pub master_file: String,
}

/// Derive a package name from a stored filename.
///
/// The filename is expected to be `name.ext` or `name-<uuid>.ext`: the
/// embedded `-<uuid>` is removed if present, then the extension is dropped
/// by truncating at the last `.` — but only when the dot is past position
/// zero, so a leading-dot filename survives intact.
pub fn derive_package_name(filename: &str, uuid: &Uuid) -> String {
    let name = filename.replacen(&format!("-{uuid}"), "", 1);
    match name.rfind('.') {
        Some(dot) if dot > 0 => name[..dot].to_string(),
        _ => name,
    }
}

/// Combine metadata and location into the final [`Resolution`].
///
/// Pure function, cannot fail. The administrative URL is the template with
/// its first `{UUID}` placeholder replaced by the canonical UUID.
pub fn assemble(
    package: &PackageRecord,
    location: &LocationRecord,
    admin_url_template: &str,
) -> Resolution {
    let mut identifiers = Vec::with_capacity(2);
    if let Some(name) = &package.name {
        identifiers.push(name.clone());
    }
    identifiers.push(package.uuid.to_string());

    Resolution {
        identifiers,
        administrative_url: admin_url_template.replacen(UUID_PLACEHOLDER, &package.uuid.to_string(), 1),
        master_file: location.master_file.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uuid() -> Uuid {
        "3fa85f64-5717-4562-b3fc-2c963f66afa6".parse().unwrap()
    }

    #[test]
    fn derive_name_strips_uuid_suffix_and_extension() {
        assert_eq!(
            derive_package_name("report-3fa85f64-5717-4562-b3fc-2c963f66afa6.7z", &uuid()),
            "report"
        );
    }

    #[test]
    fn derive_name_strips_extension_only() {
        assert_eq!(derive_package_name("report.7z", &uuid()), "report");
    }

    #[test]
    fn derive_name_keeps_filename_without_dot() {
        assert_eq!(derive_package_name("report", &uuid()), "report");
    }

    #[test]
    fn derive_name_tolerates_leading_dot() {
        // The dot at position zero is not an extension separator.
        assert_eq!(derive_package_name(".hidden", &uuid()), ".hidden");
    }

    #[test]
    fn derive_name_drops_only_last_extension() {
        assert_eq!(derive_package_name("report.tar.gz", &uuid()), "report.tar");
    }

    #[test]
    fn assemble_orders_name_before_uuid() {
        let package = PackageRecord {
            uuid: uuid(),
            name: Some("report".to_string()),
        };
        let location = LocationRecord {
            master_file: "/space/rel/path/to/file".to_string(),
        };
        let resolution = assemble(
            &package,
            &location,
            "https://admin.example.edu/archival-storage/{UUID}",
        );
        assert_eq!(
            resolution.identifiers,
            vec![
                "report".to_string(),
                "3fa85f64-5717-4562-b3fc-2c963f66afa6".to_string()
            ]
        );
        assert_eq!(
            resolution.administrative_url,
            "https://admin.example.edu/archival-storage/3fa85f64-5717-4562-b3fc-2c963f66afa6"
        );
        assert_eq!(resolution.master_file, "/space/rel/path/to/file");
    }

    #[test]
    fn assemble_without_name_yields_uuid_alone() {
        let package = PackageRecord {
            uuid: uuid(),
            name: None,
        };
        let location = LocationRecord {
            master_file: "/space/file".to_string(),
        };
        let resolution = assemble(&package, &location, "{UUID}");
        assert_eq!(
            resolution.identifiers,
            vec!["3fa85f64-5717-4562-b3fc-2c963f66afa6".to_string()]
        );
        assert!(!resolution.identifiers.is_empty());
    }

    #[test]
    fn resolution_serializes_camel_case() {
        let resolution = Resolution {
            identifiers: vec!["report".to_string()],
            administrative_url: "https://admin.example.edu/x".to_string(),
            master_file: "/space/file".to_string(),
        };
        let json = serde_json::to_value(&resolution).unwrap();
        assert!(json.get("administrativeUrl").is_some());
        assert!(json.get("masterFile").is_some());
        assert!(json.get("identifiers").is_some());
    }
}

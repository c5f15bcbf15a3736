//! # aip-core — Archival Package Identifier Resolution
//!
//! Core lookup logic for resolving an archival-package identifier (a UUID
//! or a free-text name) to its canonical UUID, derived name, master-file
//! path, and administrative URL.
//!
//! ## Architecture
//!
//! ```text
//! raw identifier
//!   → Identifier::classify          (UUID vs. name, no I/O)
//!   → MetadataSource::resolve_package   (application-side source)
//!   → LocationSource::resolve_master_file (storage-side source, by UUID only)
//!   → assemble                      (pure; admin URL template substitution)
//! ```
//!
//! The two source traits each have interchangeable backing implementations
//! (relational query or remote API call) selected at startup; the
//! [`Resolver`] orchestrator depends only on the trait contracts. Every
//! failure mode is one of the three [`LookupError`] variants, tagged with
//! the [`Stage`] that produced it, and propagates unchanged to the caller —
//! partial results are never returned.

pub mod error;
pub mod identifier;
pub mod record;
pub mod resolve;

pub use error::{LookupError, Stage};
pub use identifier::Identifier;
pub use record::{derive_package_name, LocationRecord, PackageRecord, Resolution};
pub use resolve::{single_match, LocationSource, MetadataSource, Resolver};

//! # API Route Modules
//!
//! - `resolve` — the single read operation: resolve a package identifier
//!   (UUID or name) to its canonical UUID, derived name, master-file
//!   path, and administrative URL.

pub mod resolve;

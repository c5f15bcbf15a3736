//! Archive API client configuration.
//!
//! URL templates and credential pairs for the two backing APIs. The
//! custom `Debug` implementation redacts both API keys to prevent
//! credential leakage in log output.

/// Configuration for connecting to the application and storage-service APIs.
#[derive(Clone)]
pub struct ArchiveApiConfig {
    /// Application API endpoint template with a `{UUID}` placeholder.
    pub metadata_url_template: String,
    /// Application API user.
    pub metadata_user: String,
    /// Application API key.
    pub metadata_key: String,
    /// Storage-service API endpoint template with a `{UUID}` placeholder.
    pub storage_url_template: String,
    /// Storage-service API user.
    pub storage_user: String,
    /// Storage-service API key.
    pub storage_key: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

/// Default outbound request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

impl std::fmt::Debug for ArchiveApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArchiveApiConfig")
            .field("metadata_url_template", &self.metadata_url_template)
            .field("metadata_user", &self.metadata_user)
            .field("metadata_key", &"[REDACTED]")
            .field("storage_url_template", &self.storage_url_template)
            .field("storage_user", &self.storage_user)
            .field("storage_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

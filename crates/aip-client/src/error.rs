//! Archive API client error types.

/// Errors from application or storage-service API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    /// HTTP transport error (connection failure, timeout).
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The API returned a non-2xx status.
    #[error("{endpoint} returned {status}: {body}")]
    ApiError {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: reqwest::Error,
    },
}

impl ApiClientError {
    /// True when the failure was a request timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Http { source, .. } => source.is_timeout(),
            _ => false,
        }
    }
}

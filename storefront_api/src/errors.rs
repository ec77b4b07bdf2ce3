//! Error types for the API client.

/// Errors that can occur when talking to the storefront backend.
///
/// Status codes are classified here, at the transport boundary, so callers
/// never have to string-match error messages to tell "server down" from
/// "record missing".
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The configured base URL (or a path joined onto it) is not a valid URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    /// A transport-level failure: connection refused, DNS, timeout.
    #[error("network error")]
    Network(#[from] reqwest::Error),
    /// The backend rejected the credentials or the bearer token (HTTP 401).
    #[error("unauthorized")]
    Unauthorized,
    /// The requested record does not exist (HTTP 404).
    #[error("not found")]
    NotFound,
    /// The backend failed (HTTP 5xx) with a body snippet for diagnostics.
    #[error("server error (HTTP {status})")]
    Server { status: u16, body: String },
    /// Any other non-success status.
    #[error("request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response was 2xx but its body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

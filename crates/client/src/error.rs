use std::time::Duration;

use habitica_core::CoreError;

use crate::rate_limit::RateLimitInfo;

/// Errors surfaced by the Habitica API client.
///
/// Wraps [`CoreError`] for validation and decode failures and adds the
/// transport-level and server-rejection variants. Server rejections carry
/// the decoded server message and the rate-limit headers of the response.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A validation or decode error from `habitica_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The HTTP round trip itself failed (DNS, connect, timeout, body
    /// read). Distinct from the server rejecting the request.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server rejected the request as unauthorized (401 or 403).
    #[error("Unauthorized ({status}): {message}")]
    Unauthorized {
        status: u16,
        message: String,
        rate_limit: RateLimitInfo,
    },

    /// The server throttled the request (429). `retry_after` is the
    /// parsed `retry-after` header when the server sent one; the client
    /// never retries on its own.
    #[error("Rate limited: {message}")]
    RateLimited {
        retry_after: Option<Duration>,
        message: String,
        rate_limit: RateLimitInfo,
    },

    /// Any other non-2xx response.
    #[error("Request failed ({status}): {message}")]
    RequestFailed {
        status: u16,
        message: String,
        rate_limit: RateLimitInfo,
    },
}

/// Convenience alias for client call results.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// The rate-limit headers of the rejecting response, if this error
    /// came from a server rejection.
    pub fn rate_limit(&self) -> Option<&RateLimitInfo> {
        match self {
            ApiError::Unauthorized { rate_limit, .. }
            | ApiError::RateLimited { rate_limit, .. }
            | ApiError::RequestFailed { rate_limit, .. } => Some(rate_limit),
            ApiError::Core(_) | ApiError::Network(_) => None,
        }
    }
}

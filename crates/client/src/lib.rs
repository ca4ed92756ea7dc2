//! Asynchronous client for the Habitica v3 REST API.
//!
//! Wraps an injected [`reqwest::Client`] with typed request and response
//! mapping: one method per endpoint, argument validation before any
//! round trip, and a typed error taxonomy with rate-limit state attached
//! to server rejections. See [`HabiticaApi`] for the full surface.

pub mod api;
pub mod config;
pub mod error;
pub mod rate_limit;

pub use api::{GroupMembersQuery, HabiticaApi};
pub use config::{HabiticaConfig, DEFAULT_BASE_URL};
pub use error::{ApiError, ApiResult};
pub use rate_limit::RateLimitInfo;

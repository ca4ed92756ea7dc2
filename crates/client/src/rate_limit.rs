//! Rate-limit header parsing.
//!
//! Habitica sends `x-ratelimit-limit`, `x-ratelimit-remaining`,
//! `x-ratelimit-reset` and (on 429) `retry-after` on every response.
//! The reset timestamp is a JavaScript date string, not ISO-8601.

use std::time::Duration;

use chrono::{DateTime, Utc};
use habitica_core::model::parse_js_datetime;
use reqwest::header::HeaderMap;

/// Rate-limit state reported by the server on a single response.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RateLimitInfo {
    /// Requests allowed per window.
    pub limit: Option<u32>,
    /// Requests remaining in the current window.
    pub remaining: Option<u32>,
    /// When the current window resets.
    pub reset: Option<DateTime<Utc>>,
    /// How long to wait before retrying; only sent with 429 responses.
    pub retry_after: Option<Duration>,
}

impl RateLimitInfo {
    /// Parse the rate-limit headers from a response, tolerating absent
    /// or malformed values.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let get = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());

        RateLimitInfo {
            limit: get("x-ratelimit-limit").and_then(|v| v.parse().ok()),
            remaining: get("x-ratelimit-remaining").and_then(|v| v.parse().ok()),
            reset: get("x-ratelimit-reset").and_then(|v| {
                DateTime::parse_from_rfc3339(v)
                    .ok()
                    .map(|dt| dt.with_timezone(&Utc))
                    .or_else(|| parse_js_datetime(v))
            }),
            retry_after: get("retry-after")
                .and_then(|v| v.parse::<f64>().ok())
                .filter(|secs| *secs >= 0.0)
                .map(Duration::from_secs_f64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn parses_all_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-limit", HeaderValue::from_static("30"));
        headers.insert("x-ratelimit-remaining", HeaderValue::from_static("27"));
        headers.insert(
            "x-ratelimit-reset",
            HeaderValue::from_static("Mon May 06 2024 00:01:00 GMT+0000 (Coordinated Universal Time)"),
        );
        headers.insert("retry-after", HeaderValue::from_static("2.5"));

        let info = RateLimitInfo::from_headers(&headers);
        assert_eq!(info.limit, Some(30));
        assert_eq!(info.remaining, Some(27));
        assert!(info.reset.is_some());
        assert_eq!(info.retry_after, Some(Duration::from_secs_f64(2.5)));
    }

    #[test]
    fn absent_headers_parse_to_none() {
        let info = RateLimitInfo::from_headers(&HeaderMap::new());
        assert_eq!(info, RateLimitInfo::default());
    }

    #[test]
    fn malformed_values_are_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-limit", HeaderValue::from_static("soon"));
        headers.insert("retry-after", HeaderValue::from_static("-3"));
        let info = RateLimitInfo::from_headers(&headers);
        assert_eq!(info.limit, None);
        assert_eq!(info.retry_after, None);
    }
}

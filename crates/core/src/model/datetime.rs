//! Tolerant timestamp parsing for Habitica wire dates.
//!
//! Most timestamps are ISO-8601 and handled by chrono's serde support.
//! Two fields need more care: task history entries may carry an epoch in
//! milliseconds, and `nextDue` entries from servers older than v5.28.9
//! may be JavaScript date strings ("Mon May 06 2024 00:00:00 GMT+0200").

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Length of the parseable prefix of a JavaScript date string; anything
/// beyond it is a repeated timezone name ("(Central European Time)").
const JS_DATE_LEN: usize = 33;

/// Parse a JavaScript date string of the form
/// `Mon May 06 2024 00:00:00 GMT+0200`.
pub fn parse_js_datetime(value: &str) -> Option<DateTime<Utc>> {
    let prefix = if value.len() > JS_DATE_LEN {
        value.get(..JS_DATE_LEN)?
    } else {
        value
    };
    DateTime::parse_from_str(prefix.trim(), "%a %b %d %Y %H:%M:%S GMT%z")
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Parse a wire value that may be an ISO string, a JavaScript date string,
/// or an epoch in milliseconds. Returns `None` for anything unparseable.
pub(crate) fn parse_flexible(value: &serde_json::Value) -> Option<DateTime<Utc>> {
    match value {
        serde_json::Value::Number(n) => {
            let millis = n.as_i64()?;
            DateTime::from_timestamp_millis(millis)
        }
        serde_json::Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
            .or_else(|| parse_js_datetime(s)),
        _ => None,
    }
}

/// Deserialize a required timestamp that may be ISO or epoch-milliseconds.
pub(crate) fn deserialize_flexible<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    parse_flexible(&raw).ok_or_else(|| serde::de::Error::custom("unrecognized timestamp format"))
}

/// Deserialize a list of timestamps, silently dropping unparseable entries.
pub(crate) fn deserialize_flexible_list<'de, D>(
    deserializer: D,
) -> Result<Vec<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<serde_json::Value> = Vec::deserialize(deserializer)?;
    Ok(raw.iter().filter_map(parse_flexible).collect())
}

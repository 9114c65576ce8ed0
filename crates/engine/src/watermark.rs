use crate::error::ConfigError;
use chrono::{DateTime, NaiveDateTime};

/// Canonicalizes the caller-supplied watermark to RFC 3339 before the first
/// page request. Offset-less timestamps are read as UTC.
pub fn normalize(raw: &str) -> Result<String, ConfigError> {
    let raw = raw.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.to_rfc3339());
    }
    if let Ok(ts) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S %z") {
        return Ok(ts.to_rfc3339());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Ok(naive.and_utc().to_rfc3339());
    }

    Err(ConfigError::InvalidWatermark(raw.to_string()))
}

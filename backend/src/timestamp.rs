// src/timestamp.rs
//
// Text form of record timestamps as kept in stored documents.
//
// Documents carry ISO-8601 text with microsecond precision and an explicit
// "+00:00" offset, e.g. "2024-05-01T09:30:00.123456+00:00". Reading back also
// accepts any RFC 3339 offset and naive datetimes (taken as UTC).

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("invalid ISO-8601 timestamp '{0}'")]
pub struct TimestampError(pub String);

/// Render a timestamp the way it is written into a document.
pub fn to_iso(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Parse a stored timestamp back into UTC.
pub fn parse_iso(raw: &str) -> Result<DateTime<Utc>, TimestampError> {
    let raw = raw.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }

    // Naive forms carry no offset; stored records are always UTC.
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(naive.and_utc());
        }
    }

    Err(TimestampError(raw.to_string()))
}

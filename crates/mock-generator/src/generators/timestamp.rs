//! Timestamp value generators.

use chrono::{DateTime, TimeDelta, Utc};
use mock_core::MockValue;

/// Seconds between consecutive indices.
pub const SECONDS_PER_INDEX: i64 = 1000;

/// Generate the instant `index * 1000` seconds after `base`.
///
/// Saturates at `base` when the offset leaves chrono's representable range.
pub fn generate_offset_timestamp(base: DateTime<Utc>, index: u64) -> MockValue {
    let offset = i64::try_from(index)
        .ok()
        .and_then(|i| i.checked_mul(SECONDS_PER_INDEX))
        .and_then(TimeDelta::try_seconds);

    let instant = offset
        .and_then(|delta| base.checked_add_signed(delta))
        .unwrap_or(base);
    MockValue::DateTime(instant)
}

/// Parse a timestamp string in various formats.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    // Try RFC 3339 / ISO 8601
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    // Try common date-only format
    if let Ok(date) = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }

    None
}

//! UTC timestamps in ISO-8601 form.

use chrono::{DateTime, Utc};

/// ISO-8601 layout with second precision and no offset suffix.
const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Current UTC time, e.g. `"2024-03-09T17:04:05"`.
///
/// Sub-second precision is dropped and no `Z`/offset is appended, even
/// though the value is always UTC.
pub fn timestamp() -> String {
    format_timestamp(Utc::now())
}

/// Format an arbitrary UTC instant the same way [`timestamp`] does.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(FORMAT).to_string()
}

use chrono::{Local, NaiveDateTime};

/// Layout of every timestamp written to the mood log, e.g. `2025-08-15 21:04:33`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Local wall-clock time in [`TIMESTAMP_FORMAT`].
pub fn now_timestamp() -> String {
    format_timestamp(Local::now().naive_local())
}

/// Parses a stored timestamp back into a `NaiveDateTime`.
///
/// Returns `None` for anything that doesn't follow [`TIMESTAMP_FORMAT`]; legacy
/// records may carry free-form or missing timestamps and callers keep them as text.
///
/// # Examples
///
/// ```
/// # use mindlog_core::dates::parse_timestamp;
/// let at = parse_timestamp("2025-08-15 21:04:33").unwrap();
/// assert_eq!(at.to_string(), "2025-08-15 21:04:33");
/// assert!(parse_timestamp("last tuesday").is_none());
/// ```
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT).ok()
}

use chrono::{DateTime, NaiveDate};

/// Strip all whitespace from an operator-facing identity string.
///
/// The subject-management systems key on the compacted handle, so
/// `"Jane Doe"` must go over the wire as `"JaneDoe"`. Idempotent on
/// already-normalized input.
#[inline]
pub fn normalize_subject_name(name: &str) -> String {
    name.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Human-readable rendering of a customer status value.
#[inline]
pub fn format_status(status: &str) -> String {
    match status {
        "in_progress" => "In Progress".to_string(),
        other => other.to_string(),
    }
}

/// Render a backend date or timestamp as `dd/mm/yyyy`, `N/A` when missing
/// or unparseable. The store mixes RFC 3339 timestamps and bare dates.
pub fn format_date(value: &str) -> String {
    if value.is_empty() {
        return "N/A".to_string();
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return timestamp.format("%d/%m/%Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.format("%d/%m/%Y").to_string();
    }
    "N/A".to_string()
}

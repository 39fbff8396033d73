use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%d.%m.%Y";

/// Formats a transfer date as `DD.MM.YYYY`.
///
/// Accepts plain ISO dates, RFC 3339 timestamps and naive `T`-separated
/// timestamps. Input that matches none of them is returned unchanged.
pub fn format_transfer_date(raw: &str) -> String {
    let trimmed = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.format(DISPLAY_FORMAT).to_string();
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return dt.date_naive().format(DISPLAY_FORMAT).to_string();
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return dt.date().format(DISPLAY_FORMAT).to_string();
    }

    tracing::debug!("Unrecognized transfer date, showing as-is: {:?}", raw);
    raw.to_string()
}

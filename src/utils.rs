use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

// Fixed two-decimal rendering used for every amount on screen
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

// Offset-less layouts as written by `timestamp without time zone` columns
const NAIVE_TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses a stored `creado_en` value. RFC 3339 first, then Postgres text
/// output with a short offset, then offset-less timestamps taken as UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.with_timezone(&Utc));
    }
    if let Ok(timestamp) = DateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Some(timestamp.with_timezone(&Utc));
    }

    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
}

// Short date used on cards and notifications
pub fn format_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%d/%m/%Y %H:%M").to_string()
}

// Long date used on the detail screen
pub fn format_date_long(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%d/%m/%Y %H:%M:%S UTC").to_string()
}

/// Lowercases a raw search box value. Returns `None` for an empty query,
/// meaning "no search filter". Whitespace is significant.
pub fn normalize_query(query: &str) -> Option<String> {
    if query.is_empty() {
        None
    } else {
        Some(query.to_lowercase())
    }
}

// Shortens long fingerprints for single-line display
pub fn truncate_middle(value: &str, max_chars: usize) -> String {
    let count = value.chars().count();
    if count <= max_chars || max_chars < 3 {
        return value.to_string();
    }

    let keep = max_chars - 1;
    let head: String = value.chars().take(keep - keep / 2).collect();
    let tail: String = value.chars().skip(count - keep / 2).collect();
    format!("{}…{}", head, tail)
}

// src/modules/portfolio/domain/formatting.rs

use chrono::{DateTime, NaiveDate};
use serde::Serialize;

pub const PRESENT: &str = "Present";

/// Icons the contact section knows how to draw.
const KNOWN_ICONS: [&str; 6] = ["Mail", "Phone", "Github", "Linkedin", "Twitter", "Globe"];
const DEFAULT_ICON: &str = "Mail";

/// Accepts `YYYY-MM-DD` (postgres `date`) and falls back to RFC 3339.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// `"Jan 2024"`, or the raw input when it cannot be parsed.
pub fn month_year(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%b %Y").to_string(),
        None => raw.to_string(),
    }
}

/// `"<start> - <end | Present>"`.
pub fn period_label(start_date: &str, end_date: Option<&str>, is_current: bool) -> String {
    let end = match end_date {
        Some(end) if !is_current && !end.trim().is_empty() => month_year(end),
        _ => PRESENT.to_string(),
    };
    format!("{} - {}", month_year(start_date), end)
}

pub fn years_label(start_year: Option<i32>, end_year: Option<i32>, is_current: bool) -> Option<String> {
    match (start_year, end_year) {
        (Some(start), Some(end)) => {
            let end = if is_current { PRESENT.to_string() } else { end.to_string() };
            Some(format!("{} - {}", start, end))
        }
        (Some(year), None) | (None, Some(year)) => Some(year.to_string()),
        (None, None) => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExpiryStatus {
    Valid,
    Expired,
}

/// A certificate expiring today is already expired: the expiry date is
/// compared as midnight against the current instant.
/// Blank strings count as absent.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn expiry_status(expiry_date: Option<&str>, today: NaiveDate) -> Option<ExpiryStatus> {
    match parse_date(non_blank(expiry_date)?) {
        Some(expiry) if expiry <= today => Some(ExpiryStatus::Expired),
        _ => Some(ExpiryStatus::Valid),
    }
}

pub fn contact_icon(icon: Option<&str>) -> &'static str {
    icon.and_then(|name| KNOWN_ICONS.iter().copied().find(|known| *known == name))
        .unwrap_or(DEFAULT_ICON)
}

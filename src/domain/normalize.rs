//! Raw disclosure text to typed values.
//!
//! Filing feeds render quantities as `+12,500`, prices as `$4.25` and dates
//! either as `2025-06-10` or `2025-06-12 16:05:31`. These helpers strip the
//! decoration and fail with [`InsiderError::Normalize`] rather than guessing.

use crate::domain::error::InsiderError;
use chrono::{NaiveDate, NaiveDateTime};

fn normalize_error(field: &str, value: &str, reason: impl Into<String>) -> InsiderError {
    InsiderError::Normalize {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Parse a share quantity, dropping `+` and thousands separators.
///
/// Sales are reported with a leading `-`; the magnitude is returned since the
/// direction already lives in the trade type.
pub fn parse_shares(raw: &str) -> Result<u64, InsiderError> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, '+' | ','))
        .collect();
    let digits = cleaned.strip_prefix('-').unwrap_or(&cleaned);
    if digits.is_empty() {
        return Err(normalize_error("shares", raw, "empty quantity"));
    }
    digits
        .parse::<u64>()
        .map_err(|e| normalize_error("shares", raw, e.to_string()))
}

/// Parse a price, dropping `$` and thousands separators.
pub fn parse_price(raw: &str) -> Result<f64, InsiderError> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ','))
        .collect();
    if cleaned.is_empty() {
        return Err(normalize_error("price", raw, "empty price"));
    }
    let price: f64 = cleaned
        .parse()
        .map_err(|e: std::num::ParseFloatError| normalize_error("price", raw, e.to_string()))?;
    if !price.is_finite() || price < 0.0 {
        return Err(normalize_error("price", raw, "must be a non-negative number"));
    }
    Ok(price)
}

/// Parse `YYYY-MM-DD`, optionally followed by ` HH:MM:SS`.
pub fn parse_date(field: &str, raw: &str) -> Result<NaiveDate, InsiderError> {
    let trimmed = raw.trim();
    if let Ok(d) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(d);
    }
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S")
        .map(|dt| dt.date())
        .map_err(|_| normalize_error(field, raw, "expected YYYY-MM-DD"))
}

/// Replace non-breaking spaces and trim a column header.
pub fn normalize_header(header: &str) -> String {
    header.replace('\u{a0}', " ").trim().to_string()
}

//! Configuration validation.
//!
//! Checks every scan setting before any data is fetched.

use crate::domain::error::InsiderError;
use crate::domain::feed::parse_feeds;
use crate::ports::config_port::ConfigPort;

/// Accepted boolean spellings, case-insensitive.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

pub fn validate_scan_config(config: &dyn ConfigPort) -> Result<(), InsiderError> {
    validate_disclosure_dir(config)?;
    validate_feeds(config)?;
    validate_at_least_one(config, "window_days", 7)?;
    validate_at_least_one(config, "min_insiders", 3)?;
    validate_at_least_one(config, "top_n", 5)?;
    validate_at_least_one(config, "price_horizon_days", 5)?;
    validate_notable_min_shares(config)?;
    validate_bool(config, "purchases_only")?;
    validate_bool(config, "notable_only")?;
    Ok(())
}

fn invalid(key: &str, reason: String) -> InsiderError {
    InsiderError::ConfigInvalid {
        section: "scan".to_string(),
        key: key.to_string(),
        reason,
    }
}

fn validate_integer(config: &dyn ConfigPort, key: &str) -> Result<(), InsiderError> {
    match config.get_string("scan", key) {
        Some(raw) if raw.trim().parse::<i64>().is_err() => {
            Err(invalid(key, format!("{} must be an integer", key)))
        }
        _ => Ok(()),
    }
}

fn validate_bool(config: &dyn ConfigPort, key: &str) -> Result<(), InsiderError> {
    match config.get_string("scan", key) {
        Some(raw) if !raw.trim().is_empty() && parse_bool(&raw).is_none() => Err(invalid(
            key,
            format!("{} must be true/false, yes/no, on/off or 1/0, got {:?}", key, raw.trim()),
        )),
        _ => Ok(()),
    }
}

fn validate_disclosure_dir(config: &dyn ConfigPort) -> Result<(), InsiderError> {
    match config.get_path("data", "disclosure_dir") {
        Some(_) => Ok(()),
        None => Err(InsiderError::ConfigMissing {
            section: "data".to_string(),
            key: "disclosure_dir".to_string(),
        }),
    }
}

fn validate_feeds(config: &dyn ConfigPort) -> Result<(), InsiderError> {
    let Some(raw) = config.get_string("scan", "feeds") else {
        return Ok(());
    };
    let feeds = parse_feeds(&raw).map_err(|e| invalid("feeds", e.to_string()))?;
    if feeds.is_empty() {
        return Err(invalid("feeds", "at least one feed is required".to_string()));
    }
    Ok(())
}

fn validate_at_least_one(
    config: &dyn ConfigPort,
    key: &str,
    default: i64,
) -> Result<(), InsiderError> {
    validate_integer(config, key)?;
    if config.get_int("scan", key, default) < 1 {
        return Err(invalid(key, format!("{} must be at least 1", key)));
    }
    Ok(())
}

fn validate_notable_min_shares(config: &dyn ConfigPort) -> Result<(), InsiderError> {
    validate_integer(config, "notable_min_shares")?;
    if config.get_int("scan", "notable_min_shares", 10_000) < 0 {
        return Err(invalid(
            "notable_min_shares",
            "notable_min_shares must be non-negative".to_string(),
        ));
    }
    Ok(())
}

//! Insider-trade disclosure records and their scored form.

use crate::domain::error::InsiderError;
use chrono::NaiveDate;

/// Direction of a disclosed transaction, derived from the free-text trade type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeKind {
    Purchase,
    Sale,
    Other,
}

impl TradeKind {
    /// Case-insensitive substring classification ("P - Purchase", "S - Sale+OE", ...).
    pub fn classify(trade_type: &str) -> Self {
        let lower = trade_type.to_lowercase();
        if lower.contains("purchase") {
            TradeKind::Purchase
        } else if lower.contains("sale") {
            TradeKind::Sale
        } else {
            TradeKind::Other
        }
    }
}

/// One normalized insider transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct DisclosureRecord {
    pub filing_date: NaiveDate,
    pub trade_date: NaiveDate,
    pub ticker: String,
    pub insider_name: String,
    pub title: String,
    pub trade_type: String,
    pub shares: u64,
    pub price: f64,
    /// Label of the feed the record was fetched from, when known.
    pub source: Option<String>,
}

impl DisclosureRecord {
    pub fn kind(&self) -> TradeKind {
        TradeKind::classify(&self.trade_type)
    }

    pub fn is_purchase(&self) -> bool {
        self.kind() == TradeKind::Purchase
    }

    /// shares * price
    pub fn total_value(&self) -> f64 {
        self.shares as f64 * self.price
    }

    /// Reject records that would corrupt scoring. `index` is reported back in the error.
    pub fn validate(&self, index: usize) -> Result<(), InsiderError> {
        let invalid = |field: &str, reason: &str| InsiderError::InvalidRecord {
            index,
            field: field.to_string(),
            reason: reason.to_string(),
        };

        if self.ticker.trim().is_empty() {
            return Err(invalid("ticker", "must not be empty"));
        }
        if self.insider_name.trim().is_empty() {
            return Err(invalid("insider_name", "must not be empty"));
        }
        if !self.price.is_finite() {
            return Err(invalid("price", "must be a finite number"));
        }
        if self.price < 0.0 {
            return Err(invalid("price", "must be non-negative"));
        }
        Ok(())
    }
}

/// Validate every record, failing on the first bad one.
pub fn validate_all(records: &[DisclosureRecord]) -> Result<(), InsiderError> {
    records
        .iter()
        .enumerate()
        .try_for_each(|(i, r)| r.validate(i))
}

/// A disclosure annotated with its signal strength.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRecord {
    pub record: DisclosureRecord,
    pub signal_strength: u32,
}

//! Post-filing price move for disclosed trades.

use crate::domain::disclosure::DisclosureRecord;
use crate::ports::price_port::PricePort;
use chrono::{Days, NaiveDate};

pub const DEFAULT_HORIZON_DAYS: u32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct ClosePoint {
    pub date: NaiveDate,
    pub close: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceChange {
    pub ticker: String,
    pub filing_date: NaiveDate,
    pub pct_change: f64,
}

/// Percentage move from the first to the last close in `[start, start + horizon_days)`,
/// rounded to two decimals. `None` without closes in range or with a zero base price.
pub fn pct_change(closes: &[ClosePoint], start: NaiveDate, horizon_days: u32) -> Option<f64> {
    let end = start.checked_add_days(Days::new(u64::from(horizon_days)))?;
    let mut in_range: Vec<&ClosePoint> = closes
        .iter()
        .filter(|p| p.date >= start && p.date < end)
        .collect();
    in_range.sort_by_key(|p| p.date);

    let first = in_range.first()?.close;
    let last = in_range.last()?.close;
    if first == 0.0 {
        return None;
    }
    let pct = (last - first) / first * 100.0;
    Some((pct * 100.0).round() / 100.0)
}

/// Price move after each record's filing date. Records whose prices cannot be
/// fetched, or that have no closes in the horizon, are skipped.
pub fn compute_price_changes(
    price_port: &dyn PricePort,
    records: &[DisclosureRecord],
    horizon_days: u32,
) -> Vec<PriceChange> {
    let mut changes = Vec::new();

    for r in records {
        let end = r
            .filing_date
            .checked_add_days(Days::new(u64::from(horizon_days)))
            .unwrap_or(r.filing_date);
        let closes = match price_port.fetch_closes(&r.ticker, r.filing_date, end) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("skipping {} ({})", r.ticker, e);
                continue;
            }
        };

        match pct_change(&closes, r.filing_date, horizon_days) {
            Some(pct_change) => changes.push(PriceChange {
                ticker: r.ticker.clone(),
                filing_date: r.filing_date,
                pct_change,
            }),
            None => log::debug!("{}: no price data after {}", r.ticker, r.filing_date),
        }
    }

    changes
}

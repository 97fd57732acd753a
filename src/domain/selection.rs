//! Which trading day a research memo should cover.
//!
//! Today's trades are preferred. When there are none the busiest recent
//! trade date is used instead and the selection is marked as a fallback.

use crate::domain::disclosure::DisclosureRecord;
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct DaySelection<'a> {
    pub date: NaiveDate,
    pub trades: Vec<&'a DisclosureRecord>,
    /// True when `date` is not the requested day.
    pub fallback: bool,
}

/// Trade date with the most trades; the most recent date wins ties.
pub fn busiest_trade_date(records: &[DisclosureRecord]) -> Option<NaiveDate> {
    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for r in records {
        *counts.entry(r.trade_date).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .max_by_key(|&(date, count)| (count, date))
        .map(|(date, _)| date)
}

fn trades_on(records: &[DisclosureRecord], day: NaiveDate) -> Vec<&DisclosureRecord> {
    records.iter().filter(|r| r.trade_date == day).collect()
}

pub fn select_trading_day(
    records: &[DisclosureRecord],
    today: NaiveDate,
) -> Option<DaySelection<'_>> {
    let todays = trades_on(records, today);
    if !todays.is_empty() {
        return Some(DaySelection {
            date: today,
            trades: todays,
            fallback: false,
        });
    }

    let date = busiest_trade_date(records)?;
    Some(DaySelection {
        date,
        trades: trades_on(records, date),
        fallback: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, day).unwrap()
    }

    fn on(date: NaiveDate, ticker: &str) -> DisclosureRecord {
        DisclosureRecord {
            filing_date: date,
            trade_date: date,
            ticker: ticker.into(),
            insider_name: "X".into(),
            title: "CEO".into(),
            trade_type: "P - Purchase".into(),
            shares: 1,
            price: 1.0,
            source: None,
        }
    }

    #[test]
    fn todays_trades_win() {
        let records = vec![on(d(6, 1), "A"), on(d(6, 1), "B"), on(d(6, 3), "C")];
        let sel = select_trading_day(&records, d(6, 3)).unwrap();
        assert!(!sel.fallback);
        assert_eq!(sel.date, d(6, 3));
        assert_eq!(sel.trades.len(), 1);
        assert_eq!(sel.trades[0].ticker, "C");
    }

    #[test]
    fn falls_back_to_busiest_day() {
        let records = vec![on(d(6, 1), "A"), on(d(6, 1), "B"), on(d(6, 2), "C")];
        let sel = select_trading_day(&records, d(6, 9)).unwrap();
        assert!(sel.fallback);
        assert_eq!(sel.date, d(6, 1));
        assert_eq!(sel.trades.len(), 2);
    }

    #[test]
    fn busiest_tie_prefers_recent() {
        let records = vec![on(d(6, 1), "A"), on(d(6, 2), "B")];
        assert_eq!(busiest_trade_date(&records), Some(d(6, 2)));
    }

    #[test]
    fn nothing_to_select() {
        assert!(select_trading_day(&[], d(6, 1)).is_none());
        assert_eq!(busiest_trade_date(&[]), None);
    }
}

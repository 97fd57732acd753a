#![allow(dead_code)]

use chrono::NaiveDate;
use insidersignal::domain::disclosure::{DisclosureRecord, ScoredRecord};
use insidersignal::domain::error::InsiderError;
use insidersignal::domain::feed::Feed;
use insidersignal::domain::price_change::ClosePoint;
use insidersignal::ports::disclosure_port::DisclosurePort;
use insidersignal::ports::price_port::PricePort;
use std::collections::HashMap;

pub struct MockDisclosurePort {
    pub feeds: HashMap<Feed, Vec<DisclosureRecord>>,
    pub errors: HashMap<Feed, String>,
}

impl MockDisclosurePort {
    pub fn new() -> Self {
        Self {
            feeds: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_records(mut self, feed: Feed, records: Vec<DisclosureRecord>) -> Self {
        self.feeds.insert(feed, records);
        self
    }

    pub fn with_error(mut self, feed: Feed, reason: &str) -> Self {
        self.errors.insert(feed, reason.to_string());
        self
    }
}

impl DisclosurePort for MockDisclosurePort {
    fn fetch_disclosures(&self, feed: Feed) -> Result<Vec<DisclosureRecord>, InsiderError> {
        if let Some(reason) = self.errors.get(&feed) {
            return Err(InsiderError::Source {
                reason: reason.clone(),
            });
        }
        Ok(self.feeds.get(&feed).cloned().unwrap_or_default())
    }
}

pub struct MockPricePort {
    pub closes: HashMap<String, Vec<ClosePoint>>,
}

impl MockPricePort {
    pub fn new() -> Self {
        Self {
            closes: HashMap::new(),
        }
    }

    pub fn with_closes(mut self, ticker: &str, closes: &[(&str, f64)]) -> Self {
        let points = closes
            .iter()
            .map(|&(d, close)| ClosePoint {
                date: NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap(),
                close,
            })
            .collect();
        self.closes.insert(ticker.to_string(), points);
        self
    }
}

impl PricePort for MockPricePort {
    fn fetch_closes(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<ClosePoint>, InsiderError> {
        let closes = self.closes.get(ticker).ok_or_else(|| InsiderError::Source {
            reason: format!("no prices for {}", ticker),
        })?;
        Ok(closes
            .iter()
            .filter(|p| p.date >= start && p.date < end)
            .cloned()
            .collect())
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A purchase filed on its trade date.
pub fn purchase(ticker: &str, insider: &str, trade_date: &str, shares: u64) -> DisclosureRecord {
    let d = NaiveDate::parse_from_str(trade_date, "%Y-%m-%d").unwrap();
    DisclosureRecord {
        filing_date: d,
        trade_date: d,
        ticker: ticker.to_string(),
        insider_name: insider.to_string(),
        title: "Director".to_string(),
        trade_type: "P - Purchase".to_string(),
        shares,
        price: 10.0,
        source: Some(Feed::LatestPurchases.label().to_string()),
    }
}

pub fn sale(ticker: &str, insider: &str, trade_date: &str, shares: u64) -> DisclosureRecord {
    DisclosureRecord {
        trade_type: "S - Sale".to_string(),
        ..purchase(ticker, insider, trade_date, shares)
    }
}

pub fn with_title(mut record: DisclosureRecord, title: &str) -> DisclosureRecord {
    record.title = title.to_string();
    record
}

pub fn with_price(mut record: DisclosureRecord, price: f64) -> DisclosureRecord {
    record.price = price;
    record
}

pub fn scored(record: DisclosureRecord, signal_strength: u32) -> ScoredRecord {
    ScoredRecord {
        record,
        signal_strength,
    }
}

pub const PURCHASES_CSV: &str = "X,Filing\u{a0}Date,Trade\u{a0}Date,Ticker,Insider Name,Title,Trade Type,Price,Qty,Owned,ΔOwn,Value\n\
M,2025-06-12 16:05:31,2025-06-10,ABC,Jane Roe,CEO,P - Purchase,$1.50,\"+1,500,000\",\"2,000,000\",+300%,\"+$2,250,000\"\n\
,2025-06-12 12:00:00,2025-06-11,ABC,John Doe,Dir,P - Purchase,$1.60,\"+30,000\",\"60,000\",+100%,\"+$48,000\"\n\
,2025-06-12 09:30:00,2025-06-12,ABC,Ann Lee,CFO,P - Purchase,$1.70,\"+120,000\",\"120,000\",New,\"+$204,000\"\n\
,2025-06-11 17:00:00,2025-06-09,XYZ,Bob Ray,10% Owner,P - Purchase,$42.00,\"+5,000\",\"900,000\",+1%,\"+$210,000\"\n";

pub const SALES_CSV: &str = "Filing Date,Trade Date,Ticker,Insider Name,Title,Trade Type,Price,Qty\n\
2025-06-12,2025-06-11,ABC,Carl Fox,Director,S - Sale,$1.55,\"-10,000\"\n";

//! CSV file adapter for disclosure feeds and daily close prices.
//!
//! Disclosures live in `<disclosure_dir>/<feed-slug>.csv`, exported straight
//! from the filings site: headers may carry non-breaking spaces and numbers
//! keep their `$`, `+` and `,` decoration. Prices live in
//! `<price_dir>/<TICKER>.csv` with at least `date` and `close` columns.

use crate::domain::disclosure::DisclosureRecord;
use crate::domain::error::InsiderError;
use crate::domain::feed::Feed;
use crate::domain::normalize::{normalize_header, parse_date, parse_price, parse_shares};
use crate::domain::price_change::ClosePoint;
use crate::ports::disclosure_port::DisclosurePort;
use crate::ports::price_port::PricePort;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

pub struct CsvAdapter {
    disclosure_dir: PathBuf,
    price_dir: Option<PathBuf>,
}

/// Column positions of the disclosure fields in one file.
struct ColumnMap {
    filing_date: usize,
    trade_date: usize,
    ticker: usize,
    insider_name: usize,
    title: usize,
    trade_type: usize,
    shares: usize,
    price: usize,
}

/// Index of the first header containing any of `keywords` (case-insensitive).
fn find_col(headers: &[String], keywords: &[&str]) -> Option<usize> {
    headers.iter().position(|h| {
        let low = h.to_lowercase();
        keywords.iter().any(|k| low.contains(k))
    })
}

impl ColumnMap {
    fn from_headers(headers: &[String], path: &Path) -> Result<Self, InsiderError> {
        let wanted: [(&str, &[&str]); 8] = [
            ("filing_date", &["filing date"]),
            ("trade_date", &["trade date"]),
            ("ticker", &["ticker"]),
            ("insider_name", &["insider name"]),
            ("title", &["title"]),
            ("trade_type", &["trade type"]),
            ("shares", &["qty", "share"]),
            ("price", &["price"]),
        ];

        let found: Vec<Option<usize>> = wanted
            .iter()
            .map(|(_, keywords)| find_col(headers, keywords))
            .collect();

        let missing: Vec<&str> = wanted
            .iter()
            .zip(&found)
            .filter(|(_, idx)| idx.is_none())
            .map(|((name, _), _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(InsiderError::Source {
                reason: format!("{} missing columns: {}", path.display(), missing.join(", ")),
            });
        }

        let col = |i: usize| found[i].unwrap_or_default();
        Ok(Self {
            filing_date: col(0),
            trade_date: col(1),
            ticker: col(2),
            insider_name: col(3),
            title: col(4),
            trade_type: col(5),
            shares: col(6),
            price: col(7),
        })
    }
}

impl CsvAdapter {
    pub fn new(disclosure_dir: PathBuf) -> Self {
        Self {
            disclosure_dir,
            price_dir: None,
        }
    }

    pub fn with_price_dir(mut self, price_dir: PathBuf) -> Self {
        self.price_dir = Some(price_dir);
        self
    }

    fn feed_path(&self, feed: Feed) -> PathBuf {
        self.disclosure_dir.join(format!("{}.csv", feed.slug()))
    }

    fn read_file(path: &Path) -> Result<String, InsiderError> {
        fs::read_to_string(path).map_err(|e| InsiderError::Source {
            reason: format!("failed to read {}: {}", path.display(), e),
        })
    }

    fn reader(content: &str) -> csv::Reader<&[u8]> {
        csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes())
    }

    fn headers<R: std::io::Read>(
        rdr: &mut csv::Reader<R>,
        path: &Path,
    ) -> Result<Vec<String>, InsiderError> {
        let headers = rdr.headers().map_err(|e| InsiderError::Source {
            reason: format!("{}: CSV header error: {}", path.display(), e),
        })?;
        Ok(headers.iter().map(normalize_header).collect())
    }
}

fn row_error(path: &Path, row: usize, err: InsiderError) -> InsiderError {
    InsiderError::Source {
        reason: format!("{} row {}: {}", path.display(), row, err),
    }
}

impl DisclosurePort for CsvAdapter {
    fn fetch_disclosures(&self, feed: Feed) -> Result<Vec<DisclosureRecord>, InsiderError> {
        let path = self.feed_path(feed);
        let content = Self::read_file(&path)?;
        let mut rdr = Self::reader(&content);
        let headers = Self::headers(&mut rdr, &path)?;
        let cols = ColumnMap::from_headers(&headers, &path)?;

        let mut records = Vec::new();
        for (i, result) in rdr.records().enumerate() {
            let row = i + 1;
            let record = result.map_err(|e| InsiderError::Source {
                reason: format!("{} row {}: CSV parse error: {}", path.display(), row, e),
            })?;
            let field = |idx: usize| record.get(idx).unwrap_or("");

            records.push(DisclosureRecord {
                filing_date: parse_date("filing_date", field(cols.filing_date))
                    .map_err(|e| row_error(&path, row, e))?,
                trade_date: parse_date("trade_date", field(cols.trade_date))
                    .map_err(|e| row_error(&path, row, e))?,
                ticker: field(cols.ticker).to_uppercase(),
                insider_name: field(cols.insider_name).to_string(),
                title: field(cols.title).to_string(),
                trade_type: field(cols.trade_type).to_string(),
                shares: parse_shares(field(cols.shares)).map_err(|e| row_error(&path, row, e))?,
                price: parse_price(field(cols.price)).map_err(|e| row_error(&path, row, e))?,
                source: Some(feed.label().to_string()),
            });
        }

        log::info!("{}: {} records from {}", feed, records.len(), path.display());
        Ok(records)
    }
}

impl PricePort for CsvAdapter {
    fn fetch_closes(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<ClosePoint>, InsiderError> {
        let dir = self.price_dir.as_ref().ok_or_else(|| InsiderError::Source {
            reason: "no price directory configured".into(),
        })?;
        let path = dir.join(format!("{}.csv", ticker.to_uppercase()));
        let content = Self::read_file(&path)?;
        let mut rdr = Self::reader(&content);
        let headers = Self::headers(&mut rdr, &path)?;

        let date_col = find_col(&headers, &["date"]);
        let close_col = find_col(&headers, &["close"]);
        let (Some(date_col), Some(close_col)) = (date_col, close_col) else {
            return Err(InsiderError::Source {
                reason: format!("{} needs date and close columns", path.display()),
            });
        };

        let mut closes = Vec::new();
        for (i, result) in rdr.records().enumerate() {
            let row = i + 1;
            let record = result.map_err(|e| InsiderError::Source {
                reason: format!("{} row {}: CSV parse error: {}", path.display(), row, e),
            })?;
            let date = parse_date("date", record.get(date_col).unwrap_or(""))
                .map_err(|e| row_error(&path, row, e))?;
            if date < start || date >= end {
                continue;
            }
            let close = parse_price(record.get(close_col).unwrap_or(""))
                .map_err(|e| row_error(&path, row, e))?;
            closes.push(ClosePoint { date, close });
        }

        closes.sort_by_key(|p| p.date);
        Ok(closes)
    }
}

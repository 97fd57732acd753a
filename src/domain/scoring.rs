//! Heuristic signal strength for a single disclosure.
//!
//! The score is the sum of three independent tiers. Within each tier the
//! rules are checked in table order and the first match wins:
//!
//! | Tier      | Rule                                   | Points |
//! |-----------|----------------------------------------|--------|
//! | size      | shares >= 1,000,000                    | 35     |
//! |           | shares >= 500,000                      | 25     |
//! |           | shares >= 100,000                      | 15     |
//! |           | shares >= 25,000                       | 5      |
//! | seniority | title contains "ceo"/"chief executive" | 30     |
//! |           | title contains "cfo"                   | 20     |
//! |           | title contains "director"/"officer"    | 10     |
//! | price     | price <= 2.00                          | 10     |
//! |           | price <= 5.00                          | 5      |
//!
//! The practical maximum is 75.

use crate::domain::disclosure::{DisclosureRecord, ScoredRecord};

/// Minimum share count for each size tier, highest first.
pub const SIZE_TIERS: &[(u64, u32)] = &[
    (1_000_000, 35),
    (500_000, 25),
    (100_000, 15),
    (25_000, 5),
];

/// Lower-case title keywords for each seniority tier, highest first.
pub const SENIORITY_RULES: &[(&[&str], u32)] = &[
    (&["ceo", "chief executive"], 30),
    (&["cfo"], 20),
    (&["director", "officer"], 10),
];

/// Maximum price for each price tier, cheapest first.
pub const PRICE_TIERS: &[(f64, u32)] = &[(2.0, 10), (5.0, 5)];

pub fn size_points(shares: u64) -> u32 {
    SIZE_TIERS
        .iter()
        .find(|&&(min, _)| shares >= min)
        .map_or(0, |&(_, pts)| pts)
}

pub fn seniority_points(title: &str) -> u32 {
    let title = title.to_lowercase();
    SENIORITY_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| title.contains(k)))
        .map_or(0, |&(_, pts)| pts)
}

pub fn price_points(price: f64) -> u32 {
    PRICE_TIERS
        .iter()
        .find(|&&(max, _)| price <= max)
        .map_or(0, |&(_, pts)| pts)
}

/// Signal strength of one disclosure. Depends only on shares, title and price.
pub fn score(record: &DisclosureRecord) -> u32 {
    size_points(record.shares) + seniority_points(&record.title) + price_points(record.price)
}

/// Attach a signal strength to every record, preserving order.
pub fn score_all(records: Vec<DisclosureRecord>) -> Vec<ScoredRecord> {
    records
        .into_iter()
        .map(|record| ScoredRecord {
            signal_strength: score(&record),
            record,
        })
        .collect()
}

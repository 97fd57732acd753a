//! Caller-side record filters applied before scoring.

use crate::domain::disclosure::DisclosureRecord;

/// Default share threshold for the notable-trade screen.
pub const NOTABLE_MIN_SHARES: u64 = 10_000;

/// Title fragments that make a trade notable regardless of size. Matched
/// case-sensitively, the way the feed abbreviates roles.
pub const NOTABLE_TITLES: &[&str] = &["CEO", "Chair", "Director", "President"];

/// Keep purchases only.
pub fn purchases_only(records: Vec<DisclosureRecord>) -> Vec<DisclosureRecord> {
    records.into_iter().filter(|r| r.is_purchase()).collect()
}

/// A trade is notable when it is larger than `min_shares` or the insider
/// holds one of the [`NOTABLE_TITLES`].
pub fn is_notable(record: &DisclosureRecord, min_shares: u64) -> bool {
    record.shares > min_shares || NOTABLE_TITLES.iter().any(|t| record.title.contains(t))
}

pub fn notable_only(records: Vec<DisclosureRecord>, min_shares: u64) -> Vec<DisclosureRecord> {
    records
        .into_iter()
        .filter(|r| is_notable(r, min_shares))
        .collect()
}

//! Disclosure acquisition port trait.

use crate::domain::disclosure::DisclosureRecord;
use crate::domain::error::InsiderError;
use crate::domain::feed::Feed;

/// Source of normalized disclosure records.
///
/// Implementations own transport, parsing and number/date cleanup; records
/// come back with typed fields and `source` set to the feed label.
pub trait DisclosurePort {
    fn fetch_disclosures(&self, feed: Feed) -> Result<Vec<DisclosureRecord>, InsiderError>;

    /// Fetch several feeds and concatenate them. A failing feed is skipped
    /// with a warning; an error is returned only when every feed fails.
    fn fetch_all(&self, feeds: &[Feed]) -> Result<Vec<DisclosureRecord>, InsiderError> {
        let mut records = Vec::new();
        let mut last_err = None;
        let mut fetched = 0usize;

        for &feed in feeds {
            match self.fetch_disclosures(feed) {
                Ok(mut batch) => {
                    fetched += 1;
                    records.append(&mut batch);
                }
                Err(e) => {
                    log::warn!("feed {} skipped: {}", feed, e);
                    last_err = Some(e);
                }
            }
        }

        match last_err {
            Some(e) if fetched == 0 => Err(e),
            _ => Ok(records),
        }
    }
}

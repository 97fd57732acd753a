//! Market-data port trait.

use crate::domain::error::InsiderError;
use crate::domain::price_change::ClosePoint;
use chrono::NaiveDate;

pub trait PricePort {
    /// Daily closes for `ticker` with `start <= date < end`, sorted by date.
    fn fetch_closes(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<ClosePoint>, InsiderError>;
}

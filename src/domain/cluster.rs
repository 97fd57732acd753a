//! Time-windowed clusters of insiders trading the same ticker.
//!
//! Every scored trade anchors a trailing window `[trade_date - window_days,
//! trade_date]` over the trades of its ticker. When the window holds at least
//! `min_insiders` distinct insider names a [`Cluster`] is emitted. Windows are
//! not merged: a run of overlapping activity yields one cluster per qualifying
//! anchor, which shows how the cluster grew day by day.

use crate::domain::disclosure::ScoredRecord;
use crate::domain::error::InsiderError;
use chrono::{Days, NaiveDate};
use std::collections::HashMap;

/// Bonus added to the cluster score per distinct insider.
pub const INSIDER_BONUS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterParams {
    window_days: u32,
    min_insiders: usize,
}

impl ClusterParams {
    pub fn new(window_days: i64, min_insiders: i64) -> Result<Self, InsiderError> {
        if window_days < 1 {
            return Err(InsiderError::invalid_parameter(
                "window_days",
                format!("must be at least 1, got {}", window_days),
            ));
        }
        let window_days = u32::try_from(window_days).map_err(|_| {
            InsiderError::invalid_parameter("window_days", format!("{} is too large", window_days))
        })?;
        if min_insiders < 1 {
            return Err(InsiderError::invalid_parameter(
                "min_insiders",
                format!("must be at least 1, got {}", min_insiders),
            ));
        }
        let min_insiders = usize::try_from(min_insiders).map_err(|_| {
            InsiderError::invalid_parameter(
                "min_insiders",
                format!("{} is too large", min_insiders),
            )
        })?;
        Ok(Self {
            window_days,
            min_insiders,
        })
    }

    pub fn window_days(&self) -> u32 {
        self.window_days
    }

    pub fn min_insiders(&self) -> usize {
        self.min_insiders
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    pub ticker: String,
    pub window_start: NaiveDate,
    /// Trade date of the anchoring trade.
    pub window_end: NaiveDate,
    pub num_insiders: usize,
    pub total_shares: u64,
    pub cluster_score: u32,
}

impl Cluster {
    /// Whether `date` falls inside this cluster's window (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.window_start <= date && date <= self.window_end
    }
}

/// Group records by ticker, keeping tickers in order of first appearance.
fn partition_by_ticker(records: &[ScoredRecord]) -> Vec<(&str, Vec<&ScoredRecord>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut partitions: Vec<(&str, Vec<&ScoredRecord>)> = Vec::new();

    for r in records {
        let ticker = r.record.ticker.as_str();
        let slot = *index.entry(ticker).or_insert_with(|| {
            partitions.push((ticker, Vec::new()));
            partitions.len() - 1
        });
        partitions[slot].1.push(r);
    }

    partitions
}

/// Running totals over the records currently inside the window.
#[derive(Default)]
struct WindowState<'a> {
    insiders: HashMap<&'a str, usize>,
    total_shares: u64,
    total_signal: u32,
}

impl<'a> WindowState<'a> {
    /// Fails without changing state when a running total would overflow.
    fn add(&mut self, r: &'a ScoredRecord) -> Result<(), InsiderError> {
        let overflow = || InsiderError::ClusterOverflow {
            ticker: r.record.ticker.clone(),
            trade_date: r.record.trade_date,
        };
        let total_shares = self
            .total_shares
            .checked_add(r.record.shares)
            .ok_or_else(overflow)?;
        let total_signal = self
            .total_signal
            .checked_add(r.signal_strength)
            .ok_or_else(overflow)?;
        *self.insiders.entry(r.record.insider_name.as_str()).or_insert(0) += 1;
        self.total_shares = total_shares;
        self.total_signal = total_signal;
        Ok(())
    }

    fn remove(&mut self, r: &'a ScoredRecord) {
        let name = r.record.insider_name.as_str();
        if let Some(count) = self.insiders.get_mut(name) {
            *count -= 1;
            if *count == 0 {
                self.insiders.remove(name);
            }
        }
        self.total_shares -= r.record.shares;
        self.total_signal -= r.signal_strength;
    }
}

/// Clusters for one ticker's trades. Two-pointer sweep over the date-sorted partition.
fn detect_in_partition(
    ticker: &str,
    mut trades: Vec<&ScoredRecord>,
    params: &ClusterParams,
) -> Result<Vec<Cluster>, InsiderError> {
    trades.sort_by_key(|r| r.record.trade_date);

    let mut clusters = Vec::new();
    let mut window = WindowState::default();
    let mut lo = 0;
    let mut hi = 0;

    for anchor in &trades {
        let window_end = anchor.record.trade_date;
        let window_start = window_end
            .checked_sub_days(Days::new(u64::from(params.window_days)))
            .unwrap_or(NaiveDate::MIN);

        // Same-day trades after the anchor still belong to its window.
        while hi < trades.len() && trades[hi].record.trade_date <= window_end {
            window.add(trades[hi])?;
            hi += 1;
        }
        while trades[lo].record.trade_date < window_start {
            window.remove(trades[lo]);
            lo += 1;
        }

        let num_insiders = window.insiders.len();
        if num_insiders >= params.min_insiders {
            clusters.push(Cluster {
                ticker: ticker.to_string(),
                window_start,
                window_end,
                num_insiders,
                total_shares: window.total_shares,
                cluster_score: window.total_signal + INSIDER_BONUS * num_insiders as u32,
            });
        }
    }

    Ok(clusters)
}

/// Detect insider clusters across all tickers.
///
/// Output is grouped by ticker in order of first appearance in `records`, and
/// by anchor trade date within a ticker. Empty input yields no clusters.
/// Fails with [`InsiderError::ClusterOverflow`] when a window's share total
/// does not fit in a `u64`.
pub fn detect_clusters(
    records: &[ScoredRecord],
    params: &ClusterParams,
) -> Result<Vec<Cluster>, InsiderError> {
    let mut clusters = Vec::new();
    for (ticker, trades) in partition_by_ticker(records) {
        let trade_count = trades.len();
        let found = detect_in_partition(ticker, trades, params)?;
        log::debug!(
            "{}: {} clusters from {} trades",
            ticker,
            found.len(),
            trade_count
        );
        clusters.extend(found);
    }
    Ok(clusters)
}

/// Highest-scoring cluster per ticker; the earliest anchor wins ties.
pub fn best_per_ticker(clusters: &[Cluster]) -> Vec<Cluster> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut best: Vec<Cluster> = Vec::new();

    for c in clusters {
        match index.get(c.ticker.as_str()) {
            Some(&slot) => {
                if c.cluster_score > best[slot].cluster_score {
                    best[slot] = c.clone();
                }
            }
            None => {
                index.insert(c.ticker.as_str(), best.len());
                best.push(c.clone());
            }
        }
    }

    best
}

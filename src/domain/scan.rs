//! End-to-end scan: fetch, filter, validate, score, cluster.

use crate::domain::cluster::{detect_clusters, Cluster, ClusterParams};
use crate::domain::disclosure::{validate_all, DisclosureRecord, ScoredRecord};
use crate::domain::error::InsiderError;
use crate::domain::feed::Feed;
use crate::domain::ranking::{top_by_cluster_score, top_by_score, top_pick};
use crate::domain::scoring::score_all;
use crate::domain::screen::{notable_only, purchases_only, NOTABLE_MIN_SHARES};
use crate::ports::disclosure_port::DisclosurePort;

#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfig {
    pub feeds: Vec<Feed>,
    pub purchases_only: bool,
    pub notable_only: bool,
    pub notable_min_shares: u64,
    pub cluster: ClusterParams,
    pub top_n: usize,
}

impl ScanConfig {
    /// Latest purchases, 7-day window, 3 insiders, top 5.
    pub fn with_defaults() -> Result<Self, InsiderError> {
        Ok(Self {
            feeds: vec![Feed::LatestPurchases],
            purchases_only: true,
            notable_only: false,
            notable_min_shares: NOTABLE_MIN_SHARES,
            cluster: ClusterParams::new(7, 3)?,
            top_n: 5,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    pub scored: Vec<ScoredRecord>,
    pub clusters: Vec<Cluster>,
}

impl ScanResult {
    pub fn top_trades(&self, k: usize) -> Vec<&ScoredRecord> {
        top_by_score(&self.scored, k)
    }

    pub fn top_clusters(&self, k: usize) -> Vec<&Cluster> {
        top_by_cluster_score(&self.clusters, k)
    }

    pub fn top_pick(&self) -> Option<&ScoredRecord> {
        top_pick(&self.scored)
    }
}

/// Apply the configured filters and run scoring and cluster detection.
pub fn scan_records(
    records: Vec<DisclosureRecord>,
    config: &ScanConfig,
) -> Result<ScanResult, InsiderError> {
    let fetched = records.len();
    let mut records = records;
    if config.purchases_only {
        records = purchases_only(records);
    }
    if config.notable_only {
        records = notable_only(records, config.notable_min_shares);
    }
    validate_all(&records)?;

    let scored = score_all(records);
    let clusters = detect_clusters(&scored, &config.cluster)?;

    log::info!(
        "scored {} of {} records, {} clusters (window {}d, min {} insiders)",
        scored.len(),
        fetched,
        clusters.len(),
        config.cluster.window_days(),
        config.cluster.min_insiders()
    );

    Ok(ScanResult { scored, clusters })
}

pub fn run_scan(port: &dyn DisclosurePort, config: &ScanConfig) -> Result<ScanResult, InsiderError> {
    let records = port.fetch_all(&config.feeds)?;
    scan_records(records, config)
}

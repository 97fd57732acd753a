//! Top-K selection over scored trades and clusters.
//!
//! Ties keep their input order, so `top_k(.., 1)` is "first best" and the
//! leaderboard is reproducible across runs.

use crate::domain::cluster::Cluster;
use crate::domain::disclosure::ScoredRecord;

/// Number of entries on the leaderboard views.
pub const LEADERBOARD_SIZE: usize = 5;

/// The `k` highest items by `key`, descending, stable for equal keys.
pub fn top_k<T, K, F>(items: &[T], k: usize, key: F) -> Vec<&T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut ranked: Vec<&T> = items.iter().collect();
    // sort_by is stable; reversing the comparison keeps equal keys in input order.
    ranked.sort_by(|a, b| key(*b).cmp(&key(*a)));
    ranked.truncate(k);
    ranked
}

pub fn top_by_score(records: &[ScoredRecord], k: usize) -> Vec<&ScoredRecord> {
    top_k(records, k, |r| r.signal_strength)
}

pub fn top_by_cluster_score(clusters: &[Cluster], k: usize) -> Vec<&Cluster> {
    top_k(clusters, k, |c| c.cluster_score)
}

/// Single best trade, used for alerts.
pub fn top_pick(records: &[ScoredRecord]) -> Option<&ScoredRecord> {
    top_by_score(records, 1).into_iter().next()
}

/// Largest trade by share count; the first of equal sizes wins.
pub fn largest_by_shares(records: &[ScoredRecord]) -> Option<&ScoredRecord> {
    top_k(records, 1, |r| r.record.shares).into_iter().next()
}

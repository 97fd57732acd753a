//! Property tests for scoring and cluster invariants.
//!
//! Uses proptest to verify:
//! 1. Score bounds and monotonicity in share count
//! 2. Every cluster meets the insider threshold
//! 3. Cluster windows cover their members and end on an anchor trade
//! 4. Detection and ranking are deterministic

mod common;

use common::*;
use insidersignal::domain::cluster::{detect_clusters, ClusterParams};
use insidersignal::domain::disclosure::{DisclosureRecord, ScoredRecord};
use insidersignal::domain::ranking::top_by_score;
use insidersignal::domain::scoring::{score, score_all};
use chrono::Days;
use proptest::prelude::*;
use std::collections::HashSet;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_title() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "CEO",
        "CFO",
        "Director",
        "Chief Operating Officer",
        "10% Owner",
        "VP Sales",
        "",
    ])
    .prop_map(String::from)
}

fn arb_price() -> impl Strategy<Value = f64> {
    (0.0..100.0_f64).prop_map(|p| (p * 100.0).round() / 100.0)
}

fn arb_trade() -> impl Strategy<Value = DisclosureRecord> {
    (
        prop::sample::select(vec!["ABC", "XYZ", "QRS"]),
        prop::sample::select(vec!["Alice", "Bob", "Carol", "Dan", "Eve"]),
        0u64..60,
        0u64..3_000_000,
        arb_title(),
        arb_price(),
    )
        .prop_map(|(ticker, insider, day, shares, title, price)| {
            let trade_date = date(2025, 1, 1) + Days::new(day);
            DisclosureRecord {
                filing_date: trade_date,
                trade_date,
                ticker: ticker.to_string(),
                insider_name: insider.to_string(),
                title,
                trade_type: "P - Purchase".to_string(),
                shares,
                price,
                source: None,
            }
        })
}

fn arb_trades() -> impl Strategy<Value = Vec<ScoredRecord>> {
    prop::collection::vec(arb_trade(), 0..40).prop_map(score_all)
}

// ── 1. Scoring ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn score_is_bounded(trade in arb_trade()) {
        prop_assert!(score(&trade) <= 75);
        prop_assert_eq!(score(&trade), score(&trade.clone()));
    }

    /// More shares never lower the score.
    #[test]
    fn score_monotonic_in_shares(trade in arb_trade(), extra in 0u64..2_000_000) {
        let mut bigger = trade.clone();
        bigger.shares += extra;
        prop_assert!(score(&bigger) >= score(&trade));
    }

    /// A cheaper price never lowers the score.
    #[test]
    fn score_antitone_in_price(trade in arb_trade(), cut in 0.0..1.0_f64) {
        let cheaper = with_price(trade.clone(), trade.price * cut);
        prop_assert!(score(&cheaper) >= score(&trade));
    }
}

// ── 2-3. Cluster invariants ──────────────────────────────────────────

proptest! {
    #[test]
    fn clusters_meet_threshold(
        trades in arb_trades(),
        window_days in 1i64..15,
        min_insiders in 1i64..5,
    ) {
        let params = ClusterParams::new(window_days, min_insiders).unwrap();
        for c in detect_clusters(&trades, &params).unwrap() {
            prop_assert!(c.num_insiders >= params.min_insiders());
            prop_assert!(c.cluster_score >= 5 * c.num_insiders as u32);
        }
    }

    #[test]
    fn windows_cover_their_members(
        trades in arb_trades(),
        window_days in 1i64..15,
        min_insiders in 1i64..4,
    ) {
        let params = ClusterParams::new(window_days, min_insiders).unwrap();
        for c in detect_clusters(&trades, &params).unwrap() {
            prop_assert_eq!(
                c.window_start + Days::new(params.window_days() as u64),
                c.window_end
            );
            prop_assert!(trades
                .iter()
                .any(|t| t.record.ticker == c.ticker && t.record.trade_date == c.window_end));

            let members: Vec<&ScoredRecord> = trades
                .iter()
                .filter(|t| t.record.ticker == c.ticker && c.contains(t.record.trade_date))
                .collect();
            let insiders: HashSet<&str> =
                members.iter().map(|t| t.record.insider_name.as_str()).collect();
            let shares: u64 = members.iter().map(|t| t.record.shares).sum();
            let signal: u32 = members.iter().map(|t| t.signal_strength).sum();

            prop_assert_eq!(insiders.len(), c.num_insiders);
            prop_assert_eq!(shares, c.total_shares);
            prop_assert_eq!(signal + 5 * c.num_insiders as u32, c.cluster_score);
        }
    }

    /// With a threshold of one, every trade anchors a cluster.
    #[test]
    fn single_insider_threshold_yields_one_per_trade(trades in arb_trades()) {
        let params = ClusterParams::new(7, 1).unwrap();
        prop_assert_eq!(detect_clusters(&trades, &params).unwrap().len(), trades.len());
    }
}

// ── 4. Determinism ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn detection_is_repeatable(trades in arb_trades(), window_days in 1i64..15) {
        let params = ClusterParams::new(window_days, 2).unwrap();
        prop_assert_eq!(
            detect_clusters(&trades, &params).unwrap(),
            detect_clusters(&trades, &params).unwrap()
        );
    }

    #[test]
    fn top_k_is_sorted_prefix(trades in arb_trades(), k in 0usize..10) {
        let top = top_by_score(&trades, k);
        prop_assert_eq!(top.len(), k.min(trades.len()));
        for pair in top.windows(2) {
            prop_assert!(pair[0].signal_strength >= pair[1].signal_strength);
        }
        if let Some(last) = top.last() {
            let better = trades
                .iter()
                .filter(|t| t.signal_strength > last.signal_strength)
                .count();
            prop_assert!(better < top.len());
        }
    }
}

//! Plain-text rendering of scan results.
//!
//! Provides Markdown tables for:
//! - the full scored trade list
//! - the top-N leaderboard
//! - detected clusters
//! - post-filing price moves
//!
//! plus the one-line largest-trade summary and the alert message body.

use crate::domain::cluster::Cluster;
use crate::domain::disclosure::ScoredRecord;
use crate::domain::price_change::PriceChange;
use crate::domain::ranking::largest_by_shares;
use chrono::NaiveDateTime;

/// `1234567` -> `1,234,567`
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `1234.5` -> `$1,234.50`
pub fn format_dollars(value: f64) -> String {
    let cents = (value * 100.0).round() as u64;
    format!("${}.{:02}", group_thousands(cents / 100), cents % 100)
}

fn source_of(r: &ScoredRecord) -> &str {
    r.record.source.as_deref().unwrap_or("-")
}

pub fn render_trade_table(records: &[ScoredRecord]) -> String {
    if records.is_empty() {
        return "_No insider trades._\n".to_string();
    }

    let mut output = String::new();
    output.push_str(
        "| Filing Date | Trade Date | Ticker | Insider | Title | Shares | Price | Score | Source |\n",
    );
    output.push_str("|---|---|---|---|---|---:|---:|---:|---|\n");
    for r in records {
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | ${:.2} | {} | {} |\n",
            r.record.filing_date,
            r.record.trade_date,
            r.record.ticker,
            r.record.insider_name,
            r.record.title,
            group_thousands(r.record.shares),
            r.record.price,
            r.signal_strength,
            source_of(r),
        ));
    }
    output
}

pub fn render_leaderboard(top: &[&ScoredRecord]) -> String {
    if top.is_empty() {
        return "_No insider trades._\n".to_string();
    }

    let mut output = String::new();
    output.push_str("| # | Ticker | Insider | Shares | Price | Score | Source |\n");
    output.push_str("|---:|---|---|---:|---:|---:|---|\n");
    for (i, r) in top.iter().enumerate() {
        output.push_str(&format!(
            "| {} | {} | {} | {} | ${:.2} | {} | {} |\n",
            i + 1,
            r.record.ticker,
            r.record.insider_name,
            group_thousands(r.record.shares),
            r.record.price,
            r.signal_strength,
            source_of(r),
        ));
    }
    output
}

pub fn render_cluster_table(clusters: &[&Cluster]) -> String {
    if clusters.is_empty() {
        return "_No insider clusters._\n".to_string();
    }

    let mut output = String::new();
    output.push_str("| Ticker | Window | Insiders | Total Shares | Cluster Score |\n");
    output.push_str("|---|---|---:|---:|---:|\n");
    for c in clusters {
        output.push_str(&format!(
            "| {} | {} to {} | {} | {} | {} |\n",
            c.ticker,
            c.window_start,
            c.window_end,
            c.num_insiders,
            group_thousands(c.total_shares),
            c.cluster_score,
        ));
    }
    output
}

pub fn render_price_changes(changes: &[PriceChange], horizon_days: u32) -> String {
    if changes.is_empty() {
        return "_No price data available._\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "| Ticker | Filing Date | {}d Change |\n",
        horizon_days
    ));
    output.push_str("|---|---|---:|\n");
    for c in changes {
        let sign = if c.pct_change > 0.0 { "+" } else { "" };
        output.push_str(&format!(
            "| {} | {} | {}{:.2}% |\n",
            c.ticker, c.filing_date, sign, c.pct_change
        ));
    }
    output
}

/// "<insider> bought <shares> shares of <ticker> at $<price> on <filing date>" for the
/// largest trade by share count.
pub fn largest_trade_summary(records: &[ScoredRecord]) -> Option<String> {
    let top = largest_by_shares(records)?;
    let r = &top.record;
    let mut line = format!(
        "{} ({}) bought {} shares of {} at ${:.2} on {}",
        r.insider_name,
        r.title,
        group_thousands(r.shares),
        r.ticker,
        r.price,
        r.filing_date
    );
    if let Some(source) = &r.source {
        line.push_str(&format!(" (feed: {})", source));
    }
    line.push('.');
    Some(line)
}

/// Alert body for the top pick.
pub fn alert_message(label: &str, top: &ScoredRecord, now: NaiveDateTime) -> String {
    let r = &top.record;
    format!(
        "*{} Insider Trade Alert* ({}):\n{} bought {} shares of {} at ${:.2}\nScore: {}/100",
        label,
        now.format("%m/%d %I:%M%p"),
        r.insider_name,
        group_thousands(r.shares),
        r.ticker,
        r.price,
        top.signal_strength
    )
}

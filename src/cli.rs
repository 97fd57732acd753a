//! CLI definition and dispatch.

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::console_alert::{ConsoleAlert, FileAlert};
use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::prompt::build_prompt;
use crate::adapters::text_report;
use crate::domain::cluster::{best_per_ticker, ClusterParams};
use crate::domain::config_validation::validate_scan_config;
use crate::domain::disclosure::DisclosureRecord;
use crate::domain::error::InsiderError;
use crate::domain::feed::{parse_feeds, Feed};
use crate::domain::price_change::{compute_price_changes, DEFAULT_HORIZON_DAYS};
use crate::domain::ranking::{top_by_cluster_score, LEADERBOARD_SIZE};
use crate::domain::scan::{run_scan, ScanConfig, ScanResult};
use crate::domain::screen::NOTABLE_MIN_SHARES;
use crate::ports::alert_port::AlertPort;
use crate::ports::config_port::ConfigPort;

#[derive(Parser, Debug)]
#[command(name = "insidersignal", about = "Insider-trade signal scoring and cluster detection")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score trades and print the trade table and leaderboard
    Score {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        feed: Option<String>,
        #[arg(long)]
        top: Option<i64>,
    },
    /// Detect clusters of insiders buying the same ticker
    Clusters {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        feed: Option<String>,
        #[arg(long)]
        window_days: Option<i64>,
        #[arg(long)]
        min_insiders: Option<i64>,
        #[arg(long)]
        top: Option<i64>,
        #[arg(long)]
        best_per_ticker: bool,
    },
    /// Send an alert for the highest-scoring trade
    Alert {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        feed: Option<String>,
    },
    /// Print a research-memo prompt for today's trades
    Prompt {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        feed: Option<String>,
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Print the price move after each filing
    PriceChange {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        feed: Option<String>,
    },
    /// List the known disclosure feeds
    Feeds,
    /// Validate a configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ScanOverrides {
    pub feed: Option<String>,
    pub window_days: Option<i64>,
    pub min_insiders: Option<i64>,
    pub top_n: Option<i64>,
}

impl ScanOverrides {
    fn for_feed(feed: Option<String>) -> Self {
        Self {
            feed,
            ..Self::default()
        }
    }
}

pub fn run(cli: Cli) -> ExitCode {
    let result = match cli.command {
        Command::Score { config, feed, top } => run_score(
            &config,
            &ScanOverrides {
                feed,
                top_n: top,
                ..ScanOverrides::default()
            },
        ),
        Command::Clusters {
            config,
            feed,
            window_days,
            min_insiders,
            top,
            best_per_ticker,
        } => run_clusters(
            &config,
            &ScanOverrides {
                feed,
                window_days,
                min_insiders,
                top_n: top,
            },
            best_per_ticker,
        ),
        Command::Alert { config, feed } => run_alert(&config, &ScanOverrides::for_feed(feed)),
        Command::Prompt {
            config,
            feed,
            today,
        } => run_prompt(&config, &ScanOverrides::for_feed(feed), today),
        Command::PriceChange { config, feed } => {
            run_price_change(&config, &ScanOverrides::for_feed(feed))
        }
        Command::Feeds => {
            run_feeds();
            Ok(())
        }
        Command::Validate { config } => run_validate(&config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, InsiderError> {
    FileConfigAdapter::from_file(path)
}

fn config_invalid(key: &str, reason: impl Into<String>) -> InsiderError {
    InsiderError::ConfigInvalid {
        section: "scan".into(),
        key: key.into(),
        reason: reason.into(),
    }
}

pub fn build_scan_config(
    config: &dyn ConfigPort,
    overrides: &ScanOverrides,
) -> Result<ScanConfig, InsiderError> {
    let feeds_str = overrides
        .feed
        .clone()
        .or_else(|| config.get_string("scan", "feeds"))
        .unwrap_or_else(|| Feed::LatestPurchases.slug().to_string());
    let feeds = parse_feeds(&feeds_str)?;
    if feeds.is_empty() {
        return Err(config_invalid("feeds", "at least one feed is required"));
    }

    let window_days = overrides
        .window_days
        .unwrap_or_else(|| config.get_int("scan", "window_days", 7));
    let min_insiders = overrides
        .min_insiders
        .unwrap_or_else(|| config.get_int("scan", "min_insiders", 3));
    let cluster = ClusterParams::new(window_days, min_insiders)?;

    let top_n = overrides
        .top_n
        .unwrap_or_else(|| config.get_int("scan", "top_n", LEADERBOARD_SIZE as i64));
    if top_n < 1 {
        return Err(InsiderError::InvalidParameter {
            name: "top_n".into(),
            reason: format!("must be at least 1, got {}", top_n),
        });
    }

    let notable_min_shares = config.get_int("scan", "notable_min_shares", NOTABLE_MIN_SHARES as i64);
    let notable_min_shares = u64::try_from(notable_min_shares)
        .map_err(|_| config_invalid("notable_min_shares", "must be non-negative"))?;

    Ok(ScanConfig {
        feeds,
        purchases_only: config.get_bool("scan", "purchases_only", true),
        notable_only: config.get_bool("scan", "notable_only", false),
        notable_min_shares,
        cluster,
        top_n: top_n as usize,
    })
}

pub fn build_adapter(config: &dyn ConfigPort) -> Result<CsvAdapter, InsiderError> {
    let dir = config
        .get_path("data", "disclosure_dir")
        .ok_or_else(|| InsiderError::ConfigMissing {
            section: "data".into(),
            key: "disclosure_dir".into(),
        })?;
    let adapter = CsvAdapter::new(dir);
    Ok(match config.get_path("data", "price_dir") {
        Some(p) => adapter.with_price_dir(p),
        None => adapter,
    })
}

/// The config file with every `[scan]` key a command-line flag overrides
/// hidden, so file validation skips values that will not be used.
struct WithoutOverridden<'a> {
    file: &'a dyn ConfigPort,
    overrides: &'a ScanOverrides,
}

impl WithoutOverridden<'_> {
    fn is_overridden(&self, section: &str, key: &str) -> bool {
        section == "scan"
            && match key {
                "feeds" => self.overrides.feed.is_some(),
                "window_days" => self.overrides.window_days.is_some(),
                "min_insiders" => self.overrides.min_insiders.is_some(),
                "top_n" => self.overrides.top_n.is_some(),
                _ => false,
            }
    }
}

impl ConfigPort for WithoutOverridden<'_> {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        if self.is_overridden(section, key) {
            return None;
        }
        self.file.get_string(section, key)
    }

    fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        if self.is_overridden(section, key) {
            return default;
        }
        self.file.get_int(section, key, default)
    }

    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.file.get_bool(section, key, default)
    }
}

/// Everything the data commands share after the scan has run.
struct LoadedScan {
    config: FileConfigAdapter,
    scan_config: ScanConfig,
    adapter: CsvAdapter,
    result: ScanResult,
}

/// Load, validate and scan. Shared first stages of every data command.
fn load_and_scan(
    config_path: &PathBuf,
    overrides: &ScanOverrides,
) -> Result<LoadedScan, InsiderError> {
    eprintln!("Loading config from {}", config_path.display());
    let config = load_config(config_path)?;
    validate_scan_config(&WithoutOverridden {
        file: &config,
        overrides,
    })?;
    let scan_config = build_scan_config(&config, overrides)?;
    let adapter = build_adapter(&config)?;

    let labels: Vec<&str> = scan_config.feeds.iter().map(|f| f.label()).collect();
    eprintln!("Fetching feeds: {}", labels.join(", "));
    let result = run_scan(&adapter, &scan_config)?;
    eprintln!("Scored {} insider trades", result.scored.len());

    Ok(LoadedScan {
        config,
        scan_config,
        adapter,
        result,
    })
}

pub fn run_score(config_path: &PathBuf, overrides: &ScanOverrides) -> Result<(), InsiderError> {
    let LoadedScan {
        scan_config, result, ..
    } = load_and_scan(config_path, overrides)?;

    if let Some(summary) = text_report::largest_trade_summary(&result.scored) {
        println!("{}\n", summary);
    }
    println!("## Insider Trades\n");
    println!("{}", text_report::render_trade_table(&result.scored));
    println!("## Top {} by Signal Strength\n", scan_config.top_n);
    print!(
        "{}",
        text_report::render_leaderboard(&result.top_trades(scan_config.top_n))
    );
    Ok(())
}

pub fn run_clusters(
    config_path: &PathBuf,
    overrides: &ScanOverrides,
    best_only: bool,
) -> Result<(), InsiderError> {
    let LoadedScan {
        scan_config, result, ..
    } = load_and_scan(config_path, overrides)?;

    let clusters = if best_only {
        best_per_ticker(&result.clusters)
    } else {
        result.clusters
    };
    eprintln!(
        "{} clusters (window {} days, at least {} insiders)",
        clusters.len(),
        scan_config.cluster.window_days(),
        scan_config.cluster.min_insiders()
    );

    println!("## Top {} Insider Clusters\n", scan_config.top_n);
    print!(
        "{}",
        text_report::render_cluster_table(&top_by_cluster_score(&clusters, scan_config.top_n))
    );
    Ok(())
}

pub fn run_alert(config_path: &PathBuf, overrides: &ScanOverrides) -> Result<(), InsiderError> {
    let LoadedScan {
        config,
        scan_config,
        result,
        ..
    } = load_and_scan(config_path, overrides)?;

    let Some(top) = result.top_pick() else {
        eprintln!("No insider trades to alert on");
        return Ok(());
    };

    let label = config
        .get_string("alert", "label")
        .unwrap_or_else(|| scan_config.feeds[0].label().to_string());
    let message = text_report::alert_message(&label, top, Local::now().naive_local());

    let sink: Box<dyn AlertPort> = match config.get_path("alert", "output") {
        Some(path) => Box::new(FileAlert::new(path)),
        None => Box::new(ConsoleAlert),
    };
    sink.send(&message)?;
    eprintln!(
        "Sent {} alert: {} (score {})",
        label, top.record.ticker, top.signal_strength
    );
    Ok(())
}

pub fn run_prompt(
    config_path: &PathBuf,
    overrides: &ScanOverrides,
    today: Option<NaiveDate>,
) -> Result<(), InsiderError> {
    let LoadedScan { result, .. } = load_and_scan(config_path, overrides)?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let records: Vec<DisclosureRecord> = result.scored.into_iter().map(|s| s.record).collect();
    println!("{}", build_prompt(&records, today));
    Ok(())
}

pub fn run_price_change(
    config_path: &PathBuf,
    overrides: &ScanOverrides,
) -> Result<(), InsiderError> {
    let LoadedScan {
        config,
        adapter,
        result,
        ..
    } = load_and_scan(config_path, overrides)?;
    if config.get_path("data", "price_dir").is_none() {
        return Err(InsiderError::ConfigMissing {
            section: "data".into(),
            key: "price_dir".into(),
        });
    }

    let horizon = config.get_int("scan", "price_horizon_days", DEFAULT_HORIZON_DAYS as i64);
    let horizon = u32::try_from(horizon)
        .map_err(|_| config_invalid("price_horizon_days", "must be a positive integer"))?;

    let records: Vec<DisclosureRecord> = result.scored.into_iter().map(|s| s.record).collect();
    let changes = compute_price_changes(&adapter, &records, horizon);
    eprintln!("Price data for {} of {} trades", changes.len(), records.len());

    print!("{}", text_report::render_price_changes(&changes, horizon));
    Ok(())
}

fn run_feeds() {
    for feed in Feed::ALL {
        println!("{:<24} {:<28} {}", feed.slug(), feed.label(), feed.endpoint());
    }
}

fn run_validate(config_path: &PathBuf) -> Result<(), InsiderError> {
    eprintln!("Validating config: {}", config_path.display());
    let config = load_config(config_path)?;
    validate_scan_config(&config)?;
    let scan_config = build_scan_config(&config, &ScanOverrides::default())?;

    eprintln!("\nScan settings:");
    for feed in &scan_config.feeds {
        eprintln!("  feed:         {}", feed);
    }
    eprintln!("  window_days:  {}", scan_config.cluster.window_days());
    eprintln!("  min_insiders: {}", scan_config.cluster.min_insiders());
    eprintln!("  top_n:        {}", scan_config.top_n);
    eprintln!("\nConfiguration is valid.");
    Ok(())
}

// src/main.rs
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use log::{error, info};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tesola_staking_analytics::{
    analytics::{
        calculate_estimated_rewards_at, calculate_optimal_strategy_at,
        calculate_performance_metrics_at, calculate_projected_rewards,
        generate_earnings_time_series_at, get_tier_distribution, ReportOptions, StakingReport,
        StakingReporter,
    },
    config::{self, settings::MAX_HORIZON_DAYS, Config},
    error::AnalyticsError,
    staking::{loader, parse_timestamp, CanonicalTier, StakeRecord, UnstakedNft},
    utils::setup_logging,
};

#[derive(Parser, Debug)]
#[command(name = "tesola-analytics", version, about = "TESOLA staking reward analytics")]
struct Cli {
    /// Evaluate as of this instant (RFC 3339) instead of the current time
    #[arg(long, global = true)]
    now: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct SnapshotArgs {
    /// JSON file with active stakes (bare array or staking-stats response)
    #[arg(long)]
    stakes: PathBuf,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run every analytic and print (or export) the combined report
    Report {
        #[command(flatten)]
        snapshot: SnapshotArgs,
        /// JSON file with owned, unstaked NFTs
        #[arg(long)]
        unstaked: Option<PathBuf>,
        #[arg(long)]
        projection_days: Option<u32>,
        #[arg(long)]
        history_days: Option<u32>,
        #[arg(long)]
        no_bonuses: bool,
        /// Write the report into the configured reports directory
        #[arg(long)]
        export: bool,
    },
    /// Project future rewards
    Project {
        #[command(flatten)]
        snapshot: SnapshotArgs,
        #[arg(long)]
        days: Option<u32>,
        #[arg(long)]
        no_bonuses: bool,
    },
    /// Historical performance metrics
    Performance {
        #[command(flatten)]
        snapshot: SnapshotArgs,
    },
    /// Breakdown by rarity tier
    Distribution {
        #[command(flatten)]
        snapshot: SnapshotArgs,
    },
    /// Staking recommendations
    Strategy {
        #[command(flatten)]
        snapshot: SnapshotArgs,
        #[arg(long)]
        unstaked: Option<PathBuf>,
    },
    /// Day-by-day earnings for the trailing window
    History {
        #[command(flatten)]
        snapshot: SnapshotArgs,
        #[arg(long)]
        days: Option<u32>,
    },
    /// Estimate rewards for staking one NFT
    Estimate {
        /// Tier label, e.g. "Legendary"
        #[arg(long)]
        tier: String,
        /// Lock period in days
        #[arg(long)]
        period: u32,
        #[arg(long)]
        auto_compound: bool,
    },
}

fn resolve_now(raw: Option<&str>) -> Result<DateTime<Utc>, AnalyticsError> {
    match raw {
        None => Ok(Utc::now()),
        Some(raw) => parse_timestamp(raw)
            .ok_or_else(|| AnalyticsError::InvalidInput(format!("cannot parse --now '{}'", raw))),
    }
}

/// Day counts from the command line get the same bounds as the config values.
fn check_days(flag: &str, days: u32) -> Result<u32, AnalyticsError> {
    if (1..=MAX_HORIZON_DAYS).contains(&days) {
        Ok(days)
    } else {
        Err(AnalyticsError::InvalidInput(format!(
            "--{} must be between 1 and {}, got {}",
            flag, MAX_HORIZON_DAYS, days
        )))
    }
}

fn days_or(flag: &str, days: Option<u32>, default: u32) -> Result<u32, AnalyticsError> {
    days.map(|d| check_days(flag, d))
        .transpose()
        .map(|d| d.unwrap_or(default))
}

fn report_options(
    config: &Config,
    projection_days: Option<u32>,
    history_days: Option<u32>,
    no_bonuses: bool,
) -> Result<ReportOptions, AnalyticsError> {
    let defaults = ReportOptions::from(config);
    Ok(ReportOptions {
        projection_days: days_or("projection-days", projection_days, defaults.projection_days)?,
        history_days: days_or("history-days", history_days, defaults.history_days)?,
        include_bonuses: defaults.include_bonuses && !no_bonuses,
    })
}

fn load_unstaked(path: Option<&PathBuf>) -> Result<Vec<UnstakedNft>, AnalyticsError> {
    path.map(loader::load_unstaked).transpose().map(Option::unwrap_or_default)
}

fn load_stakes(snapshot: &SnapshotArgs) -> Result<Vec<StakeRecord>, AnalyticsError> {
    loader::load_stakes(&snapshot.stakes)
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Runs one subcommand and returns what should go to stdout.
fn execute(cli: Cli, config: &Config) -> Result<String> {
    let now = resolve_now(cli.now.as_deref())?;

    match cli.command {
        Command::Report {
            snapshot,
            unstaked,
            projection_days,
            history_days,
            no_bonuses,
            export,
        } => {
            let options = report_options(config, projection_days, history_days, no_bonuses)?;
            let stakes = load_stakes(&snapshot)?;
            let unstaked = load_unstaked(unstaked.as_ref())?;
            let report = StakingReport::build(&stakes, &unstaked, options, now);
            if export {
                let reporter = StakingReporter::new(&config.reports_dir)
                    .with_context(|| format!("creating reports dir {}", config.reports_dir))?;
                let path = reporter.export(&report)?;
                Ok(path.display().to_string())
            } else {
                to_json(&report)
            }
        }
        Command::Project {
            snapshot,
            days,
            no_bonuses,
        } => {
            let days = days_or("days", days, config.projection_days)?;
            let stakes = load_stakes(&snapshot)?;
            to_json(&calculate_projected_rewards(
                &stakes,
                days,
                config.include_bonuses && !no_bonuses,
            ))
        }
        Command::Performance { snapshot } => {
            let stakes = load_stakes(&snapshot)?;
            to_json(&calculate_performance_metrics_at(&stakes, now))
        }
        Command::Distribution { snapshot } => {
            let stakes = load_stakes(&snapshot)?;
            to_json(&get_tier_distribution(&stakes))
        }
        Command::Strategy { snapshot, unstaked } => {
            let stakes = load_stakes(&snapshot)?;
            let unstaked = load_unstaked(unstaked.as_ref())?;
            to_json(&calculate_optimal_strategy_at(&stakes, &unstaked, now))
        }
        Command::History { snapshot, days } => {
            let days = days_or("days", days, config.history_days)?;
            let stakes = load_stakes(&snapshot)?;
            to_json(&generate_earnings_time_series_at(&stakes, days, now))
        }
        Command::Estimate {
            tier,
            period,
            auto_compound,
        } => {
            let period = check_days("period", period)?;
            let tier = CanonicalTier::classify(Some(tier.as_str()));
            to_json(&calculate_estimated_rewards_at(tier, period, auto_compound, now))
        }
    }
}

/// 2 when the user can fix the failure by changing input, 1 otherwise.
fn exit_status(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<AnalyticsError>() {
        Some(analytics_err) if analytics_err.is_user_error() => 2,
        _ => 1,
    }
}

fn fail(err: anyhow::Error) -> ExitCode {
    match err.downcast_ref::<AnalyticsError>() {
        Some(analytics_err) => error!("❌ {} error: {}", analytics_err.category(), analytics_err),
        None => error!("❌ {:#}", err),
    }
    ExitCode::from(exit_status(&err))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match config::load_config() {
        Ok(config) => config,
        Err(err) => {
            // No logger yet.
            eprintln!("❌ {}", err);
            return ExitCode::from(exit_status(&err.into()));
        }
    };
    if let Err(err) = setup_logging(config.log_level_filter()) {
        eprintln!("Failed to initialize logging: {}", err);
        return ExitCode::FAILURE;
    }
    info!("🚀 TESOLA staking analytics starting");
    config.log_loaded();

    match execute(cli, &config) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => fail(err),
    }
}

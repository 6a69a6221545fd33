// src/analytics/report.rs
//! One-shot bundle of every analytic over a single snapshot.

use super::{
    distribution::{get_tier_distribution, TierDistribution},
    performance::{calculate_performance_metrics_at, PerformanceMetrics},
    projection::{calculate_projected_rewards, ProjectedRewards, DEFAULT_PROJECTION_DAYS},
    strategy::{calculate_optimal_strategy_at, StrategyAdvice},
    timeseries::{generate_earnings_time_series_at, EarningsPoint, DEFAULT_HISTORY_DAYS},
};
use crate::config::Config;
use crate::staking::{StakeRecord, UnstakedNft};
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportOptions {
    pub projection_days: u32,
    pub history_days: u32,
    pub include_bonuses: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            projection_days: DEFAULT_PROJECTION_DAYS,
            history_days: DEFAULT_HISTORY_DAYS,
            include_bonuses: true,
        }
    }
}

impl From<&Config> for ReportOptions {
    fn from(config: &Config) -> Self {
        Self {
            projection_days: config.projection_days,
            history_days: config.history_days,
            include_bonuses: config.include_bonuses,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakingReport {
    pub generated_at: DateTime<Utc>,
    pub stake_count: usize,
    pub unstaked_count: usize,
    pub options: ReportOptions,
    pub projection: ProjectedRewards,
    pub performance: PerformanceMetrics,
    pub distribution: TierDistribution,
    pub strategy: StrategyAdvice,
    pub earnings_history: Vec<EarningsPoint>,
}

impl StakingReport {
    /// Runs all analytics against the same `now`.
    pub fn build(
        stakes: &[StakeRecord],
        unstaked: &[UnstakedNft],
        options: ReportOptions,
        now: DateTime<Utc>,
    ) -> Self {
        let report = Self {
            generated_at: now,
            stake_count: stakes.len(),
            unstaked_count: unstaked.len(),
            options,
            projection: calculate_projected_rewards(
                stakes,
                options.projection_days,
                options.include_bonuses,
            ),
            performance: calculate_performance_metrics_at(stakes, now),
            distribution: get_tier_distribution(stakes),
            strategy: calculate_optimal_strategy_at(stakes, unstaked, now),
            earnings_history: generate_earnings_time_series_at(stakes, options.history_days, now),
        };

        info!(
            "📊 Staking report: {} staked / {} unstaked, {:.2} earned, {:.2} projected over {} days",
            report.stake_count,
            report.unstaked_count,
            report.performance.total_earned,
            report.projection.total_projected,
            options.projection_days
        );

        report
    }
}

// src/analytics/performance.rs
//! Historical performance of the active stakes.

use crate::staking::{days_between_ceil, CanonicalTier, StakeRecord};
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

/// Display snapshot of the stake with the best earned-per-day ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestPerformer {
    pub id: Option<String>,
    pub name: Option<String>,
    /// Tier label as recorded, not normalized
    pub tier: Option<String>,
    pub image: Option<String>,
    pub earned: f64,
    pub staking_duration: i64,
    pub daily_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    pub total_earned: f64,
    pub average_daily_earning: f64,
    pub best_performer: Option<BestPerformer>,
    /// Best performer's daily rate as a percentage of its tier's base rate
    pub staking_efficiency: f64,
    pub total_staking_days: i64,
    pub average_staking_period: f64,
}

pub fn calculate_performance_metrics(stakes: &[StakeRecord]) -> PerformanceMetrics {
    calculate_performance_metrics_at(stakes, Utc::now())
}

/// Stakes without a `staked_at` still count toward `total_earned` but are
/// left out of durations and the best-performer race.
pub fn calculate_performance_metrics_at(
    stakes: &[StakeRecord],
    now: DateTime<Utc>,
) -> PerformanceMetrics {
    if stakes.is_empty() {
        return PerformanceMetrics::default();
    }

    let mut total_earned = 0.0;
    let mut total_staking_days: i64 = 0;
    let mut best_performer: Option<BestPerformer> = None;
    let mut best_rate = 0.0;

    for stake in stakes {
        let earned = stake.earned_so_far;
        total_earned += earned;

        let Some(staked_at) = stake.staked_at else {
            continue;
        };
        // floor of one day keeps the per-day ratio finite
        let duration = days_between_ceil(staked_at, now).max(1);
        total_staking_days += duration;

        let daily_rate = earned / duration as f64;
        if daily_rate > best_rate {
            best_rate = daily_rate;
            best_performer = Some(BestPerformer {
                id: stake.id.clone(),
                name: stake.nft_name.clone(),
                tier: stake.nft_tier.clone(),
                image: stake.display_image().map(str::to_string),
                earned,
                staking_duration: duration,
                daily_rate,
            });
        }
    }

    let average_daily_earning = if total_staking_days > 0 {
        total_earned / total_staking_days as f64
    } else {
        0.0
    };
    let average_staking_period = total_staking_days as f64 / stakes.len() as f64;

    let staking_efficiency = best_performer
        .as_ref()
        .map(|best| {
            let max_rate = CanonicalTier::classify(best.tier.as_deref()).base_daily_rate();
            best.daily_rate / max_rate * 100.0
        })
        .unwrap_or(0.0);

    debug!(
        "Performance over {} stakes: earned {:.2} in {} staking days",
        stakes.len(),
        total_earned,
        total_staking_days
    );

    PerformanceMetrics {
        total_earned,
        average_daily_earning,
        best_performer,
        staking_efficiency,
        total_staking_days,
        average_staking_period,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn stake(id: &str, tier: &str, days_ago: i64, earned: f64) -> StakeRecord {
        StakeRecord {
            id: Some(id.to_string()),
            nft_tier: Some(tier.to_string()),
            nft_name: Some(format!("SOLARA {}", id)),
            staked_at: Some(now() - Duration::days(days_ago)),
            earned_so_far: earned,
            ..StakeRecord::default()
        }
    }

    #[test]
    fn test_empty_stakes() {
        let metrics = calculate_performance_metrics_at(&[], now());
        assert_eq!(metrics, PerformanceMetrics::default());
        assert!(metrics.best_performer.is_none());
    }

    #[test]
    fn test_single_stake_ten_days() {
        let metrics = calculate_performance_metrics_at(&[stake("1", "Rare", 10, 100.0)], now());
        assert_eq!(metrics.total_earned, 100.0);
        assert_eq!(metrics.total_staking_days, 10);
        assert_eq!(metrics.average_daily_earning, 10.0);
        assert_eq!(metrics.average_staking_period, 10.0);

        let best = metrics.best_performer.unwrap();
        assert_eq!(best.daily_rate, 10.0);
        assert_eq!(best.staking_duration, 10);
        assert_eq!(best.name.as_deref(), Some("SOLARA 1"));
        // 10/day against RARE's 50/day
        assert_approx_eq!(metrics.staking_efficiency, 20.0);
    }

    #[test]
    fn test_best_performer_is_highest_daily_rate() {
        let stakes = vec![
            stake("legendary", "Legendary", 5, 1000.0),
            stake("rare", "Rare", 40, 1500.0),
            stake("common", "Common", 200, 3000.0),
        ];
        let metrics = calculate_performance_metrics_at(&stakes, now());
        let best = metrics.best_performer.unwrap();
        assert_eq!(best.id.as_deref(), Some("legendary"));
        assert_eq!(best.daily_rate, 200.0);
        assert_eq!(metrics.total_earned, 5500.0);
        assert_eq!(metrics.total_staking_days, 245);
        assert_approx_eq!(metrics.staking_efficiency, 100.0);
    }

    #[test]
    fn test_same_day_stake_counts_as_one_day() {
        let fresh = StakeRecord {
            staked_at: Some(now()),
            earned_so_far: 30.0,
            ..StakeRecord::default()
        };
        let metrics = calculate_performance_metrics_at(&[fresh], now());
        assert_eq!(metrics.total_staking_days, 1);
        assert_eq!(metrics.average_daily_earning, 30.0);
    }

    #[test]
    fn test_zero_earnings_have_no_best_performer() {
        let metrics = calculate_performance_metrics_at(&[stake("1", "Epic", 3, 0.0)], now());
        assert!(metrics.best_performer.is_none());
        assert_eq!(metrics.staking_efficiency, 0.0);
        assert_eq!(metrics.total_staking_days, 3);
    }

    #[test]
    fn test_undated_stake_contributes_earnings_only() {
        let undated = StakeRecord {
            earned_so_far: 50.0,
            ..StakeRecord::default()
        };
        let stakes = vec![stake("1", "Common", 4, 100.0), undated];
        let metrics = calculate_performance_metrics_at(&stakes, now());
        assert_eq!(metrics.total_earned, 150.0);
        assert_eq!(metrics.total_staking_days, 4);
        assert_eq!(metrics.average_staking_period, 2.0);
        assert_eq!(metrics.best_performer.unwrap().id.as_deref(), Some("1"));
    }
}

// src/analytics/estimator.rs
//! Reward estimate for staking one NFT for a chosen lock period.

use crate::staking::CanonicalTier;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Extra multiplier granted when rewards are auto-compounded.
pub const AUTO_COMPOUND_BONUS: f64 = 0.1;

/// Number of per-day entries returned in `daily_rewards`.
const DAILY_PREVIEW_DAYS: u32 = 7;

/// Long-term lock multiplier: 365+ days 2.0, 180+ 1.7, 90+ 1.4, 30+ 1.2.
pub fn lock_period_multiplier(staking_period_days: u32) -> f64 {
    match staking_period_days {
        365.. => 2.0,
        180.. => 1.7,
        90.. => 1.4,
        30.. => 1.2,
        _ => 1.0,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardEstimate {
    pub tier: CanonicalTier,
    pub base_rate: f64,
    pub total_rewards: f64,
    /// Whole-token reward for each of the first (up to) seven days
    pub daily_rewards: Vec<f64>,
    pub average_daily_reward: f64,
    /// Lock bonus in whole percent
    pub long_term_bonus: u32,
    /// Auto-compound bonus in whole percent
    pub auto_compound_bonus: u32,
    pub total_multiplier: f64,
    pub staking_period_days: u32,
    /// `None` when the end date falls outside the representable calendar
    pub estimated_end_date: Option<DateTime<Utc>>,
}

pub fn calculate_estimated_rewards(
    tier: CanonicalTier,
    staking_period_days: u32,
    auto_compound: bool,
) -> RewardEstimate {
    calculate_estimated_rewards_at(tier, staking_period_days, auto_compound, Utc::now())
}

pub fn calculate_estimated_rewards_at(
    tier: CanonicalTier,
    staking_period_days: u32,
    auto_compound: bool,
    now: DateTime<Utc>,
) -> RewardEstimate {
    let base_rate = tier.base_daily_rate();
    let multiplier = lock_period_multiplier(staking_period_days);
    let compound = if auto_compound { AUTO_COMPOUND_BONUS } else { 0.0 };
    let total_multiplier = multiplier * (1.0 + compound);

    let total_rewards = (base_rate * f64::from(staking_period_days) * total_multiplier).floor();
    let daily_rewards = vec![
        (base_rate * total_multiplier).floor();
        staking_period_days.min(DAILY_PREVIEW_DAYS) as usize
    ];
    let average_daily_reward = if staking_period_days > 0 {
        total_rewards / f64::from(staking_period_days)
    } else {
        0.0
    };

    RewardEstimate {
        tier,
        base_rate,
        total_rewards,
        daily_rewards,
        average_daily_reward,
        long_term_bonus: ((multiplier - 1.0) * 100.0).round() as u32,
        auto_compound_bonus: if auto_compound { 10 } else { 0 },
        total_multiplier,
        staking_period_days,
        estimated_end_date: now
            .checked_add_signed(Duration::days(i64::from(staking_period_days))),
    }
}

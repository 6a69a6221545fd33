// src/analytics/strategy.rs
//! Heuristic staking advice.
//!
//! The gain figures are rough advisory estimates in daily-reward units and
//! are not tied to the reward table; never use them for accounting.

use super::distribution::get_tier_distribution;
use crate::staking::{days_between_ceil, StakeRecord, TierSource, UnstakedNft, BONUS_THRESHOLDS};
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

/// Window before a release date in which restaking is suggested.
const RESTAKE_WINDOW_DAYS: i64 = 7;
/// How close to a bonus threshold a stake must be to get flagged.
const THRESHOLD_WINDOW_DAYS: i64 = 5;

const RESTAKE_GAIN_PER_NFT: f64 = 25.0;
const HIGH_TIER_GAIN_PER_NFT: f64 = 100.0;
const THRESHOLD_GAIN_PER_NFT: f64 = 50.0;
const STAKE_MORE_GAIN_PER_NFT: f64 = 25.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyAdvice {
    pub recommendations: Vec<String>,
    pub suggested_actions: Vec<String>,
    pub potential_gains: f64,
}

impl StrategyAdvice {
    fn push(&mut self, recommendation: Option<String>, action: Option<String>, gain: f64) {
        self.recommendations.extend(recommendation);
        self.suggested_actions.extend(action);
        self.potential_gains += gain;
    }
}

fn plural(count: usize) -> &'static str {
    if count > 1 {
        "s"
    } else {
        ""
    }
}

pub fn calculate_optimal_strategy(stakes: &[StakeRecord], unstaked: &[UnstakedNft]) -> StrategyAdvice {
    calculate_optimal_strategy_at(stakes, unstaked, Utc::now())
}

pub fn calculate_optimal_strategy_at(
    stakes: &[StakeRecord],
    unstaked: &[UnstakedNft],
    now: DateTime<Utc>,
) -> StrategyAdvice {
    let mut advice = StrategyAdvice::default();

    // Releases landing within the restake window
    let expiring = stakes
        .iter()
        .filter_map(|stake| stake.release_date)
        .map(|release| days_between_ceil(now, release))
        .filter(|days| *days > 0 && *days <= RESTAKE_WINDOW_DAYS)
        .count();
    if expiring > 0 {
        advice.push(
            Some(format!(
                "You have {} NFT{} reaching optimal restaking time soon.",
                expiring,
                plural(expiring)
            )),
            Some("Consider restaking these NFTs to maintain your earning rate".to_string()),
            expiring as f64 * RESTAKE_GAIN_PER_NFT,
        );
    }

    // No high-tier stakes. Only meaningful once something is staked.
    if !stakes.is_empty() {
        let distribution = get_tier_distribution(stakes);
        if distribution.counts.legendary == 0 && distribution.counts.epic == 0 {
            let high_tier_unstaked = unstaked
                .iter()
                .filter(|nft| nft.canonical_tier().is_high_tier())
                .count();
            if high_tier_unstaked > 0 {
                advice.push(
                    Some("Your portfolio lacks higher tier NFTs which offer better rewards.".to_string()),
                    Some(format!(
                        "Stake your {} higher tier NFT{} for better rewards",
                        high_tier_unstaked,
                        plural(high_tier_unstaked)
                    )),
                    high_tier_unstaked as f64 * HIGH_TIER_GAIN_PER_NFT,
                );
            } else {
                advice.push(
                    Some("Your portfolio lacks higher tier NFTs which offer better rewards.".to_string()),
                    Some("Consider acquiring higher tier NFTs for better rewards".to_string()),
                    0.0,
                );
            }
        }
    }

    // Stakes just short of a bonus threshold
    let near_threshold = stakes
        .iter()
        .filter_map(|stake| stake.staked_at)
        .map(|staked_at| days_between_ceil(staked_at, now))
        .filter(|days| {
            BONUS_THRESHOLDS
                .iter()
                .any(|threshold| *days >= threshold - THRESHOLD_WINDOW_DAYS && *days < *threshold)
        })
        .count();
    if near_threshold > 0 {
        advice.push(
            Some(format!(
                "You have {} NFT{} close to reaching a bonus threshold.",
                near_threshold,
                plural(near_threshold)
            )),
            Some("Keep these NFTs staked to receive increased rewards".to_string()),
            near_threshold as f64 * THRESHOLD_GAIN_PER_NFT,
        );
    }

    if advice.recommendations.is_empty() {
        let available = unstaked.len();
        if stakes.is_empty() {
            let action = (available > 0)
                .then(|| format!("Stake your {} available NFT{}", available, plural(available)));
            advice.push(
                Some("Start staking your NFTs to earn TESOLA tokens.".to_string()),
                action,
                available as f64 * STAKE_MORE_GAIN_PER_NFT,
            );
        } else if available > 0 {
            advice.push(
                Some("Your staking portfolio is performing well!".to_string()),
                Some(format!(
                    "Stake your remaining {} NFT{} to maximize rewards",
                    available,
                    plural(available)
                )),
                available as f64 * STAKE_MORE_GAIN_PER_NFT,
            );
        } else {
            advice.push(
                Some("Your staking portfolio is performing well!".to_string()),
                Some("Continue with your current staking strategy".to_string()),
                0.0,
            );
        }
    }

    debug!(
        "Strategy: {} recommendation(s), potential gains {:.2}",
        advice.recommendations.len(),
        advice.potential_gains
    );

    advice
}

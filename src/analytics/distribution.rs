// src/analytics/distribution.rs
//! Portfolio breakdown by canonical tier.

use crate::staking::{StakeRecord, TierMap, TierSource};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierDistribution {
    pub counts: TierMap<u32>,
    /// Share of staked NFTs per tier, in percent
    pub percentages: TierMap<f64>,
    /// Share of the portfolio's daily base reward per tier, in percent
    pub reward_share: TierMap<f64>,
}

pub fn get_tier_distribution(stakes: &[StakeRecord]) -> TierDistribution {
    if stakes.is_empty() {
        return TierDistribution::default();
    }

    let mut counts: TierMap<u32> = TierMap::default();
    let mut contribution: TierMap<f64> = TierMap::default();
    let mut total_daily = 0.0;

    for stake in stakes {
        let tier = stake.canonical_tier();
        let rate = tier.base_daily_rate();
        *counts.get_mut(tier) += 1;
        *contribution.get_mut(tier) += rate;
        total_daily += rate;
    }

    let total_nfts = stakes.len() as f64;
    let percentages = counts.map(|_, count| f64::from(*count) / total_nfts * 100.0);
    let reward_share = contribution.map(|_, amount| {
        if total_daily > 0.0 {
            amount / total_daily * 100.0
        } else {
            0.0
        }
    });

    TierDistribution {
        counts,
        percentages,
        reward_share,
    }
}

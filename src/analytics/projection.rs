// src/analytics/projection.rs
//! Forward-looking reward projection for the current staking portfolio.

use crate::staking::{bonus_multiplier, CanonicalTier, StakeRecord, TierSource};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_PROJECTION_DAYS: u32 = 365;

/// Days that always get a timeline point, besides every 30th day and the last one.
const MILESTONE_DAYS: [u32; 6] = [1, 7, 14, 90, 180, 365];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    pub day: u32,
    pub reward: f64,
    pub cumulative: f64,
    pub multiplier: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedRewards {
    pub total_projected: f64,
    /// Portfolio base rate per day before bonuses
    pub daily_rate: f64,
    /// Sparse timeline: milestone days, every 30th day and the final day
    pub timeline: Vec<ProjectionPoint>,
    /// Base-rate contribution of each tier; empty when nothing is staked
    pub by_tier: BTreeMap<CanonicalTier, f64>,
}

/// Projects cumulative rewards over the next `days` days.
///
/// The bonus multiplier is taken from the projection day itself, i.e. the
/// whole portfolio is treated as if every stake started today.
pub fn calculate_projected_rewards(
    stakes: &[StakeRecord],
    days: u32,
    include_bonuses: bool,
) -> ProjectedRewards {
    if stakes.is_empty() {
        return ProjectedRewards::default();
    }

    let mut by_tier: BTreeMap<CanonicalTier, f64> =
        CanonicalTier::ALL.iter().map(|tier| (*tier, 0.0)).collect();
    let mut daily_rate = 0.0;
    for stake in stakes {
        let tier = stake.canonical_tier();
        let rate = tier.base_daily_rate();
        daily_rate += rate;
        *by_tier.entry(tier).or_insert(0.0) += rate;
    }

    let mut timeline = Vec::new();
    let mut cumulative = 0.0;
    for day in 1..=days {
        let multiplier = if include_bonuses {
            bonus_multiplier(i64::from(day))
        } else {
            1.0
        };
        let reward = daily_rate * multiplier;
        cumulative += reward;

        if MILESTONE_DAYS.contains(&day) || day % 30 == 0 || day == days {
            timeline.push(ProjectionPoint {
                day,
                reward,
                cumulative,
                multiplier,
            });
        }
    }

    debug!(
        "Projected {:.2} over {} days for {} stakes (base {:.2}/day)",
        cumulative,
        days,
        stakes.len(),
        daily_rate
    );

    ProjectedRewards {
        total_projected: cumulative,
        daily_rate,
        timeline,
        by_tier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;

    fn stake(tier: &str) -> StakeRecord {
        StakeRecord {
            nft_tier: Some(tier.to_string()),
            ..StakeRecord::default()
        }
    }

    #[test]
    fn test_empty_portfolio_projects_nothing() {
        let projection = calculate_projected_rewards(&[], 365, true);
        assert_eq!(projection, ProjectedRewards::default());
        assert!(projection.by_tier.is_empty());

        let json = serde_json::to_value(&projection).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "totalProjected": 0.0, "dailyRate": 0.0, "timeline": [], "byTier": {} })
        );
    }

    #[test]
    fn test_single_legendary_first_day() {
        let projection = calculate_projected_rewards(&[stake("Legendary")], 365, true);
        assert_eq!(projection.daily_rate, 200.0);

        let first = &projection.timeline[0];
        assert_eq!(first.day, 1);
        assert_eq!(first.multiplier, 2.0);
        assert_eq!(first.reward, 400.0);
        assert_eq!(first.cumulative, 400.0);
    }

    #[test]
    fn test_timeline_is_sparse() {
        let projection = calculate_projected_rewards(&[stake("Rare")], 365, true);
        let days: Vec<u32> = projection.timeline.iter().map(|p| p.day).collect();
        assert_eq!(
            days,
            vec![1, 7, 14, 30, 60, 90, 120, 150, 180, 210, 240, 270, 300, 330, 360, 365]
        );
    }

    #[test]
    fn test_final_day_always_present() {
        let projection = calculate_projected_rewards(&[stake("Rare")], 45, true);
        assert_eq!(projection.timeline.last().unwrap().day, 45);
        assert_approx_eq!(projection.timeline.last().unwrap().cumulative, projection.total_projected);
    }

    #[test]
    fn test_total_with_bonus_schedule() {
        // COMMON 25/day over 30 days: 7*2.0 + 7*1.75 + 16*1.5 = 50.25 multiplier-days
        let projection = calculate_projected_rewards(&[stake("common")], 30, true);
        assert_approx_eq!(projection.total_projected, 25.0 * 50.25);
    }

    #[test]
    fn test_without_bonuses_is_linear() {
        let stakes = vec![stake("Legendary"), stake("Epic"), stake("unknown")];
        let projection = calculate_projected_rewards(&stakes, 100, false);
        assert_eq!(projection.daily_rate, 325.0);
        assert_approx_eq!(projection.total_projected, 32_500.0);
        assert!(projection.timeline.iter().all(|p| p.multiplier == 1.0));
    }

    #[test]
    fn test_by_tier_contributions() {
        let stakes = vec![stake("Epic"), stake("EPIC"), stake(""), stake("Rare")];
        let projection = calculate_projected_rewards(&stakes, 10, true);
        assert_eq!(projection.by_tier[&CanonicalTier::Epic], 200.0);
        assert_eq!(projection.by_tier[&CanonicalTier::Rare], 50.0);
        assert_eq!(projection.by_tier[&CanonicalTier::Common], 25.0);
        assert_eq!(projection.by_tier[&CanonicalTier::Legendary], 0.0);
    }

    #[test]
    fn test_zero_day_horizon() {
        let projection = calculate_projected_rewards(&[stake("Epic")], 0, true);
        assert_eq!(projection.daily_rate, 100.0);
        assert_eq!(projection.total_projected, 0.0);
        assert!(projection.timeline.is_empty());
    }
}

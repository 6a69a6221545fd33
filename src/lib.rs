//! # TESOLA Staking Analytics
//!
//! Reward analytics for SOLARA NFTs staked in the TESOLA staking program.
//! Given the wallet's active stakes (and optionally its unstaked NFTs) it
//! computes:
//!
//! - **Projection**: cumulative rewards over a horizon under the bonus schedule
//! - **Performance**: totals, best performer and efficiency so far
//! - **Distribution**: counts and reward share per rarity tier
//! - **Strategy**: heuristic restake / diversify / keep-staked advice
//! - **History**: day-by-day reconstruction of recent earnings
//! - **Estimates**: expected rewards for staking one NFT for a lock period
//!
//! The analytics never touch the network or the chain; records come from
//! the staking backend and are only read.

pub mod analytics;
pub mod config;
pub mod error;
pub mod staking;
pub mod utils;

pub use analytics::{
    calculate_estimated_rewards, calculate_optimal_strategy, calculate_performance_metrics,
    calculate_projected_rewards, generate_earnings_time_series, get_tier_distribution,
    ReportOptions, StakingReport, StakingReporter,
};
pub use error::{AnalyticsError, Result};
pub use staking::{CanonicalTier, StakeRecord, TierSource, UnstakedNft};

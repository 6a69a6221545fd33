// src/staking/bonus.rs
//! Time-based bonus schedule and whole-day arithmetic.

use chrono::{DateTime, Utc};

pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Bonus multiplier for a stake that has been staked `days_staked` days.
///
/// Brackets (inclusive upper bounds): 7 → 2.0, 14 → 1.75, 30 → 1.5,
/// 90 → 1.2, 180 → 1.4, 365 → 1.7, beyond → 2.0. The 31–90 bracket is
/// lower than 15–30; that dip is part of the published schedule.
pub fn bonus_multiplier(days_staked: i64) -> f64 {
    if days_staked <= 7 {
        2.0
    } else if days_staked <= 14 {
        1.75
    } else if days_staked <= 30 {
        1.5
    } else if days_staked <= 90 {
        1.2
    } else if days_staked <= 180 {
        1.4
    } else if days_staked <= 365 {
        1.7
    } else {
        2.0
    }
}

/// Elapsed days after which the bonus bracket changes for a long-running
/// stake, as watched by the strategy advisor.
pub const BONUS_THRESHOLDS: [i64; 4] = [30, 90, 180, 365];

/// Whole days from `from` to `to`, rounded up. Negative when `to` precedes
/// `from`.
pub fn days_between_ceil(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    let millis = (to - from).num_milliseconds();
    // ceil division that also holds for negative spans
    let quotient = millis / MILLIS_PER_DAY;
    if millis % MILLIS_PER_DAY > 0 {
        quotient + 1
    } else {
        quotient
    }
}

// src/analytics/timeseries.rs
//! Day-by-day reconstruction of recent earnings.

use crate::staking::{bonus_multiplier, days_between_ceil, StakeRecord, TierSource};
use chrono::{DateTime, Duration, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_HISTORY_DAYS: u32 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsPoint {
    /// 1-based position in the window
    pub day: u32,
    /// UTC midnight of this day
    pub date: DateTime<Utc>,
    pub earned: f64,
    pub cumulative: f64,
}

pub fn generate_earnings_time_series(stakes: &[StakeRecord], days: u32) -> Vec<EarningsPoint> {
    generate_earnings_time_series_at(stakes, days, Utc::now())
}

/// Builds `days` entries ending on the day of `now`, oldest first.
///
/// Each stake adds its tier's base rate times the bonus multiplier for its
/// own elapsed time on every day at or after its start. Undated and
/// future-dated stakes contribute nothing. A window reaching back past the
/// first representable calendar day is cut short there.
pub fn generate_earnings_time_series_at(
    stakes: &[StakeRecord],
    days: u32,
    now: DateTime<Utc>,
) -> Vec<EarningsPoint> {
    let today = now.date_naive().and_time(NaiveTime::MIN).and_utc();
    let representable = (today - DateTime::<Utc>::MIN_UTC).num_days() + 1;
    let window = i64::from(days).min(representable);
    if window == 0 {
        return Vec::new();
    }
    let start = today - Duration::days(window - 1);

    let mut series: Vec<EarningsPoint> = (0..window)
        .map(|index| EarningsPoint {
            day: index as u32 + 1,
            date: start + Duration::days(index),
            earned: 0.0,
            cumulative: 0.0,
        })
        .collect();

    for stake in stakes {
        let Some(staked_at) = stake.staked_at else {
            continue;
        };
        if staked_at > now {
            continue;
        }
        let base_rate = stake.canonical_tier().base_daily_rate();

        for point in series.iter_mut().filter(|point| point.date >= staked_at) {
            let days_staked = days_between_ceil(staked_at, point.date);
            point.earned += base_rate * bonus_multiplier(days_staked);
        }
    }

    let mut cumulative = 0.0;
    for point in series.iter_mut() {
        cumulative += point.earned;
        point.cumulative = cumulative;
    }

    series
}

// src/config/settings.rs
use std::env;

/// Longest horizon accepted for projections and history windows (~10 years).
pub const MAX_HORIZON_DAYS: u32 = 3650;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Default horizon for reward projections, in days
    pub projection_days: u32,
    /// Default trailing window for the earnings history, in days
    pub history_days: u32,
    /// Whether projections apply the time-based bonus schedule
    pub include_bonuses: bool,
    /// Directory that exported reports are written into
    pub reports_dir: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            projection_days: 365,
            history_days: 30,
            include_bonuses: true,
            reports_dir: "./staking_reports".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Config::default();
        Config {
            projection_days: env::var("ANALYTICS_PROJECTION_DAYS")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.projection_days),
            history_days: env::var("ANALYTICS_HISTORY_DAYS")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.history_days),
            include_bonuses: env::var("ANALYTICS_INCLUDE_BONUSES")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.include_bonuses),
            reports_dir: env::var("ANALYTICS_REPORTS_DIR").unwrap_or(defaults.reports_dir),
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    /// Returns every problem found, empty when the config is usable.
    pub fn validation_errors(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.projection_days == 0 || self.projection_days > MAX_HORIZON_DAYS {
            problems.push(format!(
                "ANALYTICS_PROJECTION_DAYS must be between 1 and {}, got {}",
                MAX_HORIZON_DAYS, self.projection_days
            ));
        }
        if self.history_days == 0 || self.history_days > MAX_HORIZON_DAYS {
            problems.push(format!(
                "ANALYTICS_HISTORY_DAYS must be between 1 and {}, got {}",
                MAX_HORIZON_DAYS, self.history_days
            ));
        }
        if self.reports_dir.trim().is_empty() {
            problems.push("ANALYTICS_REPORTS_DIR cannot be empty".to_string());
        }
        problems
    }

    pub fn log_loaded(&self) {
        log::info!("Analytics Configuration Loaded: {:?}", self);
    }

    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

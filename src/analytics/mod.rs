// src/analytics/mod.rs
//! Staking reward analytics.
//!
//! Every function here is a pure computation over borrowed stake lists:
//! no I/O, no shared state, and no error cases. Empty input yields the
//! zero-valued shape of the normal output. Functions that depend on the
//! current time come in two forms, one reading `Utc::now()` once and an
//! `*_at` form taking `now` explicitly.

pub mod distribution;
pub mod estimator;
pub mod performance;
pub mod projection;
pub mod report;
pub mod reporter;
pub mod strategy;
pub mod timeseries;

pub use distribution::*;
pub use estimator::*;
pub use performance::*;
pub use projection::*;
pub use report::*;
pub use reporter::*;
pub use strategy::*;
pub use timeseries::*;

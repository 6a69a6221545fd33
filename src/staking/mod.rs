// src/staking/mod.rs
//! Shared staking data model: records, canonical tiers, the base reward
//! table and the time-based bonus schedule.

pub mod bonus;
pub mod loader;
pub mod records;
pub mod tier;

pub use bonus::*;
pub use records::*;
pub use tier::*;

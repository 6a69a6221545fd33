// src/staking/tier.rs
//! Canonical NFT rarity tiers and the daily base reward table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four rarity buckets every free-form tier string maps into.
///
/// Declaration order is the classification priority and also the order
/// used when tiers are listed or used as map keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CanonicalTier {
    Legendary,
    Epic,
    Rare,
    Common,
}

impl CanonicalTier {
    pub const ALL: [CanonicalTier; 4] = [
        CanonicalTier::Legendary,
        CanonicalTier::Epic,
        CanonicalTier::Rare,
        CanonicalTier::Common,
    ];

    /// Classifies a free-form tier label by case-insensitive substring
    /// match, checking LEGENDARY, EPIC, RARE in that order. Anything else,
    /// including a missing or empty label, is COMMON.
    pub fn classify(raw: Option<&str>) -> CanonicalTier {
        let normalized = raw.unwrap_or_default().to_uppercase();
        if normalized.contains("LEGENDARY") {
            CanonicalTier::Legendary
        } else if normalized.contains("EPIC") {
            CanonicalTier::Epic
        } else if normalized.contains("RARE") {
            CanonicalTier::Rare
        } else {
            CanonicalTier::Common
        }
    }

    /// Daily base reward (TESOLA per staked NFT per day).
    pub fn base_daily_rate(self) -> f64 {
        match self {
            CanonicalTier::Legendary => 200.0,
            CanonicalTier::Epic => 100.0,
            CanonicalTier::Rare => 50.0,
            CanonicalTier::Common => 25.0,
        }
    }

    pub fn is_high_tier(self) -> bool {
        matches!(self, CanonicalTier::Legendary | CanonicalTier::Epic)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CanonicalTier::Legendary => "LEGENDARY",
            CanonicalTier::Epic => "EPIC",
            CanonicalTier::Rare => "RARE",
            CanonicalTier::Common => "COMMON",
        }
    }
}

impl fmt::Display for CanonicalTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything that carries a free-form tier label.
pub trait TierSource {
    fn raw_tier(&self) -> Option<&str>;

    fn canonical_tier(&self) -> CanonicalTier {
        CanonicalTier::classify(self.raw_tier())
    }
}

/// A value per canonical tier, serialized as `{ "LEGENDARY": .., "EPIC": .., .. }`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct TierMap<T> {
    pub legendary: T,
    pub epic: T,
    pub rare: T,
    pub common: T,
}

impl<T> TierMap<T> {
    pub fn get(&self, tier: CanonicalTier) -> &T {
        match tier {
            CanonicalTier::Legendary => &self.legendary,
            CanonicalTier::Epic => &self.epic,
            CanonicalTier::Rare => &self.rare,
            CanonicalTier::Common => &self.common,
        }
    }

    pub fn get_mut(&mut self, tier: CanonicalTier) -> &mut T {
        match tier {
            CanonicalTier::Legendary => &mut self.legendary,
            CanonicalTier::Epic => &mut self.epic,
            CanonicalTier::Rare => &mut self.rare,
            CanonicalTier::Common => &mut self.common,
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(CanonicalTier, &T) -> U) -> TierMap<U> {
        TierMap {
            legendary: f(CanonicalTier::Legendary, &self.legendary),
            epic: f(CanonicalTier::Epic, &self.epic),
            rare: f(CanonicalTier::Rare, &self.rare),
            common: f(CanonicalTier::Common, &self.common),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (CanonicalTier, &T)> {
        CanonicalTier::ALL.into_iter().map(move |tier| (tier, self.get(tier)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_substring_case_insensitive() {
        assert_eq!(CanonicalTier::classify(Some("Legendary")), CanonicalTier::Legendary);
        assert_eq!(CanonicalTier::classify(Some("super legendary ape")), CanonicalTier::Legendary);
        assert_eq!(CanonicalTier::classify(Some("epic")), CanonicalTier::Epic);
        assert_eq!(CanonicalTier::classify(Some("Ultra RARE")), CanonicalTier::Rare);
        assert_eq!(CanonicalTier::classify(Some("Common")), CanonicalTier::Common);
    }

    #[test]
    fn test_classify_priority_order() {
        // A label that mentions several tiers resolves to the highest-priority one.
        assert_eq!(CanonicalTier::classify(Some("rare epic legendary")), CanonicalTier::Legendary);
        assert_eq!(CanonicalTier::classify(Some("RARE-EPIC")), CanonicalTier::Epic);
    }

    #[test]
    fn test_classify_defaults_to_common() {
        assert_eq!(CanonicalTier::classify(None), CanonicalTier::Common);
        assert_eq!(CanonicalTier::classify(Some("")), CanonicalTier::Common);
        assert_eq!(CanonicalTier::classify(Some("mythic")), CanonicalTier::Common);
        // "LEGEND" alone is not a substring match for LEGENDARY.
        assert_eq!(CanonicalTier::classify(Some("Legend")), CanonicalTier::Common);
    }

    #[test]
    fn test_base_rates() {
        let rates: Vec<f64> = CanonicalTier::ALL.iter().map(|t| t.base_daily_rate()).collect();
        assert_eq!(rates, vec![200.0, 100.0, 50.0, 25.0]);
    }

    #[test]
    fn test_tier_map_serializes_with_uppercase_keys() {
        let mut counts: TierMap<u32> = TierMap::default();
        *counts.get_mut(CanonicalTier::Epic) += 2;
        let json = serde_json::to_value(counts).unwrap();
        assert_eq!(json["EPIC"], 2);
        assert_eq!(json["LEGENDARY"], 0);
        assert_eq!(json.as_object().unwrap().len(), 4);
    }
}

// src/staking/records.rs
//! Stake and owned-NFT records as returned by the staking backend.

use super::tier::TierSource;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One NFT currently staked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StakeRecord {
    #[serde(default, deserialize_with = "opaque_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub nft_tier: Option<String>,
    #[serde(default)]
    pub nft_name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub staked_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub release_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub earned_so_far: f64,
}

impl StakeRecord {
    /// Image to display: `image_url` first, then `image`.
    pub fn display_image(&self) -> Option<&str> {
        self.image_url.as_deref().or(self.image.as_deref())
    }
}

impl TierSource for StakeRecord {
    fn raw_tier(&self) -> Option<&str> {
        self.nft_tier.as_deref()
    }
}

/// A metadata attribute (`{ "trait_type": "Tier", "value": "Epic" }`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NftAttribute {
    #[serde(default)]
    pub trait_type: String,
    #[serde(default)]
    pub value: Value,
}

/// An NFT the wallet owns but has not staked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnstakedNft {
    #[serde(default, deserialize_with = "opaque_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub attributes: Vec<NftAttribute>,
}

pub const TIER_TRAIT: &str = "Tier";

impl TierSource for UnstakedNft {
    fn raw_tier(&self) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.trait_type == TIER_TRAIT)
            .and_then(|attr| attr.value.as_str())
    }
}

fn opaque_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => parse_timestamp(&s),
        Value::Number(n) => n.as_i64().and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
        _ => None,
    })
}

/// Parses the timestamp shapes the backend has been seen to emit: RFC 3339,
/// naive date-times (taken as UTC), and bare dates (UTC midnight).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::staking::CanonicalTier;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_stake_record_from_backend_json() {
        let stake: StakeRecord = serde_json::from_value(json!({
            "id": 42,
            "nft_tier": "Legendary",
            "nft_name": "SOLARA #42",
            "image": "ipfs://abc",
            "staked_at": "2024-03-01T12:00:00.000Z",
            "release_date": "2024-06-01T12:00:00Z",
            "earned_so_far": 1250.5
        }))
        .unwrap();

        assert_eq!(stake.id.as_deref(), Some("42"));
        assert_eq!(stake.canonical_tier(), CanonicalTier::Legendary);
        assert_eq!(stake.display_image(), Some("ipfs://abc"));
        assert_eq!(
            stake.staked_at,
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap())
        );
        assert_eq!(stake.earned_so_far, 1250.5);
    }

    #[test]
    fn test_malformed_fields_fall_back_to_defaults() {
        let stake: StakeRecord = serde_json::from_value(json!({
            "id": "abc",
            "staked_at": "not a date",
            "release_date": null,
            "earned_so_far": "oops"
        }))
        .unwrap();

        assert_eq!(stake.staked_at, None);
        assert_eq!(stake.release_date, None);
        assert_eq!(stake.earned_so_far, 0.0);
        assert_eq!(stake.canonical_tier(), CanonicalTier::Common);
    }

    #[test]
    fn test_timestamp_shapes() {
        let expected = Utc.with_ymd_and_hms(2024, 5, 14, 0, 0, 0).unwrap();
        assert_eq!(parse_timestamp("2024-05-14"), Some(expected));
        assert_eq!(parse_timestamp("2024-05-14T00:00:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-05-14 00:00:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-05-14T09:00:00+09:00"), Some(expected));
        assert_eq!(parse_timestamp("  "), None);

        let stake: StakeRecord =
            serde_json::from_value(json!({ "staked_at": expected.timestamp_millis() })).unwrap();
        assert_eq!(stake.staked_at, Some(expected));
    }

    #[test]
    fn test_image_url_takes_precedence() {
        let stake = StakeRecord {
            image_url: Some("https://gateway/1.png".to_string()),
            image: Some("ipfs://1".to_string()),
            ..StakeRecord::default()
        };
        assert_eq!(stake.display_image(), Some("https://gateway/1.png"));
    }

    #[test]
    fn test_unstaked_tier_comes_from_tier_attribute() {
        let nft: UnstakedNft = serde_json::from_value(json!({
            "name": "SOLARA #7",
            "attributes": [
                { "trait_type": "Background", "value": "Epic Sky" },
                { "trait_type": "Level", "value": 3 },
                { "trait_type": "Tier", "value": "Epic" }
            ]
        }))
        .unwrap();
        assert_eq!(nft.raw_tier(), Some("Epic"));
        assert_eq!(nft.canonical_tier(), CanonicalTier::Epic);

        let bare = UnstakedNft::default();
        assert_eq!(bare.canonical_tier(), CanonicalTier::Common);
    }
}

// src/staking/loader.rs
//! Reads stake and owned-NFT snapshots exported from the staking backend.

use super::records::{StakeRecord, UnstakedNft};
use crate::error::{AnalyticsError, Result};
use log::info;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;

/// A list given either bare or wrapped in one of the backend's envelopes
/// (`{ "activeStakes": [...] }`, optionally under `"data"`, or `{ "nfts": [...] }`).
#[derive(Deserialize)]
#[serde(untagged)]
enum Snapshot<T> {
    Bare(Vec<T>),
    Data { data: Envelope<T> },
    Wrapped(Envelope<T>),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope<T> {
    #[serde(alias = "nfts", alias = "stakes")]
    active_stakes: Vec<T>,
}

impl<T> Snapshot<T> {
    fn into_items(self) -> Vec<T> {
        match self {
            Snapshot::Bare(items) => items,
            Snapshot::Wrapped(envelope) | Snapshot::Data { data: envelope } => envelope.active_stakes,
        }
    }
}

pub fn parse_list<T: DeserializeOwned>(json: &str) -> Result<Vec<T>> {
    let snapshot: Snapshot<T> = serde_json::from_str(json).map_err(|e| {
        AnalyticsError::Parse(format!(
            "expected a JSON array or a staking envelope object: {}",
            e
        ))
    })?;
    Ok(snapshot.into_items())
}

fn load_list<T: DeserializeOwned>(path: &Path, what: &str) -> Result<Vec<T>> {
    let contents = std::fs::read_to_string(path)?;
    let items = parse_list(&contents)?;
    info!("📥 Loaded {} {} from {}", items.len(), what, path.display());
    Ok(items)
}

pub fn load_stakes(path: impl AsRef<Path>) -> Result<Vec<StakeRecord>> {
    load_list(path.as_ref(), "active stakes")
}

pub fn load_unstaked(path: impl AsRef<Path>) -> Result<Vec<UnstakedNft>> {
    load_list(path.as_ref(), "unstaked NFTs")
}

use std::collections::HashMap;

use dashmap::DashMap;
use log::debug;

use super::assets_errors::Result;
use super::assets_model::{AssetSnapshot, NewAssetSnapshot};

/// Concurrent in-memory registry of resolved assets, keyed by ticker.
///
/// Populated by the asset service on successful lookups and read by
/// everything else. Entries are replaced wholesale on re-registration;
/// individual snapshots are never mutated. The projection engine never
/// touches the live map - it consumes the plain-map [`snapshot`](Self::snapshot).
#[derive(Debug, Default)]
pub struct AssetRegistry {
    assets: DashMap<String, AssetSnapshot>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and stores a snapshot, returning the registered entry.
    pub fn register(&self, new_snapshot: NewAssetSnapshot) -> Result<AssetSnapshot> {
        new_snapshot.validate()?;
        let snapshot = new_snapshot.into_snapshot();
        debug!(
            "Registering asset {} at price {}",
            snapshot.ticker, snapshot.current_price
        );
        self.assets
            .insert(snapshot.ticker.clone(), snapshot.clone());
        Ok(snapshot)
    }

    pub fn get(&self, ticker: &str) -> Option<AssetSnapshot> {
        self.assets.get(ticker).map(|entry| entry.value().clone())
    }

    pub fn contains(&self, ticker: &str) -> bool {
        self.assets.contains_key(ticker)
    }

    pub fn list(&self) -> Vec<AssetSnapshot> {
        self.assets.iter().map(|entry| entry.value().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Point-in-time copy of the registry for the engine and the store.
    pub fn snapshot(&self) -> HashMap<String, AssetSnapshot> {
        self.assets
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    /// Restores registry contents from a saved snapshot, replacing the
    /// current entries.
    pub fn restore(&self, assets: HashMap<String, AssetSnapshot>) {
        self.assets.clear();
        for (ticker, snapshot) in assets {
            self.assets.insert(ticker, snapshot);
        }
    }
}

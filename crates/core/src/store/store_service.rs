use std::sync::{Arc, RwLock};

use log::debug;

use super::store_errors::{Result, StoreError};
use super::store_model::SimulationSnapshot;
use super::store_traits::SnapshotBackend;

/// Save/load collaborator over an opaque blob backend.
///
/// Saving serializes the complete session state; loading restores it
/// verbatim. A missing blob loads as `None`; a blob that no longer parses
/// is a `Corrupt` error rather than a silent no-op.
pub struct SnapshotStore {
    backend: Arc<dyn SnapshotBackend>,
}

impl SnapshotStore {
    pub fn new(backend: Arc<dyn SnapshotBackend>) -> Self {
        Self { backend }
    }

    pub fn save(&self, snapshot: &SimulationSnapshot) -> Result<()> {
        let blob = serde_json::to_string(snapshot)
            .map_err(|e| StoreError::Corrupt(format!("failed to encode snapshot: {}", e)))?;
        debug!("Saving simulation snapshot ({} bytes)", blob.len());
        self.backend.write(&blob)
    }

    pub fn load(&self) -> Result<Option<SimulationSnapshot>> {
        let blob = match self.backend.read()? {
            Some(blob) => blob,
            None => return Ok(None),
        };
        let snapshot = serde_json::from_str(&blob)
            .map_err(|e| StoreError::Corrupt(format!("failed to decode snapshot: {}", e)))?;
        Ok(Some(snapshot))
    }
}

/// In-memory backend for tests and embedding without host storage.
#[derive(Default)]
pub struct MemoryBackend {
    blob: RwLock<Option<String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotBackend for MemoryBackend {
    fn write(&self, blob: &str) -> Result<()> {
        *self.blob.write().unwrap() = Some(blob.to_string());
        Ok(())
    }

    fn read(&self) -> Result<Option<String>> {
        Ok(self.blob.read().unwrap().clone())
    }
}

use super::store_errors::Result;

/// Trait defining the contract for blob storage backends.
///
/// The blob is opaque to the backend: browser localStorage, a file, a
/// keychain entry, or plain memory in tests.
pub trait SnapshotBackend: Send + Sync {
    fn write(&self, blob: &str) -> Result<()>;
    fn read(&self) -> Result<Option<String>>;
}

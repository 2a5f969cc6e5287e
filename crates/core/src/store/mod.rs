pub(crate) mod store_errors;
pub(crate) mod store_model;
pub(crate) mod store_service;
pub(crate) mod store_traits;

// Re-export the public interface
pub use store_model::SimulationSnapshot;
pub use store_service::{MemoryBackend, SnapshotStore};
pub use store_traits::SnapshotBackend;

// Re-export error types for convenience
pub use store_errors::StoreError;

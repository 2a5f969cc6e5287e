use thiserror::Error;

/// Custom error type for snapshot save/load operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Backend error: {0}")]
    Backend(String),
    #[error("Corrupt snapshot: {0}")]
    Corrupt(String),
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

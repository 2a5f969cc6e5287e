use thiserror::Error;

/// Custom error type for reporting/export operations
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for reporting operations
pub type Result<T> = std::result::Result<T, ReportError>;

use thiserror::Error;

/// Custom error type for projection runs.
///
/// Every variant is raised pre-flight, before the first simulated month:
/// a run either starts with fully resolved inputs or not at all, so no
/// partial series can ever escape.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimulationError {
    #[error("Invalid simulation parameters: {0}")]
    InvalidParameters(String),

    #[error("No growth rate configured for portfolio {0}")]
    MissingGrowthRate(String),

    #[error("Unresolved ticker {ticker} in portfolio {portfolio_id}")]
    UnresolvedTicker { portfolio_id: String, ticker: String },
}

/// Result type for simulation operations
pub type Result<T> = std::result::Result<T, SimulationError>;

//! Core error types for the Carteira application.
//!
//! This module defines the root error type aggregating the per-module
//! errors. Module errors stay local to their domain; the root type exists
//! so service boundaries can return one `Result<T>` alias.

use thiserror::Error;

use crate::assets::AssetError;
use crate::portfolios::PortfolioError;
use crate::reporting::ReportError;
use crate::simulation::SimulationError;
use crate::store::StoreError;
use carteira_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the portfolio application.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Asset operation failed: {0}")]
    Asset(#[from] AssetError),

    #[error("Portfolio operation failed: {0}")]
    Portfolio(#[from] PortfolioError),

    #[error("Simulation failed: {0}")]
    Simulation(#[from] SimulationError),

    #[error("Report generation failed: {0}")]
    Report(#[from] ReportError),

    #[error("Snapshot store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

// Add From implementation for serde_json::Error
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

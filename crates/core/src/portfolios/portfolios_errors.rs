use thiserror::Error;

use crate::assets::AssetError;

/// Custom error type for portfolio-related operations
#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("Portfolio not found: {0}")]
    NotFound(String),
    #[error("Position not found: {ticker} in portfolio {portfolio_id}")]
    PositionNotFound { portfolio_id: String, ticker: String },
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),
}

/// Result type for portfolio operations
pub type Result<T> = std::result::Result<T, PortfolioError>;

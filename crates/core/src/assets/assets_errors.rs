use thiserror::Error;

use carteira_market_data::MarketDataError;

/// Custom error type for asset-related operations
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Invalid ticker format: {0}")]
    InvalidTickerFormat(String),
    #[error("Market data error: {0}")]
    MarketData(String),
}

impl From<MarketDataError> for AssetError {
    fn from(err: MarketDataError) -> Self {
        match err {
            MarketDataError::SymbolNotFound(symbol) => AssetError::NotFound(symbol),
            other => AssetError::MarketData(other.to_string()),
        }
    }
}

/// Result type for asset operations
pub type Result<T> = std::result::Result<T, AssetError>;

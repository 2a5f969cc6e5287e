//! Error types and retry classification for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: The main error enum for all market data operations
//! - [`RetryClass`]: Classification for determining retry behavior

mod retry;

pub use retry::RetryClass;

use thiserror::Error;

/// Errors that can occur during market data operations.
///
/// Each variant is classified into a [`RetryClass`] via the [`retry_class`](Self::retry_class)
/// method, which determines how the caller should handle the error.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested symbol was not found by the provider (HTTP 404).
    /// This is a terminal error - retrying won't help.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The API credentials were rejected (HTTP 401).
    /// Terminal until the caller supplies a valid token.
    #[error("Unauthorized: {provider}")]
    Unauthorized {
        /// The provider that rejected the credentials
        provider: String,
    },

    /// The provider rate limited the request (HTTP 429).
    /// Should retry with exponential backoff.
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The request to the provider timed out.
    /// Should retry with exponential backoff.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A provider-specific error occurred (unexpected status, malformed body).
    /// Another source might still succeed.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider answered but the payload failed validation
    /// (e.g. a non-positive price). Terminal for this symbol.
    #[error("Invalid data: {message}")]
    InvalidData {
        /// Description of the validation failure
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Returns the retry classification for this error.
    ///
    /// This classification determines how the caller should handle the error:
    ///
    /// - [`RetryClass::Never`]: Don't retry, the error is terminal
    /// - [`RetryClass::WithBackoff`]: Retry with exponential backoff
    /// - [`RetryClass::NextProvider`]: Try another source
    ///
    /// # Examples
    ///
    /// ```
    /// use carteira_market_data::errors::{MarketDataError, RetryClass};
    ///
    /// let error = MarketDataError::RateLimited { provider: "BRAPI".to_string() };
    /// assert_eq!(error.retry_class(), RetryClass::WithBackoff);
    ///
    /// let error = MarketDataError::SymbolNotFound("XXXX0".to_string());
    /// assert_eq!(error.retry_class(), RetryClass::Never);
    /// ```
    pub fn retry_class(&self) -> RetryClass {
        match self {
            // Terminal errors - never retry
            Self::SymbolNotFound(_) | Self::Unauthorized { .. } | Self::InvalidData { .. } => {
                RetryClass::Never
            }

            // Transient errors - retry with backoff
            Self::RateLimited { .. } | Self::Timeout { .. } => RetryClass::WithBackoff,

            // Provider-specific failures - try another source
            Self::ProviderError { .. } => RetryClass::NextProvider,

            // Network failures are terminal for this request
            Self::Network(_) => RetryClass::Never,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_not_found_never_retries() {
        let error = MarketDataError::SymbolNotFound("XXXX0".to_string());
        assert_eq!(error.retry_class(), RetryClass::Never);
    }

    #[test]
    fn test_unauthorized_never_retries() {
        let error = MarketDataError::Unauthorized {
            provider: "BRAPI".to_string(),
        };
        assert_eq!(error.retry_class(), RetryClass::Never);
    }

    #[test]
    fn test_invalid_data_never_retries() {
        let error = MarketDataError::InvalidData {
            message: "non-positive price".to_string(),
        };
        assert_eq!(error.retry_class(), RetryClass::Never);
    }

    #[test]
    fn test_rate_limited_retries_with_backoff() {
        let error = MarketDataError::RateLimited {
            provider: "BRAPI".to_string(),
        };
        assert_eq!(error.retry_class(), RetryClass::WithBackoff);
    }

    #[test]
    fn test_timeout_retries_with_backoff() {
        let error = MarketDataError::Timeout {
            provider: "BRAPI".to_string(),
        };
        assert_eq!(error.retry_class(), RetryClass::WithBackoff);
    }

    #[test]
    fn test_provider_error_tries_next_provider() {
        let error = MarketDataError::ProviderError {
            provider: "BRAPI".to_string(),
            message: "Internal server error".to_string(),
        };
        assert_eq!(error.retry_class(), RetryClass::NextProvider);
    }

    #[test]
    fn test_error_display() {
        let error = MarketDataError::SymbolNotFound("XXXX0".to_string());
        assert_eq!(format!("{}", error), "Symbol not found: XXXX0");

        let error = MarketDataError::RateLimited {
            provider: "BRAPI".to_string(),
        };
        assert_eq!(format!("{}", error), "Rate limited: BRAPI");

        let error = MarketDataError::ProviderError {
            provider: "BRAPI".to_string(),
            message: "API key invalid".to_string(),
        };
        assert_eq!(format!("{}", error), "Provider error: BRAPI - API key invalid");
    }
}

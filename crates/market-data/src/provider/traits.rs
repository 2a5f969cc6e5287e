//! Market data provider trait definitions.
//!
//! This module defines the core `MarketDataProvider` trait that all
//! market data providers must implement.

use async_trait::async_trait;
use futures::future::join_all;

use crate::errors::MarketDataError;
use crate::models::{ApiStatus, QuoteProfile};

/// Trait for market data providers.
///
/// A provider resolves a ticker symbol into a [`QuoteProfile`] snapshot.
/// The contract is plain request/response: callers hand in a symbol and
/// receive either a resolved profile or a typed [`MarketDataError`].
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use carteira_market_data::provider::MarketDataProvider;
///
/// struct MyProvider {
///     api_key: String,
/// }
///
/// #[async_trait]
/// impl MarketDataProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     // ... implement lookup
/// }
/// ```
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "BRAPI".
    /// Used for logging and error attribution.
    fn id(&self) -> &'static str;

    /// Resolve a single symbol into a quote profile.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The ticker symbol, already normalized (trimmed, uppercase)
    ///
    /// # Returns
    ///
    /// The resolved profile, or a `MarketDataError` classifying the failure.
    async fn lookup(&self, symbol: &str) -> Result<QuoteProfile, MarketDataError>;

    /// Resolve several symbols concurrently.
    ///
    /// The default implementation fans out individual [`lookup`](Self::lookup)
    /// calls; providers with a batch endpoint should override it. Failed
    /// symbols are reported alongside the successes rather than failing the
    /// whole batch.
    async fn lookup_many(
        &self,
        symbols: &[String],
    ) -> Result<(Vec<QuoteProfile>, Vec<(String, String)>), MarketDataError> {
        let futures: Vec<_> = symbols
            .iter()
            .map(|symbol| async move {
                match self.lookup(symbol).await {
                    Ok(profile) => Ok(profile),
                    Err(e) => Err((symbol.clone(), e.to_string())),
                }
            })
            .collect();

        let mut profiles = Vec::new();
        let mut failures = Vec::new();
        for result in join_all(futures).await {
            match result {
                Ok(profile) => profiles.push(profile),
                Err(failure) => failures.push(failure),
            }
        }
        Ok((profiles, failures))
    }

    /// Report provider availability and remaining request quota.
    async fn api_status(&self) -> ApiStatus;
}

//! Provider implementations and the shared provider trait.

pub mod brapi;
pub mod traits;

pub use brapi::BrapiProvider;
pub use traits::MarketDataProvider;

use std::time::Duration;

use tracing::debug;

use crate::errors::{MarketDataError, RetryClass};
use crate::models::QuoteProfile;

/// Initial delay before the first retry; doubles on each attempt.
const INITIAL_BACKOFF: Duration = Duration::from_millis(500);

/// Resolve a symbol, retrying transient failures with exponential backoff.
///
/// Only errors classified [`RetryClass::WithBackoff`] (rate limits,
/// timeouts) are retried; everything else propagates immediately. At most
/// `max_attempts` requests are made.
pub async fn lookup_with_retry(
    provider: &dyn MarketDataProvider,
    symbol: &str,
    max_attempts: u32,
) -> Result<QuoteProfile, MarketDataError> {
    let mut delay = INITIAL_BACKOFF;
    let mut attempt = 1;
    loop {
        match provider.lookup(symbol).await {
            Ok(profile) => return Ok(profile),
            Err(e) if e.retry_class() == RetryClass::WithBackoff && attempt < max_attempts => {
                debug!(
                    provider = provider.id(),
                    symbol,
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    "transient lookup failure, backing off"
                );
                tokio::time::sleep(delay).await;
                delay *= 2;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

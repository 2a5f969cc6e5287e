//! Brapi market data provider implementation.
//!
//! Resolves B3-listed symbols through the Brapi quote API
//! (<https://brapi.dev>). The free tier works without a token; an optional
//! API token is passed as a query parameter and raises the request quota.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::errors::MarketDataError;
use crate::models::{ApiStatus, QuoteProfile};
use crate::provider::traits::MarketDataProvider;

const DEFAULT_BASE_URL: &str = "https://brapi.dev/api";
const PROVIDER_ID: &str = "BRAPI";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Brapi market data provider.
///
/// Quotes carry a point-in-time price and an annualized dividend yield;
/// Brapi reports the yield as a percentage, which is converted to a decimal
/// fraction here so downstream consumers never see percent figures.
pub struct BrapiProvider {
    client: Client,
    base_url: String,
    token: Option<String>,
}

// ============================================================================
// Response structures for the Brapi quote API
// ============================================================================

#[derive(Debug, Deserialize)]
struct QuoteResponse {
    results: Option<Vec<QuoteResult>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteResult {
    symbol: String,
    long_name: Option<String>,
    short_name: Option<String>,
    regular_market_price: Option<f64>,
    /// Reported as a percentage (8.5 for 8.5%)
    dividend_yield: Option<f64>,
    currency: Option<String>,
    market_cap: Option<f64>,
    logourl: Option<String>,
}

impl BrapiProvider {
    pub fn new(token: Option<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, token)
    }

    /// Build a provider against a non-default endpoint (used by tests).
    pub fn with_base_url(base_url: impl Into<String>, token: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: base_url.into(),
            token,
        }
    }

    fn quote_url(&self, joined_symbols: &str) -> String {
        let mut url = format!(
            "{}/quote/{}",
            self.base_url,
            urlencoding::encode(joined_symbols)
        );
        if let Some(token) = &self.token {
            url.push_str(&format!("?token={}", urlencoding::encode(token)));
        }
        url
    }

    async fn fetch_quotes(&self, joined_symbols: &str) -> Result<Vec<QuoteResult>, MarketDataError> {
        let url = self.quote_url(joined_symbols);
        debug!(symbols = joined_symbols, "fetching quotes from brapi");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| self.classify_transport_error(e))?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::UNAUTHORIZED => {
                return Err(MarketDataError::Unauthorized {
                    provider: PROVIDER_ID.to_string(),
                })
            }
            StatusCode::NOT_FOUND => {
                return Err(MarketDataError::SymbolNotFound(joined_symbols.to_string()))
            }
            StatusCode::TOO_MANY_REQUESTS => {
                return Err(MarketDataError::RateLimited {
                    provider: PROVIDER_ID.to_string(),
                })
            }
            status => {
                return Err(MarketDataError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message: format!("unexpected status {}", status),
                })
            }
        }

        let body: QuoteResponse = response.json().await.map_err(|e| {
            MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("malformed response body: {}", e),
            }
        })?;

        match body.results {
            Some(results) if !results.is_empty() => Ok(results),
            _ => Err(MarketDataError::SymbolNotFound(joined_symbols.to_string())),
        }
    }

    fn classify_transport_error(&self, error: reqwest::Error) -> MarketDataError {
        if error.is_timeout() {
            MarketDataError::Timeout {
                provider: PROVIDER_ID.to_string(),
            }
        } else {
            MarketDataError::Network(error)
        }
    }
}

/// Maps a raw Brapi result onto the internal profile model.
///
/// Rejects non-positive prices; converts the percent yield to a decimal
/// fraction, clamping negatives with `abs`.
fn map_quote_result(result: QuoteResult) -> Result<QuoteProfile, MarketDataError> {
    let price = result
        .regular_market_price
        .and_then(Decimal::from_f64_retain)
        .filter(|p| p > &Decimal::ZERO)
        .ok_or_else(|| MarketDataError::InvalidData {
            message: format!("non-positive or missing price for {}", result.symbol),
        })?;

    let annual_dividend_yield = result
        .dividend_yield
        .and_then(Decimal::from_f64_retain)
        .map(|dy| dy.abs() / Decimal::ONE_HUNDRED)
        .unwrap_or(Decimal::ZERO);

    let name = result
        .long_name
        .or(result.short_name)
        .unwrap_or_else(|| result.symbol.clone());

    Ok(QuoteProfile {
        symbol: result.symbol,
        name,
        price,
        annual_dividend_yield,
        currency: result.currency.unwrap_or_else(|| "BRL".to_string()),
        market_cap: result.market_cap.and_then(Decimal::from_f64_retain),
        logo_url: result.logourl,
    })
}

#[async_trait]
impl MarketDataProvider for BrapiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn lookup(&self, symbol: &str) -> Result<QuoteProfile, MarketDataError> {
        let results = self.fetch_quotes(symbol).await?;
        let result = results
            .into_iter()
            .next()
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))?;
        map_quote_result(result)
    }

    /// Brapi accepts comma-joined tickers in a single quote request.
    async fn lookup_many(
        &self,
        symbols: &[String],
    ) -> Result<(Vec<QuoteProfile>, Vec<(String, String)>), MarketDataError> {
        if symbols.is_empty() {
            return Ok((Vec::new(), Vec::new()));
        }

        let joined = symbols.join(",");
        let results = self.fetch_quotes(&joined).await?;

        let mut profiles = Vec::new();
        let mut failures = Vec::new();
        for result in results {
            let symbol = result.symbol.clone();
            match map_quote_result(result) {
                Ok(profile) => profiles.push(profile),
                Err(e) => failures.push((symbol, e.to_string())),
            }
        }

        // Symbols the API silently dropped from the results array.
        for symbol in symbols {
            if !profiles.iter().any(|p| &p.symbol == symbol)
                && !failures.iter().any(|(s, _)| s == symbol)
            {
                failures.push((symbol.clone(), "not present in response".to_string()));
            }
        }

        if !failures.is_empty() {
            warn!(failed = failures.len(), "some symbols failed to resolve");
        }
        Ok((profiles, failures))
    }

    async fn api_status(&self) -> ApiStatus {
        let mut url = format!("{}/available", self.base_url);
        if let Some(token) = &self.token {
            url.push_str(&format!("?token={}", urlencoding::encode(token)));
        }

        let response = match self.client.get(&url).send().await {
            Ok(response) if response.status().is_success() => response,
            Ok(_) | Err(_) => return ApiStatus::error(),
        };

        let header_u64 = |name: &str| {
            response
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
        };
        ApiStatus::ok(header_u64("x-ratelimit-used"), header_u64("x-ratelimit-limit"))
    }
}

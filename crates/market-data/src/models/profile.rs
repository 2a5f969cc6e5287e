//! Quote profile models returned by market data lookups.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Snapshot of a listed asset as resolved by a market data provider.
///
/// Prices are point-in-time ("static snapshot") values; there is no
/// historical series behind this type. The dividend yield is always a
/// decimal fraction (0.085 for 8.5%), regardless of how the upstream API
/// reports it - providers are responsible for the conversion.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteProfile {
    /// Ticker symbol (e.g., "PETR4", "MXRF11")
    pub symbol: String,

    /// Display name (long name when available, falling back to the symbol)
    pub name: String,

    /// Last traded price, strictly positive
    pub price: Decimal,

    /// Annualized dividend yield as a decimal fraction, never negative
    pub annual_dividend_yield: Decimal,

    /// Quote currency (ISO 4217), e.g. "BRL"
    pub currency: String,

    /// Market capitalization, when the provider reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<Decimal>,

    /// Logo URL, when the provider reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

/// Provider availability and quota information.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiStatus {
    /// "ok" or "error"
    pub status: String,

    /// Requests consumed in the current quota window, when reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota_used: Option<u64>,

    /// Request quota for the current window, when reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota_limit: Option<u64>,
}

impl ApiStatus {
    /// Status value used when the provider could not be reached.
    pub fn error() -> Self {
        Self {
            status: "error".to_string(),
            quota_used: None,
            quota_limit: None,
        }
    }

    pub fn ok(quota_used: Option<u64>, quota_limit: Option<u64>) -> Self {
        Self {
            status: "ok".to_string(),
            quota_used,
            quota_limit,
        }
    }
}

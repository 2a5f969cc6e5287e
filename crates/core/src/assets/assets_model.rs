use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use carteira_market_data::QuoteProfile;

use super::assets_errors::AssetError;
use super::assets_errors::Result;

/// Domain model representing a resolved asset in the registry.
///
/// Immutable once registered: the price and yield are a static snapshot
/// taken at lookup time, not a live feed. The projection engine reads
/// `current_price` and `annual_dividend_yield`; the remaining fields are
/// carried for display and export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetSnapshot {
    pub ticker: String,
    pub name: String,
    /// Last traded price, strictly positive
    pub current_price: Decimal,
    /// Annualized dividend yield as a decimal fraction (0.085 for 8.5%),
    /// may be zero, never negative
    pub annual_dividend_yield: Decimal,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    pub fetched_at: DateTime<Utc>,
}

/// Input model for registering a new asset snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAssetSnapshot {
    pub ticker: String,
    pub name: String,
    pub current_price: Decimal,
    pub annual_dividend_yield: Decimal,
    pub currency: String,
    pub market_cap: Option<Decimal>,
    pub logo_url: Option<String>,
}

impl NewAssetSnapshot {
    /// Validates the new snapshot data
    pub fn validate(&self) -> Result<()> {
        if self.ticker.trim().is_empty() {
            return Err(AssetError::InvalidData(
                "Asset ticker cannot be empty".to_string(),
            ));
        }
        if self.current_price <= Decimal::ZERO {
            return Err(AssetError::InvalidData(format!(
                "Price for '{}' must be positive",
                self.ticker
            )));
        }
        if self.annual_dividend_yield < Decimal::ZERO {
            return Err(AssetError::InvalidData(format!(
                "Dividend yield for '{}' cannot be negative",
                self.ticker
            )));
        }
        Ok(())
    }

    /// Stamps the snapshot with its registration time.
    pub(crate) fn into_snapshot(self) -> AssetSnapshot {
        AssetSnapshot {
            ticker: self.ticker,
            name: self.name,
            current_price: self.current_price,
            annual_dividend_yield: self.annual_dividend_yield,
            currency: self.currency,
            market_cap: self.market_cap,
            logo_url: self.logo_url,
            fetched_at: Utc::now(),
        }
    }
}

impl From<QuoteProfile> for NewAssetSnapshot {
    fn from(profile: QuoteProfile) -> Self {
        Self {
            ticker: profile.symbol,
            name: profile.name,
            current_price: profile.price,
            annual_dividend_yield: profile.annual_dividend_yield,
            currency: profile.currency,
            market_cap: profile.market_cap,
            logo_url: profile.logo_url,
        }
    }
}

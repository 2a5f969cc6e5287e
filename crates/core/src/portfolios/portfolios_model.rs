use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::portfolios_errors::{PortfolioError, Result};

/// A quantity of one ticker held inside one portfolio.
///
/// Quantities are non-negative and may be fractional (reinvestment buys
/// fractional units). `initial_value` records quantity x price at the time
/// the position was added; it is informational and never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub ticker: String,
    pub quantity: Decimal,
    pub initial_value: Decimal,
}

/// Named collection of positions.
///
/// `id` is an opaque, stable key assigned at creation and used to key every
/// per-portfolio mapping in the engine; no id is ever special-cased.
/// Invariant: at most one position per ticker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: String,
    pub name: String,
    /// Display only, carried for the UI and never read by the engine
    pub theme_color: String,
    pub positions: Vec<Position>,
}

impl Portfolio {
    pub fn position(&self, ticker: &str) -> Option<&Position> {
        self.positions.iter().find(|p| p.ticker == ticker)
    }
}

/// Input model for creating a new portfolio.
///
/// The growth-rate assumption is mandatory at creation: the simulation has
/// no default rate to fall back on, so a portfolio can only come into
/// existence with its rate configured.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPortfolio {
    pub name: String,
    pub theme_color: String,
    /// Annual growth assumption as a decimal fraction (0.12 for 12%)
    pub growth_rate_annual: Decimal,
}

impl NewPortfolio {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(PortfolioError::InvalidData(
                "Portfolio name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

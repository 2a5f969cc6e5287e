//! Private working state for a projection run.
//!
//! Built once per run as a deep copy of the input portfolios plus the
//! asset figures each position needs, so a run never aliases live
//! registry or portfolio-service state and repeated runs cannot observe
//! each other.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::assets::AssetSnapshot;
use crate::portfolios::Portfolio;

/// One position as the engine tracks it.
///
/// `market_value` evolves independently of `quantity` from initialization
/// onward: growth compounds the value directly, and quantity only moves at
/// reinvestment steps, where new fractional units are bought at the static
/// `unit_price`. The per-share price itself is never revalued.
#[derive(Debug, Clone)]
pub(crate) struct PositionState {
    pub ticker: String,
    pub quantity: Decimal,
    pub market_value: Decimal,
    /// Static snapshot price used for every reinvestment purchase
    pub unit_price: Decimal,
    /// Dividend yield per month (annual yield / 12)
    pub monthly_yield: Decimal,
}

/// One portfolio as the engine tracks it across months.
#[derive(Debug, Clone)]
pub(crate) struct PortfolioState {
    pub id: String,
    pub cash: Decimal,
    pub total_contributed: Decimal,
    pub total_dividends: Decimal,
    /// Growth rate per month (annual rate / 12)
    pub monthly_growth: Decimal,
    pub positions: Vec<PositionState>,
}

impl PortfolioState {
    /// Deep-copies a portfolio into working state.
    ///
    /// Callers must have validated referential integrity and rate
    /// configuration beforehand; positions whose ticker is missing here
    /// would have failed the run pre-flight.
    pub fn initialize(
        portfolio: &Portfolio,
        assets: &HashMap<String, AssetSnapshot>,
        annual_growth: Decimal,
        months_per_year: Decimal,
    ) -> Self {
        let positions: Vec<PositionState> = portfolio
            .positions
            .iter()
            .filter_map(|position| {
                assets.get(&position.ticker).map(|asset| PositionState {
                    ticker: position.ticker.clone(),
                    quantity: position.quantity,
                    market_value: position.quantity * asset.current_price,
                    unit_price: asset.current_price,
                    monthly_yield: asset.annual_dividend_yield / months_per_year,
                })
            })
            .collect();

        // Existing holdings count as capital already contributed.
        let initial_value: Decimal = positions.iter().map(|p| p.market_value).sum();

        PortfolioState {
            id: portfolio.id.clone(),
            cash: Decimal::ZERO,
            total_contributed: initial_value,
            total_dividends: Decimal::ZERO,
            monthly_growth: annual_growth / months_per_year,
            positions,
        }
    }

    /// Current total asset value across positions (cash excluded; cash is
    /// always redistributed within the same month it appears).
    pub fn total_value(&self) -> Decimal {
        self.positions.iter().map(|p| p.market_value).sum()
    }
}

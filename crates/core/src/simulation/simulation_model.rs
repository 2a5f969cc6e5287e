use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::MONTHS_PER_YEAR;

/// Parameters for a projection run.
///
/// The contribution is applied identically to every portfolio each month.
/// Growth assumptions are keyed by portfolio id; there is no default rate -
/// a portfolio missing from the map fails the run pre-flight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimulationParameters {
    /// Monthly contribution in currency units, non-negative
    pub monthly_contribution: Decimal,
    /// Horizon in years; zero yields the empty simulation
    pub horizon_years: u32,
    /// Annual growth assumption per portfolio id, as decimal fractions
    pub growth_rates: HashMap<String, Decimal>,
}

impl SimulationParameters {
    pub fn total_months(&self) -> u32 {
        self.horizon_years * MONTHS_PER_YEAR
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        SimulationParameters {
            monthly_contribution: dec!(1000),
            horizon_years: 10,
            growth_rates: HashMap::new(),
        }
    }
}

/// Partial update for [`SimulationParameters`]; `None` fields are left
/// untouched, growth rates merge by key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationParametersUpdate {
    pub monthly_contribution: Option<Decimal>,
    pub horizon_years: Option<u32>,
    pub growth_rates: Option<HashMap<String, Decimal>>,
}

/// State of every simulated portfolio at the close of one month.
///
/// The three maps are keyed by portfolio id and always carry the same key
/// set: exactly the ids that were simulated. `dividends_received` and
/// `total_contributed` are cumulative since month 1.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimulationDataPoint {
    /// 1-indexed month; aggregation repurposes it as the year number
    pub month: u32,
    pub value: HashMap<String, Decimal>,
    pub dividends_received: HashMap<String, Decimal>,
    pub total_contributed: HashMap<String, Decimal>,
}

impl SimulationDataPoint {
    /// Empty point used as an accumulator by the aggregation layer.
    pub fn empty(month: u32) -> Self {
        SimulationDataPoint {
            month,
            value: HashMap::new(),
            dividends_received: HashMap::new(),
            total_contributed: HashMap::new(),
        }
    }
}

/// Closing figures for one portfolio after the final simulated month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub final_value: Decimal,
    pub total_contributed: Decimal,
    pub total_dividends: Decimal,
    /// `(final - contributed) / contributed * 100`; defined as 0 when
    /// nothing was ever contributed
    pub total_return_percent: Decimal,
}

/// Complete output of one projection run.
///
/// Derived entirely from the run that produced it and never mutated;
/// a new run supersedes it wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// One point per elapsed month, chronological, length = total months
    pub monthly_series: Vec<SimulationDataPoint>,
    pub final_summary: HashMap<String, PortfolioSummary>,
}

//! The projection engine.
//!
//! `simulate` maps (portfolios, asset snapshots, parameters) onto a
//! month-by-month series plus a final summary. It is pure and
//! deterministic: no I/O, no randomness, no state outside the working
//! copies it builds for itself. Identical inputs produce identical output.

use std::collections::HashMap;

use log::debug;
use num_traits::Zero;
use rust_decimal::Decimal;

use crate::assets::AssetSnapshot;
use crate::constants::{MONTHS_PER_YEAR, PERCENT_FACTOR};
use crate::portfolios::Portfolio;

use super::simulation_errors::{Result, SimulationError};
use super::simulation_model::{
    PortfolioSummary, SimulationDataPoint, SimulationParameters, SimulationResult,
};
use super::simulation_state::PortfolioState;

/// Runs the fixed-horizon projection.
///
/// All inputs are validated before the first month is computed; any
/// failure aborts the run with no partial output. An empty portfolio set
/// or a zero horizon are valid degenerate inputs, not errors: the former
/// produces empty maps, the latter an empty series with the summary taken
/// from the initial state.
pub fn simulate(
    portfolios: &[Portfolio],
    assets: &HashMap<String, AssetSnapshot>,
    params: &SimulationParameters,
) -> Result<SimulationResult> {
    validate_inputs(portfolios, assets, params)?;

    if portfolios.is_empty() {
        return Ok(SimulationResult {
            monthly_series: Vec::new(),
            final_summary: HashMap::new(),
        });
    }

    let total_months = params.total_months();
    debug!(
        "Projecting {} portfolios over {} months",
        portfolios.len(),
        total_months
    );

    let months_per_year = Decimal::from(MONTHS_PER_YEAR);
    let mut states: Vec<PortfolioState> = portfolios
        .iter()
        .map(|portfolio| {
            // Presence is guaranteed by validate_inputs.
            let annual_growth = params
                .growth_rates
                .get(&portfolio.id)
                .copied()
                .unwrap_or_default();
            PortfolioState::initialize(portfolio, assets, annual_growth, months_per_year)
        })
        .collect();

    let mut monthly_series = Vec::with_capacity(total_months as usize);
    for month in 1..=total_months {
        for state in states.iter_mut() {
            advance_month(state, params.monthly_contribution);
        }
        monthly_series.push(record_data_point(month, &states));
    }

    let final_summary = states
        .iter()
        .map(|state| (state.id.clone(), summarize(state)))
        .collect();

    Ok(SimulationResult {
        monthly_series,
        final_summary,
    })
}

/// Pre-flight validation: configuration errors and unresolved references
/// are rejected before any computation starts, never mid-loop.
fn validate_inputs(
    portfolios: &[Portfolio],
    assets: &HashMap<String, AssetSnapshot>,
    params: &SimulationParameters,
) -> Result<()> {
    if params.monthly_contribution < Decimal::ZERO {
        return Err(SimulationError::InvalidParameters(format!(
            "monthly contribution cannot be negative, got {}",
            params.monthly_contribution
        )));
    }

    for portfolio in portfolios {
        if !params.growth_rates.contains_key(&portfolio.id) {
            return Err(SimulationError::MissingGrowthRate(portfolio.id.clone()));
        }
        for position in &portfolio.positions {
            if !assets.contains_key(&position.ticker) {
                return Err(SimulationError::UnresolvedTicker {
                    portfolio_id: portfolio.id.clone(),
                    ticker: position.ticker.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Applies one simulated month to one portfolio.
///
/// The step order is load-bearing: contribution, then dividend accrual,
/// then reinvestment, then growth. Reordering changes the numbers.
fn advance_month(state: &mut PortfolioState, monthly_contribution: Decimal) {
    // 1. Contribution lands in cash.
    state.cash += monthly_contribution;
    state.total_contributed += monthly_contribution;

    // 2. Dividends accrue on current market value, not cost basis, so they
    //    compound on unrealized growth.
    let dividends = accrue_dividends(state);
    state.cash += dividends;
    state.total_dividends += dividends;

    // 3. Cash (contribution + dividends) buys back into the positions.
    reinvest_cash(state);

    // 4. Growth compounds each position value at the monthly rate.
    apply_growth(state);
}

/// Sum of this month's dividends across positions.
pub(crate) fn accrue_dividends(state: &PortfolioState) -> Decimal {
    state
        .positions
        .iter()
        .map(|position| position.market_value * position.monthly_yield)
        .sum()
}

/// Redistributes accumulated cash across positions proportionally to their
/// current market value, buying fractional units at the static snapshot
/// price. When every position is worthless the split is equal, avoiding a
/// zero division. No-op for empty portfolios or non-positive cash.
pub(crate) fn reinvest_cash(state: &mut PortfolioState) {
    if state.positions.is_empty() || state.cash <= Decimal::ZERO {
        return;
    }

    let total_value = state.total_value();
    let equal_share = Decimal::ONE / Decimal::from(state.positions.len() as u64);
    let cash = state.cash;

    for position in state.positions.iter_mut() {
        let proportion = if total_value.is_zero() {
            equal_share
        } else {
            position.market_value / total_value
        };
        let invested = cash * proportion;

        position.market_value += invested;
        position.quantity += invested / position.unit_price;
    }

    state.cash = Decimal::ZERO;
}

/// `market_value *= 1 + annual_rate / 12` for every position.
pub(crate) fn apply_growth(state: &mut PortfolioState) {
    let factor = Decimal::ONE + state.monthly_growth;
    for position in state.positions.iter_mut() {
        position.market_value *= factor;
    }
}

fn record_data_point(month: u32, states: &[PortfolioState]) -> SimulationDataPoint {
    let mut point = SimulationDataPoint::empty(month);
    for state in states {
        point.value.insert(state.id.clone(), state.total_value());
        point
            .dividends_received
            .insert(state.id.clone(), state.total_dividends);
        point
            .total_contributed
            .insert(state.id.clone(), state.total_contributed);
    }
    point
}

fn summarize(state: &PortfolioState) -> PortfolioSummary {
    let final_value = state.total_value();
    // Nothing contributed means the return is defined as zero rather than
    // a division by zero.
    let total_return_percent = if state.total_contributed > Decimal::zero() {
        (final_value - state.total_contributed) / state.total_contributed
            * Decimal::from(PERCENT_FACTOR)
    } else {
        Decimal::zero()
    };

    PortfolioSummary {
        final_value,
        total_contributed: state.total_contributed,
        total_dividends: state.total_dividends,
        total_return_percent,
    }
}

use std::collections::HashMap;

use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::assets::AssetSnapshot;
use crate::portfolios::{Portfolio, Position};

use super::simulation_engine::{reinvest_cash, simulate};
use super::simulation_errors::SimulationError;
use super::simulation_model::SimulationParameters;
use super::simulation_state::{PortfolioState, PositionState};

// --- Helper Functions ---

fn asset(ticker: &str, price: Decimal, annual_yield: Decimal) -> AssetSnapshot {
    AssetSnapshot {
        ticker: ticker.to_string(),
        name: ticker.to_string(),
        current_price: price,
        annual_dividend_yield: annual_yield,
        currency: "BRL".to_string(),
        market_cap: None,
        logo_url: None,
        fetched_at: Utc::now(),
    }
}

fn asset_map(assets: Vec<AssetSnapshot>) -> HashMap<String, AssetSnapshot> {
    assets.into_iter().map(|a| (a.ticker.clone(), a)).collect()
}

fn portfolio(id: &str, holdings: &[(&str, Decimal)]) -> Portfolio {
    Portfolio {
        id: id.to_string(),
        name: format!("Carteira {}", id),
        theme_color: "#1976d2".to_string(),
        positions: holdings
            .iter()
            .map(|(ticker, quantity)| Position {
                ticker: ticker.to_string(),
                quantity: *quantity,
                initial_value: Decimal::ZERO,
            })
            .collect(),
    }
}

fn params(
    monthly_contribution: Decimal,
    horizon_years: u32,
    rates: &[(&str, Decimal)],
) -> SimulationParameters {
    SimulationParameters {
        monthly_contribution,
        horizon_years,
        growth_rates: rates
            .iter()
            .map(|(id, rate)| (id.to_string(), *rate))
            .collect(),
    }
}

fn assert_approx(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "expected {} within {} of {}, diff was {}",
        actual,
        tolerance,
        expected,
        diff
    );
}

// --- Engine Scenarios ---

#[test]
fn test_growth_only_scenario_compounds_monthly() {
    // One portfolio, 100 units at 10.00, 0% yield, no contributions,
    // 12%/year growth over one year.
    let assets = asset_map(vec![asset("PETR4", dec!(10), dec!(0))]);
    let portfolios = vec![portfolio("p1", &[("PETR4", dec!(100))])];
    let params = params(dec!(0), 1, &[("p1", dec!(0.12))]);

    let result = simulate(&portfolios, &assets, &params).unwrap();
    assert_eq!(result.monthly_series.len(), 12);

    // Month 1: no contribution, no dividends, growth factor 1.01.
    assert_eq!(result.monthly_series[0].value["p1"], dec!(1010));
    assert_eq!(result.monthly_series[0].dividends_received["p1"], dec!(0));
    assert_eq!(result.monthly_series[0].total_contributed["p1"], dec!(1000));

    // Month 12: 1000 * 1.01^12.
    assert_approx(result.monthly_series[11].value["p1"], dec!(1126.83), dec!(0.01));

    let summary = &result.final_summary["p1"];
    assert_approx(summary.final_value, dec!(1126.83), dec!(0.01));
    assert_eq!(summary.total_contributed, dec!(1000));
    assert_eq!(summary.total_dividends, dec!(0));
    assert_approx(summary.total_return_percent, dec!(12.68), dec!(0.01));
}

#[test]
fn test_contribution_lands_before_growth() {
    // Initial 1000 plus a 100 contribution, all reinvested, then grown by
    // 1%: (1000 + 100) * 1.01.
    let assets = asset_map(vec![asset("PETR4", dec!(10), dec!(0))]);
    let portfolios = vec![portfolio("p1", &[("PETR4", dec!(100))])];
    let params = params(dec!(100), 1, &[("p1", dec!(0.12))]);

    let result = simulate(&portfolios, &assets, &params).unwrap();
    assert_eq!(result.monthly_series[0].value["p1"], dec!(1111));
}

#[test]
fn test_dividends_accrue_on_current_value() {
    // 1%/month yield, zero growth, zero contribution: dividends are paid
    // on the reinvested balance, so month two pays on 1010, not 1000.
    let assets = asset_map(vec![asset("MXRF11", dec!(10), dec!(0.12))]);
    let portfolios = vec![portfolio("p1", &[("MXRF11", dec!(100))])];
    let params = params(dec!(0), 1, &[("p1", dec!(0))]);

    let result = simulate(&portfolios, &assets, &params).unwrap();
    assert_eq!(result.monthly_series[0].value["p1"], dec!(1010));
    assert_eq!(result.monthly_series[0].dividends_received["p1"], dec!(10));
    assert_eq!(result.monthly_series[1].value["p1"], dec!(1020.10));
    assert_eq!(result.monthly_series[1].dividends_received["p1"], dec!(20.10));
}

#[test]
fn test_reinvestment_split_follows_position_weights() {
    // Positions worth 100 and 300 (25%/75%) with a combined monthly
    // dividend of 20 must receive 5 and 15 before growth applies.
    let mut state = PortfolioState {
        id: "p1".to_string(),
        cash: dec!(20),
        total_contributed: dec!(400),
        total_dividends: dec!(20),
        monthly_growth: dec!(0),
        positions: vec![
            PositionState {
                ticker: "AAAA4".to_string(),
                quantity: dec!(10),
                market_value: dec!(100),
                unit_price: dec!(10),
                monthly_yield: dec!(0.05),
            },
            PositionState {
                ticker: "BBBB4".to_string(),
                quantity: dec!(30),
                market_value: dec!(300),
                unit_price: dec!(10),
                monthly_yield: dec!(0.05),
            },
        ],
    };

    reinvest_cash(&mut state);

    assert_eq!(state.cash, dec!(0));
    assert_eq!(state.positions[0].market_value, dec!(105));
    assert_eq!(state.positions[1].market_value, dec!(315));
    // Fractional units bought at the static snapshot price.
    assert_eq!(state.positions[0].quantity, dec!(10.5));
    assert_eq!(state.positions[1].quantity, dec!(31.5));
}

#[test]
fn test_reinvestment_engine_level_totals() {
    // Same 25/75 shape end to end: 5%/month yield pays 20 on 400, all of
    // it reinvested, zero growth.
    let assets = asset_map(vec![asset("AAAA4", dec!(10), dec!(0.6))]);
    let portfolios = vec![portfolio("p1", &[("AAAA4", dec!(40))])];
    let params = params(dec!(0), 1, &[("p1", dec!(0))]);

    let result = simulate(&portfolios, &assets, &params).unwrap();
    assert_eq!(result.monthly_series[0].value["p1"], dec!(420));
    assert_eq!(result.monthly_series[0].dividends_received["p1"], dec!(20));
}

#[test]
fn test_zero_value_positions_split_cash_equally() {
    let mut state = PortfolioState {
        id: "p1".to_string(),
        cash: dec!(120),
        total_contributed: dec!(120),
        total_dividends: dec!(0),
        monthly_growth: dec!(0),
        positions: vec![
            PositionState {
                ticker: "AAAA4".to_string(),
                quantity: dec!(0),
                market_value: dec!(0),
                unit_price: dec!(10),
                monthly_yield: dec!(0),
            },
            PositionState {
                ticker: "BBBB4".to_string(),
                quantity: dec!(0),
                market_value: dec!(0),
                unit_price: dec!(20),
                monthly_yield: dec!(0),
            },
        ],
    };

    reinvest_cash(&mut state);

    assert_eq!(state.positions[0].market_value, dec!(60));
    assert_eq!(state.positions[1].market_value, dec!(60));
    assert_eq!(state.positions[0].quantity, dec!(6));
    assert_eq!(state.positions[1].quantity, dec!(3));
}

#[test]
fn test_zero_growth_zero_yield_is_purely_additive() {
    let assets = asset_map(vec![asset("PETR4", dec!(10), dec!(0))]);
    let portfolios = vec![portfolio("p1", &[("PETR4", dec!(100))])];
    let params = params(dec!(500), 2, &[("p1", dec!(0))]);

    let result = simulate(&portfolios, &assets, &params).unwrap();
    for (index, point) in result.monthly_series.iter().enumerate() {
        let month = Decimal::from(index as u32 + 1);
        assert_eq!(point.value["p1"], dec!(1000) + dec!(500) * month);
        assert_eq!(point.total_contributed["p1"], dec!(1000) + dec!(500) * month);
        assert_eq!(point.dividends_received["p1"], dec!(0));
    }
}

#[test]
fn test_zero_horizon_summarizes_initial_state() {
    let assets = asset_map(vec![asset("PETR4", dec!(10), dec!(0.08))]);
    let portfolios = vec![portfolio("p1", &[("PETR4", dec!(100))])];
    let params = params(dec!(1000), 0, &[("p1", dec!(0.12))]);

    let result = simulate(&portfolios, &assets, &params).unwrap();
    assert!(result.monthly_series.is_empty());

    let summary = &result.final_summary["p1"];
    assert_eq!(summary.final_value, dec!(1000));
    assert_eq!(summary.total_contributed, dec!(1000));
    assert_eq!(summary.total_dividends, dec!(0));
    assert_eq!(summary.total_return_percent, dec!(0));
}

#[test]
fn test_no_portfolios_produces_empty_series() {
    let result = simulate(&[], &HashMap::new(), &params(dec!(1000), 10, &[])).unwrap();
    assert!(result.monthly_series.is_empty());
    assert!(result.final_summary.is_empty());
}

#[test]
fn test_missing_growth_rate_fails_preflight() {
    let assets = asset_map(vec![asset("PETR4", dec!(10), dec!(0))]);
    let portfolios = vec![portfolio("p1", &[("PETR4", dec!(100))])];

    let err = simulate(&portfolios, &assets, &params(dec!(0), 1, &[])).unwrap_err();
    assert_eq!(err, SimulationError::MissingGrowthRate("p1".to_string()));
}

#[test]
fn test_unresolved_ticker_fails_preflight() {
    let portfolios = vec![portfolio("p1", &[("GHOST4", dec!(100))])];

    let err = simulate(
        &portfolios,
        &HashMap::new(),
        &params(dec!(0), 1, &[("p1", dec!(0.12))]),
    )
    .unwrap_err();
    assert_eq!(
        err,
        SimulationError::UnresolvedTicker {
            portfolio_id: "p1".to_string(),
            ticker: "GHOST4".to_string(),
        }
    );
}

#[test]
fn test_negative_contribution_fails_preflight() {
    let err = simulate(&[], &HashMap::new(), &params(dec!(-1), 1, &[])).unwrap_err();
    assert!(matches!(err, SimulationError::InvalidParameters(_)));
}

#[test]
fn test_zero_contributed_return_is_defined_zero() {
    // Empty portfolio, zero contribution: nothing divides by zero.
    let portfolios = vec![portfolio("p1", &[])];
    let params = params(dec!(0), 1, &[("p1", dec!(0.12))]);

    let result = simulate(&portfolios, &HashMap::new(), &params).unwrap();
    let summary = &result.final_summary["p1"];
    assert_eq!(summary.final_value, dec!(0));
    assert_eq!(summary.total_contributed, dec!(0));
    assert_eq!(summary.total_return_percent, dec!(0));
}

#[test]
fn test_every_point_carries_all_portfolio_ids() {
    let assets = asset_map(vec![
        asset("PETR4", dec!(10), dec!(0.08)),
        asset("ITUB4", dec!(25), dec!(0.05)),
    ]);
    let portfolios = vec![
        portfolio("p1", &[("PETR4", dec!(100))]),
        portfolio("p2", &[("ITUB4", dec!(40))]),
    ];
    let params = params(dec!(1000), 1, &[("p1", dec!(0.06)), ("p2", dec!(0.12))]);

    let result = simulate(&portfolios, &assets, &params).unwrap();
    for point in &result.monthly_series {
        for id in ["p1", "p2"] {
            assert!(point.value.contains_key(id));
            assert!(point.dividends_received.contains_key(id));
            assert!(point.total_contributed.contains_key(id));
        }
        assert_eq!(point.value.len(), 2);
        assert_eq!(point.dividends_received.len(), 2);
        assert_eq!(point.total_contributed.len(), 2);
    }
}

#[test]
fn test_identical_inputs_produce_identical_output() {
    let assets = asset_map(vec![
        asset("PETR4", dec!(38.52), dec!(0.085)),
        asset("ITUB4", dec!(27.10), dec!(0.052)),
    ]);
    let portfolios = vec![
        portfolio("p1", &[("PETR4", dec!(100)), ("ITUB4", dec!(50))]),
        portfolio("p2", &[("ITUB4", dec!(200))]),
    ];
    let params = params(dec!(1500), 5, &[("p1", dec!(0.06)), ("p2", dec!(0.12))]);

    let first = simulate(&portfolios, &assets, &params).unwrap();
    let second = simulate(&portfolios, &assets, &params).unwrap();
    assert_eq!(first, second);
}

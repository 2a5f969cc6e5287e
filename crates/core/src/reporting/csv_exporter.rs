//! CSV export of simulation output.
//!
//! Flattens the monthly series into one row per month with one column
//! group (value, cumulative dividends, cumulative contributions) per
//! portfolio, plus a separate per-portfolio summary document. Portfolio
//! column order follows the order of the `portfolios` argument.

use rust_decimal::Decimal;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::portfolios::Portfolio;
use crate::simulation::SimulationResult;

use super::reporting_errors::{ReportError, Result};

/// Renders the monthly series as a CSV document.
pub fn export_monthly_series(result: &SimulationResult, portfolios: &[Portfolio]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec!["month".to_string()];
    for portfolio in portfolios {
        header.push(format!("{} value", portfolio.name));
        header.push(format!("{} dividends", portfolio.name));
        header.push(format!("{} contributed", portfolio.name));
    }
    writer.write_record(&header)?;

    for point in &result.monthly_series {
        let mut row = vec![point.month.to_string()];
        for portfolio in portfolios {
            row.push(display_amount(point.value.get(&portfolio.id)));
            row.push(display_amount(point.dividends_received.get(&portfolio.id)));
            row.push(display_amount(point.total_contributed.get(&portfolio.id)));
        }
        writer.write_record(&row)?;
    }

    into_document(writer)
}

/// Renders the final summary as a CSV document, one row per portfolio.
pub fn export_summary(result: &SimulationResult, portfolios: &[Portfolio]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record([
        "portfolio",
        "final value",
        "total contributed",
        "total dividends",
        "total return %",
    ])?;

    for portfolio in portfolios {
        if let Some(summary) = result.final_summary.get(&portfolio.id) {
            writer.write_record([
                portfolio.name.clone(),
                display_amount(Some(&summary.final_value)),
                display_amount(Some(&summary.total_contributed)),
                display_amount(Some(&summary.total_dividends)),
                display_amount(Some(&summary.total_return_percent)),
            ])?;
        }
    }

    into_document(writer)
}

fn display_amount(amount: Option<&Decimal>) -> String {
    let mut rounded = amount
        .copied()
        .unwrap_or_default()
        .round_dp(DISPLAY_DECIMAL_PRECISION);
    rounded.rescale(DISPLAY_DECIMAL_PRECISION);
    rounded.to_string()
}

fn into_document(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| ReportError::InvalidData(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ReportError::InvalidData(e.to_string()))
}

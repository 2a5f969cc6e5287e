//! Period grouping over the engine's monthly series.
//!
//! The summation semantics are compatibility-critical: annual and total
//! figures SUM the monthly entries of every field, including the
//! already-cumulative dividend and contribution series. The result is an
//! aggregate-of-cumulatives, not an end-of-period snapshot; downstream
//! chart and export consumers depend on exactly these numbers.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::constants::MONTHS_PER_YEAR;
use crate::simulation::SimulationDataPoint;

use super::reporting_model::Granularity;

/// Groups the monthly series for display at the requested granularity.
///
/// - `Monthly` returns the series unchanged.
/// - `Annual` buckets months into years (`year = (month - 1) / 12 + 1`),
///   sums every field per portfolio, and repurposes `month` as the year
///   number, ascending.
/// - `Total` collapses the whole series into a single point with
///   `month = 1`.
pub fn aggregate(series: &[SimulationDataPoint], granularity: Granularity) -> Vec<SimulationDataPoint> {
    match granularity {
        Granularity::Monthly => series.to_vec(),
        Granularity::Annual => {
            let mut grouped: BTreeMap<u32, SimulationDataPoint> = BTreeMap::new();
            for point in series {
                let year = (point.month - 1) / MONTHS_PER_YEAR + 1;
                let bucket = grouped
                    .entry(year)
                    .or_insert_with(|| SimulationDataPoint::empty(year));
                accumulate(bucket, point);
            }
            grouped.into_values().collect()
        }
        Granularity::Total => {
            let mut total = SimulationDataPoint::empty(1);
            for point in series {
                accumulate(&mut total, point);
            }
            vec![total]
        }
    }
}

/// Adds every per-portfolio figure of `point` into `bucket`.
fn accumulate(bucket: &mut SimulationDataPoint, point: &SimulationDataPoint) {
    for (id, amount) in &point.value {
        *bucket.value.entry(id.clone()).or_insert(Decimal::ZERO) += *amount;
    }
    for (id, amount) in &point.dividends_received {
        *bucket
            .dividends_received
            .entry(id.clone())
            .or_insert(Decimal::ZERO) += *amount;
    }
    for (id, amount) in &point.total_contributed {
        *bucket
            .total_contributed
            .entry(id.clone())
            .or_insert(Decimal::ZERO) += *amount;
    }
}

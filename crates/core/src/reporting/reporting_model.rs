use serde::{Deserialize, Serialize};

/// Display granularity for the simulated series.
///
/// Drives chart bucketing and CSV export; `Monthly` is the engine's native
/// resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Granularity {
    Monthly,
    Annual,
    Total,
}

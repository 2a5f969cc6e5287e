use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::assets::AssetSnapshot;
use crate::portfolios::Portfolio;
use crate::simulation::SimulationParameters;

/// The complete restorable state of a simulation session.
///
/// Serialized as one opaque JSON blob and restored verbatim; the engine
/// has no knowledge of this shape - it only ever receives the three parts
/// reconstructed from it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSnapshot {
    pub portfolios: Vec<Portfolio>,
    pub simulation_params: SimulationParameters,
    pub assets: HashMap<String, AssetSnapshot>,
}

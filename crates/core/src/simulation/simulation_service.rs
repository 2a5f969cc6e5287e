use std::sync::Arc;

use log::debug;

use crate::assets::AssetRegistry;
use crate::errors::Result;
use crate::portfolios::PortfolioServiceTrait;

use super::simulation_engine::simulate;
use super::simulation_model::SimulationResult;

/// Triggers projection runs on demand.
///
/// The service owns nothing: it snapshots the current portfolio state and
/// asset registry, hands the copies to the pure engine, and returns the
/// result to the caller. State transitions stay with the owning services;
/// the engine never mutates shared state.
pub struct SimulationService {
    portfolio_service: Arc<dyn PortfolioServiceTrait>,
    registry: Arc<AssetRegistry>,
}

impl SimulationService {
    pub fn new(
        portfolio_service: Arc<dyn PortfolioServiceTrait>,
        registry: Arc<AssetRegistry>,
    ) -> Self {
        Self {
            portfolio_service,
            registry,
        }
    }

    /// Runs the projection against the current state.
    pub fn run(&self) -> Result<SimulationResult> {
        let portfolios = self.portfolio_service.list_portfolios();
        let assets = self.registry.snapshot();
        let parameters = self.portfolio_service.parameters();

        debug!("Starting simulation run for {} portfolios", portfolios.len());
        Ok(simulate(&portfolios, &assets, &parameters)?)
    }
}

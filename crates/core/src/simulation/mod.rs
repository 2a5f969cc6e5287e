pub(crate) mod simulation_engine;
pub(crate) mod simulation_errors;
pub(crate) mod simulation_model;
pub(crate) mod simulation_service;
pub(crate) mod simulation_state;

#[cfg(test)]
mod simulation_engine_tests;

// Re-export the public interface
pub use simulation_engine::simulate;
pub use simulation_model::{
    PortfolioSummary, SimulationDataPoint, SimulationParameters, SimulationParametersUpdate,
    SimulationResult,
};
pub use simulation_service::SimulationService;

// Re-export error types for convenience
pub use simulation_errors::SimulationError;

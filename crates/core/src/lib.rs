//! Carteira Core - Domain entities, services, and the projection engine.
//!
//! This crate contains the core business logic for Carteira: the asset
//! registry, portfolio management, the month-by-month projection engine,
//! period aggregation/export, and the snapshot persistence boundary.
//! Market data lookups live in the `carteira-market-data` crate; this
//! crate only consumes the provider trait.

pub mod assets;
pub mod constants;
pub mod errors;
pub mod portfolios;
pub mod reporting;
pub mod simulation;
pub mod store;

// Re-export common types from the domain modules
pub use assets::{AssetRegistry, AssetService, AssetSnapshot};
pub use portfolios::{NewPortfolio, Portfolio, PortfolioService, Position};
pub use reporting::{aggregate, Granularity};
pub use simulation::{
    simulate, SimulationParameters, SimulationResult, SimulationService,
};
pub use store::{SimulationSnapshot, SnapshotStore};

// Re-export error types
pub use errors::Error;
pub use errors::Result;

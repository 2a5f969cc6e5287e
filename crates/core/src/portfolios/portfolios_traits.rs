use rust_decimal::Decimal;

use super::portfolios_model::{NewPortfolio, Portfolio};
use super::portfolios_errors::Result;
use crate::simulation::{SimulationParameters, SimulationParametersUpdate};

/// Trait defining the contract for portfolio management operations.
///
/// Implementations own the mutable portfolio/parameter state; the engine
/// only ever sees cloned snapshots taken through this interface.
pub trait PortfolioServiceTrait: Send + Sync {
    fn list_portfolios(&self) -> Vec<Portfolio>;
    fn get_portfolio(&self, portfolio_id: &str) -> Result<Portfolio>;
    fn create_portfolio(&self, input: NewPortfolio) -> Result<Portfolio>;
    fn remove_portfolio(&self, portfolio_id: &str) -> Result<()>;
    fn add_position(&self, portfolio_id: &str, ticker: &str, quantity: Decimal)
        -> Result<Portfolio>;
    fn remove_position(&self, portfolio_id: &str, ticker: &str) -> Result<Portfolio>;
    fn parameters(&self) -> SimulationParameters;
    fn update_parameters(&self, update: SimulationParametersUpdate)
        -> Result<SimulationParameters>;
    /// Replaces the whole state (used by the snapshot-restore path).
    fn restore(&self, portfolios: Vec<Portfolio>, parameters: SimulationParameters);
}

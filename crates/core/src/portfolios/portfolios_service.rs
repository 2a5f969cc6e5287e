use std::sync::{Arc, RwLock};

use log::debug;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::assets::{AssetError, AssetRegistry};
use crate::simulation::{SimulationParameters, SimulationParametersUpdate};

use super::portfolios_errors::{PortfolioError, Result};
use super::portfolios_model::{NewPortfolio, Portfolio, Position};
use super::portfolios_traits::PortfolioServiceTrait;

/// In-memory portfolio state owner.
///
/// Holds the portfolios and the simulation parameters behind locks; every
/// read hands out clones so callers (engine, store, UI) never alias the
/// live state. Referential integrity against the asset registry is
/// enforced here, on `add_position`, so the engine can assume resolved
/// tickers.
pub struct PortfolioService {
    registry: Arc<AssetRegistry>,
    portfolios: RwLock<Vec<Portfolio>>,
    parameters: RwLock<SimulationParameters>,
}

impl PortfolioService {
    pub fn new(registry: Arc<AssetRegistry>) -> Self {
        Self {
            registry,
            portfolios: RwLock::new(Vec::new()),
            parameters: RwLock::new(SimulationParameters::default()),
        }
    }
}

impl PortfolioServiceTrait for PortfolioService {
    fn list_portfolios(&self) -> Vec<Portfolio> {
        self.portfolios.read().unwrap().clone()
    }

    fn get_portfolio(&self, portfolio_id: &str) -> Result<Portfolio> {
        self.portfolios
            .read()
            .unwrap()
            .iter()
            .find(|p| p.id == portfolio_id)
            .cloned()
            .ok_or_else(|| PortfolioError::NotFound(portfolio_id.to_string()))
    }

    fn create_portfolio(&self, input: NewPortfolio) -> Result<Portfolio> {
        input.validate()?;

        let portfolio = Portfolio {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            theme_color: input.theme_color,
            positions: Vec::new(),
        };
        debug!("Creating portfolio {} ({})", portfolio.name, portfolio.id);

        self.parameters
            .write()
            .unwrap()
            .growth_rates
            .insert(portfolio.id.clone(), input.growth_rate_annual);
        self.portfolios
            .write()
            .unwrap()
            .push(portfolio.clone());
        Ok(portfolio)
    }

    fn remove_portfolio(&self, portfolio_id: &str) -> Result<()> {
        let mut portfolios = self.portfolios.write().unwrap();
        let before = portfolios.len();
        portfolios.retain(|p| p.id != portfolio_id);
        if portfolios.len() == before {
            return Err(PortfolioError::NotFound(portfolio_id.to_string()));
        }

        // The growth-rate entry goes with the portfolio.
        self.parameters
            .write()
            .unwrap()
            .growth_rates
            .remove(portfolio_id);
        Ok(())
    }

    fn add_position(
        &self,
        portfolio_id: &str,
        ticker: &str,
        quantity: Decimal,
    ) -> Result<Portfolio> {
        if quantity <= Decimal::ZERO {
            return Err(PortfolioError::InvalidQuantity(format!(
                "quantity must be positive, got {}",
                quantity
            )));
        }
        let asset = self
            .registry
            .get(ticker)
            .ok_or_else(|| AssetError::NotFound(ticker.to_string()))?;

        let mut portfolios = self.portfolios.write().unwrap();
        let portfolio = portfolios
            .iter_mut()
            .find(|p| p.id == portfolio_id)
            .ok_or_else(|| PortfolioError::NotFound(portfolio_id.to_string()))?;

        let added_value = quantity * asset.current_price;
        match portfolio.positions.iter_mut().find(|p| p.ticker == ticker) {
            Some(position) => {
                // Same ticker added again: quantities merge into the one position.
                position.quantity += quantity;
                position.initial_value += added_value;
            }
            None => portfolio.positions.push(Position {
                ticker: ticker.to_string(),
                quantity,
                initial_value: added_value,
            }),
        }
        Ok(portfolio.clone())
    }

    fn remove_position(&self, portfolio_id: &str, ticker: &str) -> Result<Portfolio> {
        let mut portfolios = self.portfolios.write().unwrap();
        let portfolio = portfolios
            .iter_mut()
            .find(|p| p.id == portfolio_id)
            .ok_or_else(|| PortfolioError::NotFound(portfolio_id.to_string()))?;

        let before = portfolio.positions.len();
        portfolio.positions.retain(|p| p.ticker != ticker);
        if portfolio.positions.len() == before {
            return Err(PortfolioError::PositionNotFound {
                portfolio_id: portfolio_id.to_string(),
                ticker: ticker.to_string(),
            });
        }
        Ok(portfolio.clone())
    }

    fn parameters(&self) -> SimulationParameters {
        self.parameters.read().unwrap().clone()
    }

    fn update_parameters(
        &self,
        update: SimulationParametersUpdate,
    ) -> Result<SimulationParameters> {
        if let Some(contribution) = update.monthly_contribution {
            if contribution < Decimal::ZERO {
                return Err(PortfolioError::InvalidData(format!(
                    "monthly contribution cannot be negative, got {}",
                    contribution
                )));
            }
        }
        if let Some(rates) = &update.growth_rates {
            let portfolios = self.portfolios.read().unwrap();
            for portfolio_id in rates.keys() {
                if !portfolios.iter().any(|p| &p.id == portfolio_id) {
                    return Err(PortfolioError::NotFound(portfolio_id.clone()));
                }
            }
        }

        let mut parameters = self.parameters.write().unwrap();
        if let Some(contribution) = update.monthly_contribution {
            parameters.monthly_contribution = contribution;
        }
        if let Some(horizon_years) = update.horizon_years {
            parameters.horizon_years = horizon_years;
        }
        if let Some(rates) = update.growth_rates {
            parameters.growth_rates.extend(rates);
        }
        Ok(parameters.clone())
    }

    fn restore(&self, portfolios: Vec<Portfolio>, parameters: SimulationParameters) {
        *self.portfolios.write().unwrap() = portfolios;
        *self.parameters.write().unwrap() = parameters;
    }
}

pub(crate) mod portfolios_errors;
pub(crate) mod portfolios_model;
pub(crate) mod portfolios_service;
pub(crate) mod portfolios_traits;

// Re-export the public interface
pub use portfolios_model::{NewPortfolio, Portfolio, Position};
pub use portfolios_service::PortfolioService;
pub use portfolios_traits::PortfolioServiceTrait;

// Re-export error types for convenience
pub use portfolios_errors::PortfolioError;

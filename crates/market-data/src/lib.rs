//! Carteira Market Data Crate
//!
//! This crate provides the market data lookup collaborator for the
//! Carteira application.
//!
//! # Overview
//!
//! The market data crate supports:
//! - Resolving B3 ticker symbols into point-in-time quote profiles
//! - Batch lookups over the provider's multi-quote endpoint
//! - Typed error taxonomy with retry classification
//! - Ticker-shape validation as a pre-filter before any network call
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |   Domain Layer   | --> |  symbol filter   |  (shape validation)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |    Provider      |  (Brapi)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |   QuoteProfile   |  (price + yield snapshot)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`QuoteProfile`] - Resolved asset snapshot (price, yield, currency)
//! - [`ApiStatus`] - Provider availability and quota
//! - [`MarketDataProvider`] - The provider trait
//! - [`MarketDataError`] / [`RetryClass`] - Error taxonomy and retry policy

pub mod errors;
pub mod models;
pub mod provider;
pub mod symbol;

// Re-export all public types from models
pub use models::{ApiStatus, QuoteProfile};

// Re-export provider types
pub use provider::brapi::BrapiProvider;
pub use provider::{lookup_with_retry, MarketDataProvider};

// Re-export symbol helpers
pub use symbol::{is_valid_symbol, normalize_symbol};

// Re-export error types
pub use errors::{MarketDataError, RetryClass};

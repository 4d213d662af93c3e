//! Portlens Core - portfolio decomposition and analytics.
//!
//! This crate contains the domain logic for breaking a portfolio of ETFs and
//! direct stock positions down into stock-level and GICS sector-level
//! allocations, plus stateless price-history calculations (log returns,
//! rolling volatility, correlation, attribution). Market data access is
//! abstracted behind a gateway trait implemented by callers.

pub mod constants;
pub mod errors;
pub mod market_data;
pub mod portfolio;
pub mod taxonomies;

// Re-export common types from the portfolio modules
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

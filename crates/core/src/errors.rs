//! Core error types for the Portlens crate.
//!
//! This module defines the crate-level error tree. Gateway-specific errors
//! live in `market_data::MarketDataError` and are converted into this type
//! at the service boundary.

use thiserror::Error;

use crate::market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the portfolio decomposition core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Calculation failed: {0}")]
    Calculation(#[from] CalculationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation failures raised during decomposition and import.
///
/// These are the hard-failure class: the operation aborts instead of
/// producing a partial result.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The stock-info response was empty or carried no sector field.
    /// Sector decomposition is meaningless without it.
    #[error("Stock info data is empty or missing sector classification for: {0}")]
    MissingSectorData(String),

    /// An ETF in the portfolio has no entry in the holdings dictionary.
    /// Only raised when strict holdings checking is enabled; the default
    /// policy drops the ETF from the output instead.
    #[error("No holdings data for ETF '{0}'")]
    MissingEtfHoldings(String),

    #[error("Invalid position data: {0}")]
    InvalidPosition(String),
}

/// Failures in the price-table calculations.
#[derive(Error, Debug)]
pub enum CalculationError {
    /// The requested price metric is not one of the recognized column names.
    #[error("Invalid metric '{metric}'. Available options: {available}")]
    InvalidMetric { metric: String, available: String },

    #[error("Rolling window must be at least 1, got {0}")]
    InvalidWindow(usize),
}

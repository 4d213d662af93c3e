//! Price-history calculations - reshaping, returns, volatility, correlation,
//! and sector attribution. Stateless and independent of the decomposer.

mod attribution;
mod calculations_model;
mod calculations_service;

pub use attribution::{brinson_hood_beebower, SectorAttribution};
pub use calculations_model::{CorrelationMatrix, PriceMatrix, ReturnFrequency};
pub use calculations_service::PortfolioCalculations;

#[cfg(test)]
mod calculations_service_tests;

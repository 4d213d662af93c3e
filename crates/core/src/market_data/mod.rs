//! Market data module - gateway models, traits, and errors.
//!
//! No concrete provider lives here: fetching, caching, and persistence are
//! the gateway implementor's concern. This module only fixes the shape of
//! the data the core consumes.

mod market_data_errors;
mod market_data_model;
mod market_data_traits;

// Re-export the public interface
pub use market_data_errors::MarketDataError;
pub use market_data_model::{EtfHolding, EtfSectorWeight, PriceBar, PriceMetric, StockInfo};
pub use market_data_traits::MarketDataGatewayTrait;

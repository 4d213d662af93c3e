//! Portfolio decomposition - ETF look-through to stock and sector level.

mod decomposition_model;
mod decomposition_service;

pub use decomposition_model::{
    DecompositionOptions, SectorAllocation, StockAllocation, StockSectorAllocation,
};
pub use decomposition_service::PortfolioDecomposer;

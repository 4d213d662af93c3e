use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;

use super::market_data_model::{EtfHolding, EtfSectorWeight, PriceBar, StockInfo};
use crate::errors::Result;

/// Gateway to externally-fetched market data.
///
/// Implementations own fetching, caching, and storage; the core only relies
/// on these lookups. Absent entries are represented by missing keys or empty
/// vectors, not errors - the caller decides which gaps are fatal.
#[async_trait]
pub trait MarketDataGatewayTrait: Send + Sync {
    /// Per-ETF vendor sector weights, keyed by ETF ticker.
    async fn get_etf_sectors(&self) -> Result<HashMap<String, Vec<EtfSectorWeight>>>;

    /// Per-ETF constituent holdings, keyed by ETF ticker.
    async fn get_etf_holdings(&self) -> Result<HashMap<String, Vec<EtfHolding>>>;

    /// Fundamental info (including vendor sector) for the given tickers.
    /// Tickers the gateway has no data for are simply absent from the result.
    async fn get_stock_info(&self, tickers: &[String]) -> Result<Vec<StockInfo>>;

    /// Long-format price history for the given tickers, optionally bounded
    /// by an inclusive date range.
    async fn get_stock_prices(
        &self,
        tickers: &[String],
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<PriceBar>>;
}

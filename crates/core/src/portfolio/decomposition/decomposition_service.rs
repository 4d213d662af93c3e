//! Service for decomposing ETF and stock positions into stock-level and
//! sector-level allocations.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, warn};
use rust_decimal::Decimal;

use crate::errors::{Result, ValidationError};
use crate::market_data::{EtfHolding, EtfSectorWeight, MarketDataGatewayTrait};
use crate::portfolio::positions::Position;
use crate::taxonomies::map_to_gics_sector;

use super::decomposition_model::{
    DecompositionOptions, SectorAllocation, StockAllocation, StockSectorAllocation,
};

/// Decomposes a portfolio of ETFs and direct stock positions into underlying
/// stock and GICS sector allocations.
///
/// The constructor takes a defensive copy of the portfolio and caches the
/// gateway's ETF sector and holdings dictionaries, so later mutation of the
/// caller's table cannot affect results. Whether a position is treated as an
/// ETF is decided by holdings-dictionary membership, not by the broker's
/// asset-class flag.
pub struct PortfolioDecomposer {
    positions: Vec<Position>,
    gateway: Arc<dyn MarketDataGatewayTrait>,
    etf_sectors: HashMap<String, Vec<EtfSectorWeight>>,
    etf_holdings: HashMap<String, Vec<EtfHolding>>,
    options: DecompositionOptions,
}

impl PortfolioDecomposer {
    pub async fn new(
        positions: &[Position],
        gateway: Arc<dyn MarketDataGatewayTrait>,
    ) -> Result<Self> {
        Self::with_options(positions, gateway, DecompositionOptions::default()).await
    }

    pub async fn with_options(
        positions: &[Position],
        gateway: Arc<dyn MarketDataGatewayTrait>,
        options: DecompositionOptions,
    ) -> Result<Self> {
        let etf_sectors = gateway.get_etf_sectors().await?;
        let etf_holdings = gateway.get_etf_holdings().await?;
        Ok(Self {
            positions: positions.to_vec(),
            gateway,
            etf_sectors,
            etf_holdings,
            options,
        })
    }

    /// Vendor-reported sector weights for the cached ETFs, keyed by ticker.
    ///
    /// This is the top-down view; `decompose_sectors` derives sector exposure
    /// bottom-up from per-stock classifications instead.
    pub fn etf_sector_weights(&self) -> &HashMap<String, Vec<EtfSectorWeight>> {
        &self.etf_sectors
    }

    /// Splits positions into ETF rows (present in the holdings dictionary)
    /// and direct stock rows. A position the broker flagged as an ETF but
    /// with no holdings entry is dropped (lenient) or fails (strict).
    fn partition(&self) -> Result<(Vec<&Position>, Vec<&Position>)> {
        let mut etf_rows = Vec::new();
        let mut stock_rows = Vec::new();

        for position in &self.positions {
            if self.etf_holdings.contains_key(&position.symbol) {
                etf_rows.push(position);
            } else if position.is_flagged_etf() {
                if self.options.strict_holdings {
                    return Err(
                        ValidationError::MissingEtfHoldings(position.symbol.clone()).into()
                    );
                }
                warn!(
                    "No holdings data for ETF '{}'; {} of exposure left out of the decomposition",
                    position.symbol, position.position_value
                );
            } else {
                stock_rows.push(position);
            }
        }

        Ok((etf_rows, stock_rows))
    }

    /// Decomposes the entire portfolio into stock-level allocations.
    ///
    /// Each ETF constituent's weight is scaled by the ETF's position value;
    /// direct stocks contribute their position value as-is. Contributions to
    /// the same ticker are summed, never overwritten, and the first-seen
    /// display name is retained. Rows are sorted by allocation descending.
    pub fn decompose_stocks(&self) -> Result<Vec<StockAllocation>> {
        let (etf_rows, stock_rows) = self.partition()?;
        debug!(
            "Decomposing {} positions ({} ETFs with holdings data)",
            self.positions.len(),
            etf_rows.len()
        );

        let mut contributions: Vec<(String, Option<String>, Decimal)> = Vec::new();
        for position in &etf_rows {
            // Partition guarantees the entry exists
            let Some(holdings) = self.etf_holdings.get(&position.symbol) else {
                continue;
            };
            for holding in holdings {
                contributions.push((
                    holding.ticker.clone(),
                    holding.name.clone(),
                    holding.weight * position.position_value,
                ));
            }
        }
        for position in &stock_rows {
            contributions.push((
                position.symbol.clone(),
                Some(position.description.clone()),
                position.position_value,
            ));
        }

        // Group by ticker with a running sum
        let mut seen_order: Vec<String> = Vec::new();
        let mut totals: HashMap<String, (Option<String>, Decimal)> = HashMap::new();
        for (ticker, name, allocation) in contributions {
            match totals.entry(ticker) {
                Entry::Occupied(mut entry) => {
                    let (existing_name, sum) = entry.get_mut();
                    *sum += allocation;
                    if existing_name.is_none() {
                        *existing_name = name;
                    }
                }
                Entry::Vacant(entry) => {
                    seen_order.push(entry.key().clone());
                    entry.insert((name, allocation));
                }
            }
        }

        let total_allocation: Decimal = totals.values().map(|(_, sum)| *sum).sum();

        let mut allocations: Vec<StockAllocation> = Vec::with_capacity(seen_order.len());
        for ticker in seen_order {
            if let Some((name, allocation)) = totals.remove(&ticker) {
                let port_weight = if total_allocation > Decimal::ZERO {
                    allocation / total_allocation
                } else {
                    Decimal::ZERO
                };
                allocations.push(StockAllocation {
                    ticker,
                    name,
                    allocation,
                    port_weight,
                });
            }
        }

        allocations.sort_by(|a, b| {
            b.allocation
                .cmp(&a.allocation)
                .then_with(|| a.ticker.cmp(&b.ticker))
        });
        Ok(allocations)
    }

    /// Stock-level allocations joined with each ticker's GICS sector.
    ///
    /// Hard-fails when the gateway returns no stock info at all; tickers
    /// individually absent from the response are left out of the result.
    pub async fn decompose_stocks_with_sectors(&self) -> Result<Vec<StockSectorAllocation>> {
        let stocks = self.decompose_stocks()?;
        self.join_sectors(&stocks).await
    }

    /// Decomposes the portfolio into sector-level allocations.
    ///
    /// Returns both the stock-level table and the sector table so callers
    /// keep access to the un-joined detail.
    pub async fn decompose_sectors(
        &self,
    ) -> Result<(Vec<StockAllocation>, Vec<SectorAllocation>)> {
        let stocks = self.decompose_stocks()?;
        let joined = self.join_sectors(&stocks).await?;

        let mut seen_order: Vec<String> = Vec::new();
        let mut totals: HashMap<String, Decimal> = HashMap::new();
        for row in &joined {
            match totals.entry(row.gics_sector.clone()) {
                Entry::Occupied(mut entry) => *entry.get_mut() += row.allocation,
                Entry::Vacant(entry) => {
                    seen_order.push(entry.key().clone());
                    entry.insert(row.allocation);
                }
            }
        }

        let total_allocation: Decimal = totals.values().copied().sum();

        let mut sectors: Vec<SectorAllocation> = Vec::with_capacity(seen_order.len());
        for gics_sector in seen_order {
            if let Some(position_value) = totals.remove(&gics_sector) {
                let port_weight = if total_allocation > Decimal::ZERO {
                    position_value / total_allocation
                } else {
                    Decimal::ZERO
                };
                sectors.push(SectorAllocation {
                    gics_sector,
                    position_value,
                    port_weight,
                });
            }
        }

        sectors.sort_by(|a, b| {
            b.position_value
                .cmp(&a.position_value)
                .then_with(|| a.gics_sector.cmp(&b.gics_sector))
        });
        Ok((stocks, sectors))
    }

    async fn join_sectors(
        &self,
        stocks: &[StockAllocation],
    ) -> Result<Vec<StockSectorAllocation>> {
        let tickers: Vec<String> = stocks.iter().map(|s| s.ticker.clone()).collect();
        let stock_info = self.gateway.get_stock_info(&tickers).await?;
        if stock_info.is_empty() {
            return Err(ValidationError::MissingSectorData(format!(
                "gateway returned no stock info for {} tickers",
                tickers.len()
            ))
            .into());
        }

        let mut sector_by_ticker: HashMap<&str, &'static str> = HashMap::new();
        for info in &stock_info {
            sector_by_ticker
                .entry(info.ticker.as_str())
                .or_insert_with(|| map_to_gics_sector(&info.sector));
        }

        let mut joined = Vec::with_capacity(stocks.len());
        let mut dropped = 0usize;
        for stock in stocks {
            match sector_by_ticker.get(stock.ticker.as_str()) {
                Some(gics_sector) => joined.push(StockSectorAllocation {
                    ticker: stock.ticker.clone(),
                    name: stock.name.clone(),
                    allocation: stock.allocation,
                    gics_sector: (*gics_sector).to_string(),
                }),
                None => dropped += 1,
            }
        }
        if dropped > 0 {
            debug!("{dropped} tickers had no stock info and were left out of the sector view");
        }
        Ok(joined)
    }
}

//! Output models for portfolio decomposition.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A stock-level allocation row: one ticker, with contributions summed
/// across every ETF and direct holding of that ticker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockAllocation {
    pub ticker: String,
    /// First-seen display name for the ticker; may be absent when the
    /// holdings feed carries none.
    pub name: Option<String>,
    /// Dollar value attributed to this ticker
    pub allocation: Decimal,
    /// This ticker's share of total decomposed value
    pub port_weight: Decimal,
}

/// A stock-level row joined with its GICS sector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockSectorAllocation {
    pub ticker: String,
    pub name: Option<String>,
    pub allocation: Decimal,
    pub gics_sector: String,
}

/// A sector-level allocation row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SectorAllocation {
    pub gics_sector: String,
    /// Total dollar value attributed to this sector
    pub position_value: Decimal,
    /// This sector's share of total decomposed value; sums to 1 across the
    /// table, subject to floating-point rounding
    pub port_weight: Decimal,
}

/// Knobs for decomposition behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecompositionOptions {
    /// When true, a position flagged as an ETF with no entry in the holdings
    /// dictionary fails decomposition. The default preserves the lenient
    /// policy: such positions are dropped from the output with a warning.
    pub strict_holdings: bool,
}

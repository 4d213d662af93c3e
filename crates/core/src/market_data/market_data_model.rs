//! Domain models for gateway-supplied market data.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::CalculationError;

/// One constituent row of an ETF's holdings table.
///
/// `weight` is the constituent's fractional share of the ETF's total value.
/// Rows across one ETF need not sum exactly to 1.0 (cash and unclassified
/// residue), and that is accepted silently.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EtfHolding {
    pub ticker: String,
    pub name: Option<String>,
    pub weight: Decimal,
}

/// A vendor-reported sector weight for an ETF.
///
/// Exposed by the gateway for top-down views; the bottom-up sector
/// decomposition path does not consume it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EtfSectorWeight {
    pub sector: String,
    pub weight: Decimal,
}

/// Per-stock fundamental info. The `sector` field uses the vendor's
/// taxonomy, not the official GICS one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockInfo {
    pub ticker: String,
    pub name: Option<String>,
    pub sector: String,
    pub industry: Option<String>,
}

/// One long-format price history row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceBar {
    pub date: NaiveDate,
    pub ticker: String,
    pub open: Option<Decimal>,
    pub high: Option<Decimal>,
    pub low: Option<Decimal>,
    pub close: Option<Decimal>,
    pub volume: Option<Decimal>,
}

impl PriceBar {
    /// Returns the value of the requested metric for this bar.
    pub fn metric(&self, metric: PriceMetric) -> Option<Decimal> {
        match metric {
            PriceMetric::Open => self.open,
            PriceMetric::High => self.high,
            PriceMetric::Low => self.low,
            PriceMetric::Close => self.close,
            PriceMetric::Volume => self.volume,
        }
    }
}

/// The five recognized price metric columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceMetric {
    Open,
    High,
    Low,
    Close,
    Volume,
}

impl PriceMetric {
    pub const ALL: [PriceMetric; 5] = [
        PriceMetric::Open,
        PriceMetric::High,
        PriceMetric::Low,
        PriceMetric::Close,
        PriceMetric::Volume,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceMetric::Open => "open",
            PriceMetric::High => "high",
            PriceMetric::Low => "low",
            PriceMetric::Close => "close",
            PriceMetric::Volume => "volume",
        }
    }
}

impl fmt::Display for PriceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceMetric {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(PriceMetric::Open),
            "high" => Ok(PriceMetric::High),
            "low" => Ok(PriceMetric::Low),
            "close" => Ok(PriceMetric::Close),
            "volume" => Ok(PriceMetric::Volume),
            other => Err(CalculationError::InvalidMetric {
                metric: other.to_string(),
                available: PriceMetric::ALL
                    .iter()
                    .map(|m| m.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }
}

//! Matrix models for price-history calculations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Wide price (or derived-value) matrix: rows are dates in ascending order,
/// columns are tickers. Cells are `None` where no observation exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceMatrix {
    pub dates: Vec<NaiveDate>,
    pub tickers: Vec<String>,
    /// Row-major, `values[row][col]` aligned with `dates` x `tickers`
    pub values: Vec<Vec<Option<Decimal>>>,
}

impl PriceMatrix {
    pub fn empty() -> Self {
        Self {
            dates: Vec::new(),
            tickers: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn num_rows(&self) -> usize {
        self.dates.len()
    }

    pub fn num_columns(&self) -> usize {
        self.tickers.len()
    }

    /// Cell lookup by row and column index.
    pub fn value(&self, row: usize, col: usize) -> Option<Decimal> {
        self.values.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Column index for a ticker, if present.
    pub fn column(&self, ticker: &str) -> Option<usize> {
        self.tickers.iter().position(|t| t == ticker)
    }
}

/// Square pairwise correlation matrix over ticker columns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationMatrix {
    pub tickers: Vec<String>,
    pub values: Vec<Vec<Decimal>>,
}

impl CorrelationMatrix {
    pub fn value(&self, row: usize, col: usize) -> Decimal {
        self.values[row][col]
    }
}

/// Calendar bucketing for return aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReturnFrequency {
    Weekly,
    Monthly,
}

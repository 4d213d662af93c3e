//! Stateless calculations over price tables.

use std::collections::{BTreeSet, HashMap};

use chrono::{Datelike, NaiveDate};
use log::{debug, warn};
use rust_decimal::{Decimal, MathematicalOps};

use crate::constants::DEFAULT_VOLATILITY_WINDOW;
use crate::errors::{CalculationError, Result};
use crate::market_data::{PriceBar, PriceMetric};

use super::calculations_model::{CorrelationMatrix, PriceMatrix, ReturnFrequency};

/// Return, volatility, and correlation calculations over price histories.
///
/// Every operation is a pure function; nothing here touches the gateway or
/// the decomposer.
pub struct PortfolioCalculations;

impl PortfolioCalculations {
    /// Pivots a long-format price table into a wide matrix: rows are dates
    /// in ascending order, columns are the distinct tickers, cells the
    /// chosen metric.
    ///
    /// An unrecognized metric name is a hard failure; an empty input table
    /// is a lenient no-op returning an empty matrix.
    pub fn reshape_stock_prices(bars: &[PriceBar], metric: &str) -> Result<PriceMatrix> {
        if bars.is_empty() {
            warn!("No stock price data available to reshape");
            return Ok(PriceMatrix::empty());
        }

        let metric: PriceMetric = metric.parse()?;

        let mut date_set: BTreeSet<NaiveDate> = BTreeSet::new();
        let mut ticker_set: BTreeSet<&str> = BTreeSet::new();
        for bar in bars {
            date_set.insert(bar.date);
            ticker_set.insert(bar.ticker.as_str());
        }
        let dates: Vec<NaiveDate> = date_set.into_iter().collect();
        let tickers: Vec<String> = ticker_set.iter().map(|t| t.to_string()).collect();

        let date_index: HashMap<NaiveDate, usize> =
            dates.iter().enumerate().map(|(i, d)| (*d, i)).collect();
        let ticker_index: HashMap<&str, usize> = tickers
            .iter()
            .enumerate()
            .map(|(i, t)| (t.as_str(), i))
            .collect();

        let mut values = vec![vec![None; tickers.len()]; dates.len()];
        for bar in bars {
            if let (Some(&row), Some(&col)) = (
                date_index.get(&bar.date),
                ticker_index.get(bar.ticker.as_str()),
            ) {
                values[row][col] = bar.metric(metric);
            }
        }

        debug!(
            "Reshaped '{}' into {} rows x {} tickers",
            metric,
            dates.len(),
            tickers.len()
        );
        Ok(PriceMatrix {
            dates,
            tickers,
            values,
        })
    }

    /// Day-over-day logarithmic returns, `ln(price[t] / price[t-1])`.
    ///
    /// Rows containing any undefined value are dropped: the first row always
    /// (no prior period), and any row where a price gap or non-positive
    /// ratio makes the log undefined.
    pub fn calculate_returns(prices: &PriceMatrix) -> PriceMatrix {
        let cols = prices.num_columns();
        let mut dates = Vec::new();
        let mut values = Vec::new();

        for row in 1..prices.num_rows() {
            let returns: Vec<Option<Decimal>> = (0..cols)
                .map(|col| log_return(prices.value(row - 1, col), prices.value(row, col)))
                .collect();
            if returns.iter().all(|r| r.is_some()) {
                dates.push(prices.dates[row]);
                values.push(returns);
            }
        }

        PriceMatrix {
            dates,
            tickers: prices.tickers.clone(),
            values,
        }
    }

    /// Trailing rolling standard deviation of simple percentage changes.
    ///
    /// Output rows align with the input's date index; the first `window`
    /// rows are undefined by construction of a trailing window and are left
    /// as `None`, never fabricated. See [`DEFAULT_VOLATILITY_WINDOW`].
    pub fn calculate_volatility(prices: &PriceMatrix, window: usize) -> Result<PriceMatrix> {
        if window == 0 {
            return Err(CalculationError::InvalidWindow(window).into());
        }

        let rows = prices.num_rows();
        let cols = prices.num_columns();
        let pct = pct_change_matrix(prices);

        let mut values = vec![vec![None; cols]; rows];
        for row in 0..rows {
            if row + 1 < window {
                continue;
            }
            for (col, cell) in values[row].iter_mut().enumerate() {
                let trailing: Option<Vec<Decimal>> = (row + 1 - window..=row)
                    .map(|r| pct[r][col])
                    .collect();
                *cell = trailing.as_deref().and_then(sample_std);
            }
        }

        Ok(PriceMatrix {
            dates: prices.dates.clone(),
            tickers: prices.tickers.clone(),
            values,
        })
    }

    /// Rolling volatility with the default trailing window.
    pub fn calculate_volatility_default(prices: &PriceMatrix) -> Result<PriceMatrix> {
        Self::calculate_volatility(prices, DEFAULT_VOLATILITY_WINDOW)
    }

    /// Full pairwise correlation matrix of simple percentage changes.
    ///
    /// Pairs are correlated over their pairwise-complete rows. The diagonal
    /// is exactly 1; pairs with no usable overlap or zero variance get 0.
    pub fn calculate_correlation(prices: &PriceMatrix) -> CorrelationMatrix {
        let cols = prices.num_columns();
        let pct = pct_change_matrix(prices);

        let mut values = vec![vec![Decimal::ZERO; cols]; cols];
        for i in 0..cols {
            values[i][i] = Decimal::ONE;
            for j in i + 1..cols {
                let corr = pairwise_correlation(&pct, i, j).unwrap_or(Decimal::ZERO);
                values[i][j] = corr;
                values[j][i] = corr;
            }
        }

        CorrelationMatrix {
            tickers: prices.tickers.clone(),
            values,
        }
    }

    /// Compounds daily log returns into weekly or monthly rows.
    ///
    /// Log returns sum within a calendar bucket; each output row carries the
    /// bucket's last observed date. Columns with no observation in a bucket
    /// stay undefined.
    pub fn aggregate_returns(returns: &PriceMatrix, frequency: ReturnFrequency) -> PriceMatrix {
        let cols = returns.num_columns();
        let mut dates: Vec<NaiveDate> = Vec::new();
        let mut values: Vec<Vec<Option<Decimal>>> = Vec::new();
        let mut current_bucket: Option<(i32, u32)> = None;

        for row in 0..returns.num_rows() {
            let date = returns.dates[row];
            let bucket = match frequency {
                ReturnFrequency::Monthly => (date.year(), date.month()),
                ReturnFrequency::Weekly => {
                    let week = date.iso_week();
                    (week.year(), week.week())
                }
            };

            if current_bucket != Some(bucket) {
                current_bucket = Some(bucket);
                dates.push(date);
                values.push(vec![None; cols]);
            } else if let Some(last) = dates.last_mut() {
                *last = date;
            }

            if let Some(sums) = values.last_mut() {
                for (col, sum) in sums.iter_mut().enumerate() {
                    if let Some(value) = returns.value(row, col) {
                        *sum = Some(sum.unwrap_or(Decimal::ZERO) + value);
                    }
                }
            }
        }

        PriceMatrix {
            dates,
            tickers: returns.tickers.clone(),
            values,
        }
    }
}

fn log_return(prev: Option<Decimal>, current: Option<Decimal>) -> Option<Decimal> {
    let (prev, current) = (prev?, current?);
    if prev <= Decimal::ZERO || current <= Decimal::ZERO {
        return None;
    }
    Some((current / prev).ln())
}

fn pct_change(prev: Option<Decimal>, current: Option<Decimal>) -> Option<Decimal> {
    let (prev, current) = (prev?, current?);
    if prev.is_zero() {
        return None;
    }
    Some(current / prev - Decimal::ONE)
}

/// Simple percentage change per row and column; the first row has no prior
/// period and stays undefined.
fn pct_change_matrix(prices: &PriceMatrix) -> Vec<Vec<Option<Decimal>>> {
    let rows = prices.num_rows();
    let cols = prices.num_columns();
    let mut pct = vec![vec![None; cols]; rows];
    for row in 1..rows {
        for (col, cell) in pct[row].iter_mut().enumerate() {
            *cell = pct_change(prices.value(row - 1, col), prices.value(row, col));
        }
    }
    pct
}

/// Sample standard deviation (n - 1 denominator); undefined below two values.
fn sample_std(values: &[Decimal]) -> Option<Decimal> {
    if values.len() < 2 {
        return None;
    }
    let count = Decimal::from(values.len() as u64);
    let mean = values.iter().copied().sum::<Decimal>() / count;
    let sum_squared_diff: Decimal = values
        .iter()
        .map(|v| {
            let diff = *v - mean;
            diff * diff
        })
        .sum();
    let variance = sum_squared_diff / (count - Decimal::ONE);
    variance.sqrt()
}

/// Pearson correlation of two columns over their pairwise-complete rows.
fn pairwise_correlation(
    pct: &[Vec<Option<Decimal>>],
    i: usize,
    j: usize,
) -> Option<Decimal> {
    let pairs: Vec<(Decimal, Decimal)> = pct
        .iter()
        .filter_map(|row| Some((row[i]?, row[j]?)))
        .collect();
    if pairs.len() < 2 {
        return None;
    }

    let count = Decimal::from(pairs.len() as u64);
    let mean_i = pairs.iter().map(|(a, _)| *a).sum::<Decimal>() / count;
    let mean_j = pairs.iter().map(|(_, b)| *b).sum::<Decimal>() / count;

    let mut covariance = Decimal::ZERO;
    let mut variance_i = Decimal::ZERO;
    let mut variance_j = Decimal::ZERO;
    for (a, b) in &pairs {
        let da = *a - mean_i;
        let db = *b - mean_j;
        covariance += da * db;
        variance_i += da * da;
        variance_j += db * db;
    }

    let denominator = (variance_i * variance_j).sqrt()?;
    if denominator.is_zero() {
        return None;
    }
    Some(covariance / denominator)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::{Decimal, MathematicalOps};
    use rust_decimal_macros::dec;

    use crate::errors::{CalculationError, Error};
    use crate::market_data::PriceBar;
    use crate::portfolio::calculations::{
        PortfolioCalculations, PriceMatrix, ReturnFrequency,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn bar(ticker: &str, day: NaiveDate, close: Decimal) -> PriceBar {
        PriceBar {
            date: day,
            ticker: ticker.to_string(),
            open: Some(close),
            high: Some(close),
            low: Some(close),
            close: Some(close),
            volume: Some(dec!(1000)),
        }
    }

    /// Single-column price matrix from a close series.
    fn price_matrix(ticker: &str, closes: &[Decimal]) -> PriceMatrix {
        PriceMatrix {
            dates: (0..closes.len())
                .map(|i| date(2024, 1, 1) + chrono::Days::new(i as u64))
                .collect(),
            tickers: vec![ticker.to_string()],
            values: closes.iter().map(|c| vec![Some(*c)]).collect(),
        }
    }

    fn assert_close(actual: Decimal, expected: Decimal) {
        assert!(
            (actual - expected).abs() < dec!(0.000000001),
            "expected {expected}, got {actual}"
        );
    }

    // --- reshape_stock_prices ---

    #[test]
    fn reshape_pivots_long_rows_into_a_sorted_wide_matrix() {
        let bars = vec![
            bar("MSFT", date(2024, 1, 3), dec!(390)),
            bar("AAPL", date(2024, 1, 2), dec!(185)),
            bar("AAPL", date(2024, 1, 3), dec!(186)),
            bar("MSFT", date(2024, 1, 2), dec!(388)),
        ];

        let matrix = PortfolioCalculations::reshape_stock_prices(&bars, "close").unwrap();

        assert_eq!(matrix.dates, vec![date(2024, 1, 2), date(2024, 1, 3)]);
        assert_eq!(matrix.tickers, vec!["AAPL", "MSFT"]);
        assert_eq!(matrix.column("MSFT"), Some(1));
        assert_eq!(matrix.value(0, 0), Some(dec!(185)));
        assert_eq!(matrix.value(1, 1), Some(dec!(390)));
    }

    #[test]
    fn reshape_leaves_missing_observations_undefined() {
        let bars = vec![
            bar("AAPL", date(2024, 1, 2), dec!(185)),
            bar("MSFT", date(2024, 1, 3), dec!(390)),
        ];

        let matrix = PortfolioCalculations::reshape_stock_prices(&bars, "close").unwrap();

        assert_eq!(matrix.num_rows(), 2);
        assert_eq!(matrix.value(0, 1), None);
        assert_eq!(matrix.value(1, 0), None);
    }

    #[test]
    fn reshape_rejects_an_unrecognized_metric() {
        let bars = vec![bar("AAPL", date(2024, 1, 2), dec!(185))];

        let err =
            PortfolioCalculations::reshape_stock_prices(&bars, "adjusted_close").unwrap_err();

        assert!(matches!(
            err,
            Error::Calculation(CalculationError::InvalidMetric { ref metric, .. })
                if metric == "adjusted_close"
        ));
    }

    #[test]
    fn reshape_of_an_empty_table_is_an_empty_matrix() {
        let matrix = PortfolioCalculations::reshape_stock_prices(&[], "close").unwrap();
        assert!(matrix.is_empty());
    }

    // --- calculate_returns ---

    #[test]
    fn log_returns_of_n_days_have_n_minus_one_rows() {
        let matrix = price_matrix("AAPL", &[dec!(1), dec!(2), dec!(4), dec!(8)]);

        let returns = PortfolioCalculations::calculate_returns(&matrix);

        assert_eq!(returns.num_rows(), 3);
        let ln2 = dec!(2).ln();
        for row in 0..3 {
            assert_close(returns.value(row, 0).unwrap(), ln2);
        }
    }

    #[test]
    fn rows_with_a_price_gap_are_dropped() {
        let dates: Vec<NaiveDate> = (0..4)
            .map(|i| date(2024, 1, 1) + chrono::Days::new(i))
            .collect();
        let matrix = PriceMatrix {
            dates: dates.clone(),
            tickers: vec!["AAPL".to_string(), "MSFT".to_string()],
            values: vec![
                vec![Some(dec!(100)), Some(dec!(200))],
                vec![Some(dec!(110)), Some(dec!(210))],
                vec![Some(dec!(120)), None],
                vec![Some(dec!(130)), Some(dec!(220))],
            ],
        };

        let returns = PortfolioCalculations::calculate_returns(&matrix);

        // Rows for dates[2] and dates[3] both involve the gap
        assert_eq!(returns.dates, vec![dates[1]]);
    }

    // --- calculate_volatility ---

    #[test]
    fn volatility_leaves_the_first_window_rows_undefined() {
        let matrix = price_matrix("AAPL", &[dec!(100), dec!(110), dec!(132)]);

        let volatility = PortfolioCalculations::calculate_volatility(&matrix, 2).unwrap();

        assert_eq!(volatility.dates, matrix.dates);
        assert_eq!(volatility.value(0, 0), None);
        assert_eq!(volatility.value(1, 0), None);
        // pct changes are 0.10 and 0.20; sample std = sqrt(0.005)
        assert_close(volatility.value(2, 0).unwrap(), dec!(0.005).sqrt().unwrap());
    }

    #[test]
    fn default_window_needs_twenty_periods_before_defining_a_value() {
        let closes: Vec<Decimal> = (0..10).map(|i| dec!(100) + Decimal::from(i as u64)).collect();
        let matrix = price_matrix("AAPL", &closes);

        let volatility = PortfolioCalculations::calculate_volatility_default(&matrix).unwrap();

        assert!((0..volatility.num_rows()).all(|row| volatility.value(row, 0).is_none()));
    }

    #[test]
    fn volatility_rejects_a_zero_window() {
        let matrix = price_matrix("AAPL", &[dec!(100), dec!(110)]);
        let err = PortfolioCalculations::calculate_volatility(&matrix, 0).unwrap_err();
        assert!(matches!(
            err,
            Error::Calculation(CalculationError::InvalidWindow(0))
        ));
    }

    // --- calculate_correlation ---

    #[test]
    fn correlation_matrix_is_symmetric_with_unit_diagonal() {
        let dates: Vec<NaiveDate> = (0..4)
            .map(|i| date(2024, 1, 1) + chrono::Days::new(i))
            .collect();
        let a = [dec!(100), dec!(110), dec!(105), dec!(120)];
        let matrix = PriceMatrix {
            dates,
            tickers: vec!["A".to_string(), "B".to_string(), "C".to_string()],
            values: (0..4)
                .map(|i| {
                    vec![
                        Some(a[i]),
                        Some(a[i] * dec!(2)), // scaled copy, perfectly correlated
                        Some(dec!(50) + Decimal::from(i as u64) * dec!(3)),
                    ]
                })
                .collect(),
        };

        let correlation = PortfolioCalculations::calculate_correlation(&matrix);

        for i in 0..3 {
            assert_eq!(correlation.value(i, i), Decimal::ONE);
            for j in 0..3 {
                assert_eq!(correlation.value(i, j), correlation.value(j, i));
            }
        }
        assert_close(correlation.value(0, 1), Decimal::ONE);
    }

    // --- aggregate_returns ---

    #[test]
    fn monthly_aggregation_sums_log_returns_per_calendar_month() {
        let returns = PriceMatrix {
            dates: vec![
                date(2024, 1, 30),
                date(2024, 1, 31),
                date(2024, 2, 1),
                date(2024, 2, 2),
            ],
            tickers: vec!["AAPL".to_string()],
            values: vec![
                vec![Some(dec!(0.01))],
                vec![Some(dec!(0.02))],
                vec![Some(dec!(0.03))],
                vec![Some(dec!(0.04))],
            ],
        };

        let monthly =
            PortfolioCalculations::aggregate_returns(&returns, ReturnFrequency::Monthly);

        assert_eq!(monthly.dates, vec![date(2024, 1, 31), date(2024, 2, 2)]);
        assert_eq!(monthly.value(0, 0), Some(dec!(0.03)));
        assert_eq!(monthly.value(1, 0), Some(dec!(0.07)));
    }

    #[test]
    fn weekly_aggregation_breaks_on_iso_week_boundaries() {
        // Fri 2024-01-05 closes ISO week 1; Mon 2024-01-08 opens week 2
        let returns = PriceMatrix {
            dates: vec![date(2024, 1, 4), date(2024, 1, 5), date(2024, 1, 8)],
            tickers: vec!["AAPL".to_string()],
            values: vec![
                vec![Some(dec!(0.01))],
                vec![Some(dec!(0.01))],
                vec![Some(dec!(0.05))],
            ],
        };

        let weekly = PortfolioCalculations::aggregate_returns(&returns, ReturnFrequency::Weekly);

        assert_eq!(weekly.dates, vec![date(2024, 1, 5), date(2024, 1, 8)]);
        assert_eq!(weekly.value(0, 0), Some(dec!(0.02)));
        assert_eq!(weekly.value(1, 0), Some(dec!(0.05)));
    }
}

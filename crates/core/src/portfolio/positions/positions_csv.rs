//! CSV import for broker position exports.
//!
//! Reads the raw export schema (`Symbol`, `Description`, `PositionValue`,
//! `AssetClass`) into canonical [`Position`] rows.

use std::io::Read;

use log::debug;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::{Result, ValidationError};

use super::positions_model::Position;

/// Raw CSV record in the broker's column naming.
#[derive(Debug, Deserialize)]
struct PositionRecord {
    #[serde(rename = "Symbol")]
    symbol: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "PositionValue")]
    position_value: Decimal,
    #[serde(rename = "AssetClass", default)]
    asset_class: Option<String>,
}

/// Reads portfolio positions from a CSV export.
///
/// Malformed rows abort the import with a validation error rather than being
/// skipped; a partially-loaded portfolio would silently understate exposure.
pub fn read_positions<R: Read>(reader: R) -> Result<Vec<Position>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut positions = Vec::new();

    for record in csv_reader.deserialize() {
        let record: PositionRecord =
            record.map_err(|e| ValidationError::InvalidPosition(e.to_string()))?;
        positions.push(Position {
            symbol: record.symbol,
            description: record.description,
            position_value: record.position_value,
            asset_class: record.asset_class.filter(|c| !c.is_empty()),
        });
    }

    debug!("Loaded {} positions from CSV", positions.len());
    Ok(positions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use rust_decimal_macros::dec;

    #[test]
    fn reads_broker_export_columns() {
        let csv = "\
Symbol,Description,PositionValue,AssetClass
SPY,SPDR S&P 500 ETF,1000.50,ETF
AAPL,Apple Inc,250,STK
";
        let positions = read_positions(csv.as_bytes()).unwrap();
        assert_eq!(positions.len(), 2);
        assert_eq!(positions[0].symbol, "SPY");
        assert_eq!(positions[0].position_value, dec!(1000.50));
        assert!(positions[0].is_flagged_etf());
        assert_eq!(positions[1].description, "Apple Inc");
        assert!(!positions[1].is_flagged_etf());
    }

    #[test]
    fn missing_asset_class_column_is_accepted() {
        let csv = "\
Symbol,Description,PositionValue
MSFT,Microsoft Corp,42
";
        let positions = read_positions(csv.as_bytes()).unwrap();
        assert_eq!(positions[0].asset_class, None);
    }

    #[test]
    fn malformed_value_aborts_the_import() {
        let csv = "\
Symbol,Description,PositionValue
MSFT,Microsoft Corp,not-a-number
";
        let err = read_positions(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::InvalidPosition(_))));
    }
}

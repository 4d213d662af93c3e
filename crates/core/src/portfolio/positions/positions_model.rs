use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of a portfolio snapshot: an ETF or a direct stock holding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// Ticker symbol, unique per portfolio snapshot
    pub symbol: String,
    /// Display name
    pub description: String,
    /// Dollar value of the position
    pub position_value: Decimal,
    /// Asset class reported by the broker (e.g. "ETF", "STK").
    /// Decomposition itself keys on holdings-dictionary membership; this
    /// discriminator only backs strict-mode validation.
    pub asset_class: Option<String>,
}

impl Position {
    pub fn new(symbol: &str, description: &str, position_value: Decimal) -> Self {
        Self {
            symbol: symbol.to_string(),
            description: description.to_string(),
            position_value,
            asset_class: None,
        }
    }

    pub fn with_asset_class(mut self, asset_class: &str) -> Self {
        self.asset_class = Some(asset_class.to_string());
        self
    }

    /// Whether the broker flagged this position as an ETF.
    pub fn is_flagged_etf(&self) -> bool {
        self.asset_class
            .as_deref()
            .map(|c| c.eq_ignore_ascii_case("ETF"))
            .unwrap_or(false)
    }
}

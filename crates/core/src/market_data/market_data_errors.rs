use thiserror::Error;

/// Errors surfaced by market data gateway implementations.
#[derive(Error, Debug)]
pub enum MarketDataError {
    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("No data found for symbol(s): {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

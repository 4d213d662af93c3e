/// Default trailing window (in trading days) for rolling volatility
pub const DEFAULT_VOLATILITY_WINDOW: usize = 20;

/// Sentinel GICS label for vendor sectors with no known mapping
pub const UNKNOWN_UNMAPPED_SECTOR: &str = "Unknown Unmapped";

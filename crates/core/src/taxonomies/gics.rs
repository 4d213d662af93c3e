//! Vendor sector label to GICS sector mapping.
//!
//! This is data, not behavior: a fixed lookup table from the market-data
//! vendor's sector taxonomy to official GICS sector names. Extend the table
//! when the vendor adds or renames labels.

use crate::constants::UNKNOWN_UNMAPPED_SECTOR;

/// The eleven official GICS sectors.
pub const GICS_SECTORS: [&str; 11] = [
    "Communication Services",
    "Consumer Discretionary",
    "Consumer Staples",
    "Energy",
    "Financials",
    "Health Care",
    "Industrials",
    "Information Technology",
    "Materials",
    "Real Estate",
    "Utilities",
];

/// Vendor sector label -> GICS sector name.
pub const VENDOR_TO_GICS: [(&str, &str); 12] = [
    ("Basic Materials", "Materials"),
    ("Communication Services", "Communication Services"),
    ("Consumer Cyclical", "Consumer Discretionary"),
    ("Consumer Defensive", "Consumer Staples"),
    ("Energy", "Energy"),
    ("Financial Services", "Financials"),
    ("Healthcare", "Health Care"),
    ("Industrials", "Industrials"),
    ("Real Estate", "Real Estate"),
    ("Technology", "Information Technology"),
    ("Utilities", "Utilities"),
    ("N/A", UNKNOWN_UNMAPPED_SECTOR),
];

/// Maps a vendor sector label to its official GICS sector name.
///
/// Total over all inputs: any label outside the table yields the
/// `"Unknown Unmapped"` sentinel instead of failing.
pub fn map_to_gics_sector(label: &str) -> &'static str {
    VENDOR_TO_GICS
        .iter()
        .find(|(vendor, _)| *vendor == label)
        .map(|(_, gics)| *gics)
        .unwrap_or(UNKNOWN_UNMAPPED_SECTOR)
}

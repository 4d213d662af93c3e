//! Brinson-Hood-Beebower sector attribution.

use std::collections::{BTreeSet, HashMap};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-sector attribution of active return versus a benchmark.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SectorAttribution {
    pub gics_sector: String,
    /// (w_p - w_b) * r_b
    pub allocation_effect: Decimal,
    /// w_b * (r_p - r_b)
    pub selection_effect: Decimal,
    /// w_p * r_p - w_b * r_b
    pub total_active_return: Decimal,
}

/// Brinson-Hood-Beebower attribution over per-sector weights and returns.
///
/// Sectors are taken from the union of all four maps; a sector missing from
/// a map contributes zero for that term. Rows come back sorted by sector.
pub fn brinson_hood_beebower(
    port_weights: &HashMap<String, Decimal>,
    port_returns: &HashMap<String, Decimal>,
    bench_weights: &HashMap<String, Decimal>,
    bench_returns: &HashMap<String, Decimal>,
) -> Vec<SectorAttribution> {
    let sectors: BTreeSet<&String> = port_weights
        .keys()
        .chain(port_returns.keys())
        .chain(bench_weights.keys())
        .chain(bench_returns.keys())
        .collect();

    sectors
        .into_iter()
        .map(|sector| {
            let wp = port_weights.get(sector).copied().unwrap_or_default();
            let rp = port_returns.get(sector).copied().unwrap_or_default();
            let wb = bench_weights.get(sector).copied().unwrap_or_default();
            let rb = bench_returns.get(sector).copied().unwrap_or_default();

            SectorAttribution {
                gics_sector: sector.clone(),
                allocation_effect: (wp - wb) * rb,
                selection_effect: wb * (rp - rb),
                total_active_return: wp * rp - wb * rb,
            }
        })
        .collect()
}

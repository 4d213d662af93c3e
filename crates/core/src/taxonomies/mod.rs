//! Taxonomies module - sector classification data.

mod gics;

pub use gics::{map_to_gics_sector, GICS_SECTORS, VENDOR_TO_GICS};

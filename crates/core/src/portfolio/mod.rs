//! Portfolio module - positions, decomposition, and calculations.

pub mod calculations;
pub mod decomposition;
pub mod positions;

pub use calculations::*;
pub use decomposition::*;
pub use positions::*;

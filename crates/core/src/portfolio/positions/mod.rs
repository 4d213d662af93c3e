//! Portfolio positions - input model and CSV import.

mod positions_csv;
mod positions_model;

pub use positions_csv::read_positions;
pub use positions_model::Position;

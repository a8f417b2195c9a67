//! Source sheet loaders
//!
//! Each loader has a file entry point that reads the workbook and a grid
//! entry point that does the reshaping. All of them fail fast on a broken
//! layout and absorb cell-level problems as missing values or skipped rows.

pub mod flows;
pub mod indicator;
pub mod lookup;

pub use flows::{load_raw_flows, raw_flows_from_grid};
pub use indicator::{load_indicator_sheet, reshape_indicator_grid};
pub use lookup::{load_country_lookup, lookup_from_grid};

//! Domain models for the student flow pipeline
//!
//! Every table the pipeline builds is an owned `Vec` of one of these records.
//! Tables are produced once per run and only ever replaced by the next
//! reshape, join or filter step.

pub mod indicator;
pub mod lookup;
pub mod merged;
pub mod migration;

pub use indicator::{IndicatorRecord, IndicatorTable};
pub use lookup::CountryLookup;
pub use merged::{FinalRow, MergedRow};
pub use migration::{FlowType, MigrationRecord, MigrationWide, RawFlowRecord};

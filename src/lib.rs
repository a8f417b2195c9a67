//! Merges World Bank indicator sheets (GDP, education expenditure, urban
//! population) with UIS international student flows into one long-form table
//! for an animated world map.
//!
//! ```no_run
//! use student_flows::{PipelineConfig, run_pipeline};
//!
//! let config = PipelineConfig::from_data_dir("data");
//! let table = run_pipeline(&config)?;
//! table.write_parquet(std::path::Path::new("student_flows.parquet"))?;
//! # Ok::<(), student_flows::FlowError>(())
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod schema;
pub mod sheet;
pub mod utils;

// Core types
pub use config::{FlowIndicators, PipelineConfig, YearRange};
pub use error::{FlowError, Result};
pub use output::{FlowSummary, FlowTable};
pub use sheet::SheetGrid;

// Data model
pub use models::{
    CountryLookup, FinalRow, FlowType, IndicatorRecord, IndicatorTable, MergedRow,
    MigrationRecord, MigrationWide, RawFlowRecord,
};

// Pipeline entry points
pub use pipeline::{
    PipelineInputs, assemble, extract_migration, finalize, load_inputs, merge_indicators,
    pivot_migration, run_pipeline,
};

// Arrow types
pub use arrow::record_batch::RecordBatch;

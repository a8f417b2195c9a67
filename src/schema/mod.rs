//! Sheet layout validation and the output table schema.
//!
//! Source sheets are validated before any column is interpreted by position,
//! so a workbook with a shifted or missing header fails with a descriptive
//! schema error instead of silently producing garbage.

pub mod header;
pub mod output;

pub use header::{
    FLOW_COLUMNS, HeaderReport, INDICATOR_HEADER_ROW, IndicatorLayout, LOOKUP_COLUMNS, SchemaIssue,
    locate_columns, validate_indicator_header,
};
pub use output::{FINAL_COLUMNS, final_row_fields, final_row_schema};

//! Log lines for source loads and in-memory stages
//!
//! Both report in the same `<label>: <counts> (<elapsed>)` shape so a run
//! reads as one table of stages in the log.

use std::path::Path;
use std::time::Duration;

/// Announce that `source` is being read from `path`
pub fn log_load_start(source: &str, path: &Path) {
    log::info!("Reading {source} from {}", path.display());
}

/// Report the records a source load produced
pub fn log_load_complete(source: &str, path: &Path, records: usize, elapsed: Duration) {
    log::info!("{source}: {records} records from {} ({elapsed:?})", path.display());
}

/// Report the row count going into and coming out of an in-memory stage
pub fn log_stage_complete(stage: &str, rows_in: usize, rows_out: usize, elapsed: Duration) {
    log::info!("{stage}: {rows_in} rows in, {rows_out} rows out ({elapsed:?})");
}

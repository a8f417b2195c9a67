//! Logging utilities for stage reporting and progress tracking

pub mod log;
pub mod progress;

pub use self::log::{log_load_complete, log_load_start, log_stage_complete};
pub use self::progress::{create_stage_progress_bar, finish_progress_bar};

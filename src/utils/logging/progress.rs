//! Progress reporting for pipeline runs, using the indicatif crate.

use indicatif::{ProgressBar, ProgressStyle};

/// Default style for the stage progress bar
pub const DEFAULT_STAGE_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:30.cyan/blue}] {pos}/{len} {msg}";

/// Create a progress bar that advances once per pipeline stage
///
/// # Arguments
/// * `stages` - Number of stages
/// * `description` - Optional initial message
#[must_use]
pub fn create_stage_progress_bar(stages: u64, description: Option<&str>) -> ProgressBar {
    let pb = ProgressBar::new(stages);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(DEFAULT_STAGE_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    if let Some(desc) = description {
        pb.set_message(desc.to_string());
    }

    pb
}

/// Finish a progress bar with an optional completion message
pub fn finish_progress_bar(pb: &ProgressBar, message: Option<&str>) {
    if let Some(msg) = message {
        pb.finish_with_message(msg.to_string());
    } else {
        pb.finish();
    }
}

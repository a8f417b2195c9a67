//! Pipeline orchestration
//!
//! A run is a single forward pass:
//!
//! 1. load the three indicator sheets (in parallel) and reshape them to long form
//! 2. load the country lookup
//! 3. load the raw flow rows, keep the two flow indicators, resolve country
//!    names and pivot the flow type into columns
//! 4. left-join the indicators onto the migration rows
//! 5. keep the year window and melt the flow columns back to long form
//!
//! Loading is fallible and tagged with the stage name. Everything after
//! loading works on in-memory tables and cannot fail.

pub mod merge;
pub mod migration;

use std::time::Instant;

use indicatif::ProgressBar;

use crate::config::PipelineConfig;
use crate::error::{Result, StageExt};
use crate::loader::{load_country_lookup, load_indicator_sheet, load_raw_flows};
use crate::models::{CountryLookup, IndicatorTable, RawFlowRecord};
use crate::output::FlowTable;
use crate::utils::logging::log_stage_complete;

pub use merge::{filter_years, finalize, melt_flows, merge_indicators};
pub use migration::{extract_migration, pivot_migration};

/// Output column names of the three indicators
pub const GDP_COLUMN: &str = "GDP_USD";
pub const EDUCATION_COLUMN: &str = "Edu_pct_GDP";
pub const URBAN_COLUMN: &str = "Urban_pct";

/// Stage names used in error messages and progress output
pub const STAGE_GDP: &str = "GDP indicator";
pub const STAGE_EDUCATION: &str = "education indicator";
pub const STAGE_URBAN: &str = "urban population indicator";
pub const STAGE_LOOKUP: &str = "country lookup";
pub const STAGE_FLOWS: &str = "student flows";

/// Number of progress steps in a full run
pub const PIPELINE_STEPS: u64 = 5;

/// Every source table, loaded and reshaped but not yet combined
#[derive(Debug, Clone, Default)]
pub struct PipelineInputs {
    pub gdp: IndicatorTable,
    pub education: IndicatorTable,
    pub urban: IndicatorTable,
    pub lookup: CountryLookup,
    pub raw_flows: Vec<RawFlowRecord>,
}

/// Load all five sources named by the configuration.
///
/// The indicator sheets are independent and load on the rayon pool. Errors
/// are reported in a fixed order (GDP, education, urban, lookup, flows) so a
/// run with several broken inputs always names the same one.
pub fn load_inputs(config: &PipelineConfig) -> Result<PipelineInputs> {
    load_inputs_with_progress(config, &ProgressBar::hidden())
}

fn load_inputs_with_progress(config: &PipelineConfig, pb: &ProgressBar) -> Result<PipelineInputs> {
    pb.set_message("Loading indicator sheets");
    let ((gdp, education), urban) = rayon::join(
        || {
            rayon::join(
                || load_indicator_sheet(&config.gdp_path(), GDP_COLUMN),
                || load_indicator_sheet(&config.education_path(), EDUCATION_COLUMN),
            )
        },
        || load_indicator_sheet(&config.urban_path(), URBAN_COLUMN),
    );
    let gdp = gdp.stage(STAGE_GDP)?;
    let education = education.stage(STAGE_EDUCATION)?;
    let urban = urban.stage(STAGE_URBAN)?;
    pb.inc(1);

    pb.set_message("Loading country lookup");
    let lookup = load_country_lookup(&config.country_path()).stage(STAGE_LOOKUP)?;
    pb.inc(1);

    pb.set_message("Loading student flows");
    let raw_flows = load_raw_flows(&config.flows_path(), &config.flows_sheet).stage(STAGE_FLOWS)?;
    pb.inc(1);

    Ok(PipelineInputs {
        gdp,
        education,
        urban,
        lookup,
        raw_flows,
    })
}

/// Combine loaded inputs into the final table
#[must_use]
pub fn assemble(inputs: &PipelineInputs, config: &PipelineConfig) -> FlowTable {
    assemble_with_progress(inputs, config, &ProgressBar::hidden())
}

fn assemble_with_progress(
    inputs: &PipelineInputs,
    config: &PipelineConfig,
    pb: &ProgressBar,
) -> FlowTable {
    pb.set_message("Pivoting student flows");
    let start = Instant::now();
    let records = extract_migration(&inputs.raw_flows, &inputs.lookup, &config.flow_indicators);
    let wide = pivot_migration(&records);
    log_stage_complete("Migration pivot", inputs.raw_flows.len(), wide.len(), start.elapsed());
    pb.inc(1);

    pb.set_message("Joining indicators");
    let start = Instant::now();
    let merged = merge_indicators(&wide, &inputs.gdp, &inputs.education, &inputs.urban);
    let merged_rows = merged.len();
    let rows = finalize(merged, config.years);
    log_stage_complete("Merge and melt", merged_rows, rows.len(), start.elapsed());
    pb.inc(1);

    let table = FlowTable::new(rows);
    if table.is_empty() {
        log::warn!(
            "No student flows between {} and {}",
            config.years.start,
            config.years.end
        );
    }
    table
}

/// Run the whole pipeline
pub fn run_pipeline(config: &PipelineConfig) -> Result<FlowTable> {
    run_pipeline_with_progress(config, &ProgressBar::hidden())
}

/// Run the whole pipeline, advancing `pb` once per step (see [`PIPELINE_STEPS`])
pub fn run_pipeline_with_progress(config: &PipelineConfig, pb: &ProgressBar) -> Result<FlowTable> {
    config.validate()?;
    let start = Instant::now();

    let inputs = load_inputs_with_progress(config, pb)?;
    let table = assemble_with_progress(&inputs, config, pb);

    log::info!("Pipeline finished in {:?}: {}", start.elapsed(), table.summary());
    Ok(table)
}

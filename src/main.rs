use std::path::{Path, PathBuf};

use anyhow::Context;
use log::info;
use student_flows::PipelineConfig;
use student_flows::pipeline::{PIPELINE_STEPS, run_pipeline_with_progress};
use student_flows::utils::logging::{create_stage_progress_bar, finish_progress_bar};

/// Build the run configuration from the optional command line argument:
/// a `.json` file is a serialized config, anything else is the data directory.
fn config_from_args(arg: Option<String>) -> anyhow::Result<PipelineConfig> {
    match arg {
        Some(arg) if Path::new(&arg).extension().is_some_and(|ext| ext == "json") => {
            PipelineConfig::from_json_file(Path::new(&arg))
                .with_context(|| format!("Failed to load configuration from {arg}"))
        }
        Some(arg) => Ok(PipelineConfig::from_data_dir(PathBuf::from(arg))),
        None => Ok(PipelineConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = config_from_args(std::env::args().nth(1))?;
    info!("Reading sources from: {}", config.data_dir.display());

    let pb = create_stage_progress_bar(PIPELINE_STEPS, Some("Building student flow table"));
    let table = run_pipeline_with_progress(&config, &pb).context("Pipeline run failed")?;
    finish_progress_bar(&pb, Some("Done"));

    if let Some(path) = &config.parquet_output {
        table
            .write_parquet(path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    if let Some(path) = &config.json_output {
        table
            .write_json(path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    info!("Animation frames: {}", table.frames().join(", "));
    info!("{}", table.summary());
    Ok(())
}

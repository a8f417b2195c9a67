//! Error handling for the student flow pipeline.
//!
//! Load errors (missing files, unreadable workbooks, malformed headers) are
//! fatal. Cell-level coercion problems never surface here; they are absorbed
//! into the data model as missing values or dropped rows.

pub mod util;

use std::io;
use std::path::PathBuf;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;

/// Errors produced while loading sources or writing the merged table
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// A source file is missing or unreadable
    #[error("IO error for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The workbook could not be parsed or the worksheet does not exist
    #[error("Spreadsheet error in {}: {source}", .path.display())]
    Spreadsheet {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// The sheet does not have the expected header structure
    #[error("Schema error in {sheet}: {message}")]
    Schema { sheet: String, message: String },

    /// A load error tagged with the pipeline stage that raised it
    #[error("{stage} failed: {source}")]
    Stage {
        stage: &'static str,
        #[source]
        source: Box<FlowError>,
    },

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Arrow conversion error
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Parquet writer error
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    /// Serde to Arrow conversion error
    #[error("Record batch conversion error: {0}")]
    SerdeArrow(#[from] serde_arrow::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FlowError {
    /// Create a schema error for the given sheet
    pub fn schema(sheet: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Schema {
            sheet: sheet.into(),
            message: message.into(),
        }
    }

    /// Create an IO error for the given path
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Tag this error with the pipeline stage it occurred in
    #[must_use]
    pub fn in_stage(self, stage: &'static str) -> Self {
        Self::Stage {
            stage,
            source: Box::new(self),
        }
    }

    /// The pipeline stage this error was raised in, if known
    #[must_use]
    pub fn stage(&self) -> Option<&'static str> {
        match self {
            Self::Stage { stage, .. } => Some(stage),
            _ => None,
        }
    }
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, FlowError>;

/// Extension trait for attaching a stage name to results
pub trait StageExt<T> {
    /// Tag the error, if any, with the pipeline stage
    fn stage(self, stage: &'static str) -> Result<T>;
}

impl<T> StageExt<T> for Result<T> {
    fn stage(self, stage: &'static str) -> Result<T> {
        self.map_err(|e| e.in_stage(stage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_wrapping_keeps_message() {
        let err = FlowError::schema("GDP.xlsx", "header row not found").in_stage("gdp indicator");
        assert_eq!(err.stage(), Some("gdp indicator"));
        assert_eq!(
            err.to_string(),
            "gdp indicator failed: Schema error in GDP.xlsx: header row not found"
        );
    }

    #[test]
    fn test_io_error_names_path() {
        let err = FlowError::io(
            "data/GDP.xlsx",
            io::Error::new(io::ErrorKind::NotFound, "File not found"),
        );
        assert!(err.to_string().contains("data/GDP.xlsx"));
        assert_eq!(err.stage(), None);
    }
}

//! Configuration for the student flow pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FlowError, Result};
use crate::models::FlowType;

/// Default file names of the five sources inside the data directory
pub const GDP_FILE: &str = "GDP.xlsx";
pub const EDUCATION_FILE: &str = "Government expenditure on education as % of GDP (%).xlsx";
pub const URBAN_FILE: &str = "Urban population (% of total population).xlsx";
pub const COUNTRY_FILE: &str = "OPRI_COUNTRY.xlsx";
pub const FLOWS_FILE: &str = "inbound and outbound of international students.xlsx";

/// Worksheet holding the raw flow records
pub const FLOWS_SHEET: &str = "data";

/// UIS indicator ids for inbound and outbound internationally mobile students
pub const INBOUND_INDICATOR: i64 = 26637;
pub const OUTBOUND_INDICATOR: i64 = 26519;

/// The two flow indicators kept from the raw migration sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowIndicators {
    /// Indicator id labelled `Inbound`
    pub inbound: i64,
    /// Indicator id labelled `Outbound`
    pub outbound: i64,
}

impl Default for FlowIndicators {
    fn default() -> Self {
        Self {
            inbound: INBOUND_INDICATOR,
            outbound: OUTBOUND_INDICATOR,
        }
    }
}

impl FlowIndicators {
    /// Map an indicator id to its flow type; unrelated indicators map to `None`
    #[must_use]
    pub fn classify(&self, indicator_id: i64) -> Option<FlowType> {
        if indicator_id == self.inbound {
            Some(FlowType::Inbound)
        } else if indicator_id == self.outbound {
            Some(FlowType::Outbound)
        } else {
            None
        }
    }
}

/// Inclusive year window applied to the merged table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            start: 2000,
            end: 2022,
        }
    }
}

impl YearRange {
    #[must_use]
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Whether the year lies inside the window (both ends inclusive)
    #[must_use]
    pub const fn contains(&self, year: i32) -> bool {
        year >= self.start && year <= self.end
    }
}

/// Configuration for a pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Directory relative source paths are resolved against
    pub data_dir: PathBuf,
    /// GDP (current US$) indicator workbook
    pub gdp_file: PathBuf,
    /// Education expenditure (% of GDP) indicator workbook
    pub education_file: PathBuf,
    /// Urban population (% of total) indicator workbook
    pub urban_file: PathBuf,
    /// Country code to English name lookup workbook
    pub country_file: PathBuf,
    /// Raw student flow workbook
    pub flows_file: PathBuf,
    /// Worksheet inside the flow workbook
    pub flows_sheet: String,
    /// Indicator ids for the two flow types
    pub flow_indicators: FlowIndicators,
    /// Year window of the final table
    pub years: YearRange,
    /// Where to write the final table as Parquet
    pub parquet_output: Option<PathBuf>,
    /// Where to write the final table as JSON records
    pub json_output: Option<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            gdp_file: PathBuf::from(GDP_FILE),
            education_file: PathBuf::from(EDUCATION_FILE),
            urban_file: PathBuf::from(URBAN_FILE),
            country_file: PathBuf::from(COUNTRY_FILE),
            flows_file: PathBuf::from(FLOWS_FILE),
            flows_sheet: FLOWS_SHEET.to_string(),
            flow_indicators: FlowIndicators::default(),
            years: YearRange::default(),
            parquet_output: Some(PathBuf::from("student_flows.parquet")),
            json_output: Some(PathBuf::from("student_flows.json")),
        }
    }
}

impl PipelineConfig {
    /// Default configuration reading sources from `data_dir`
    pub fn from_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Load a configuration from a JSON file; missing fields take their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| FlowError::io(path, e))?;
        let config: Self = serde_json::from_str(&text).map_err(|e| {
            FlowError::Config(format!("Invalid configuration {}: {e}", path.display()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check internal consistency of the configuration
    pub fn validate(&self) -> Result<()> {
        if self.years.start > self.years.end {
            return Err(FlowError::Config(format!(
                "Year range start {} is after end {}",
                self.years.start, self.years.end
            )));
        }
        if self.flow_indicators.inbound == self.flow_indicators.outbound {
            return Err(FlowError::Config(format!(
                "Inbound and outbound indicators must differ (both {})",
                self.flow_indicators.inbound
            )));
        }
        if self.flows_sheet.trim().is_empty() {
            return Err(FlowError::Config("Flow worksheet name is empty".to_string()));
        }
        Ok(())
    }

    /// Set the year window
    #[must_use]
    pub fn with_years(mut self, start: i32, end: i32) -> Self {
        self.years = YearRange::new(start, end);
        self
    }

    /// Set the Parquet output path
    #[must_use]
    pub fn with_parquet_output(mut self, path: Option<PathBuf>) -> Self {
        self.parquet_output = path;
        self
    }

    /// Set the JSON output path
    #[must_use]
    pub fn with_json_output(mut self, path: Option<PathBuf>) -> Self {
        self.json_output = path;
        self
    }

    fn resolve(&self, file: &Path) -> PathBuf {
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.data_dir.join(file)
        }
    }

    #[must_use]
    pub fn gdp_path(&self) -> PathBuf {
        self.resolve(&self.gdp_file)
    }

    #[must_use]
    pub fn education_path(&self) -> PathBuf {
        self.resolve(&self.education_file)
    }

    #[must_use]
    pub fn urban_path(&self) -> PathBuf {
        self.resolve(&self.urban_file)
    }

    #[must_use]
    pub fn country_path(&self) -> PathBuf {
        self.resolve(&self.country_file)
    }

    #[must_use]
    pub fn flows_path(&self) -> PathBuf {
        self.resolve(&self.flows_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_indicators() {
        let flows = FlowIndicators::default();
        assert_eq!(flows.classify(26637), Some(FlowType::Inbound));
        assert_eq!(flows.classify(26519), Some(FlowType::Outbound));
        assert_eq!(flows.classify(999), None);
    }

    #[test]
    fn test_year_range_is_inclusive() {
        let years = YearRange::default();
        assert!(!years.contains(1999));
        assert!(years.contains(2000));
        assert!(years.contains(2022));
        assert!(!years.contains(2023));
    }

    #[test]
    fn test_paths_resolve_against_data_dir() {
        let config = PipelineConfig::from_data_dir("/srv/flows");
        assert_eq!(config.gdp_path(), PathBuf::from("/srv/flows/GDP.xlsx"));
        assert_eq!(
            config.flows_path(),
            PathBuf::from("/srv/flows/inbound and outbound of international students.xlsx")
        );
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let config: PipelineConfig =
            serde_json::from_str(r#"{"data_dir": "input", "years": {"start": 2005, "end": 2010}}"#)
                .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("input"));
        assert_eq!(config.years, YearRange::new(2005, 2010));
        assert_eq!(config.flows_sheet, "data");
        assert_eq!(config.flow_indicators, FlowIndicators::default());
    }

    #[test]
    fn test_validate_rejects_inverted_years() {
        let config = PipelineConfig::default().with_years(2022, 2000);
        assert!(matches!(config.validate(), Err(FlowError::Config(_))));
    }
}

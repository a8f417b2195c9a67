//! The final long-form table and its hand-off formats
//!
//! The map renderer is not part of this crate. It receives the table as an
//! Arrow `RecordBatch`, a Parquet file or a JSON array of records, together
//! with the ordered animation frames and the colour of each flow type.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use arrow::record_batch::RecordBatch;
use itertools::Itertools;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::error::util::ensure_parent_dir;
use crate::error::{FlowError, Result};
use crate::models::{FinalRow, FlowType};
use crate::schema::final_row_schema;

/// Pipeline output: one row per country, year and flow type
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowTable {
    rows: Vec<FinalRow>,
}

/// Counts describing a [`FlowTable`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowSummary {
    pub rows: usize,
    pub countries: usize,
    pub frames: usize,
    pub inbound: usize,
    pub outbound: usize,
}

impl fmt::Display for FlowSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rows ({} inbound, {} outbound) across {} countries and {} years",
            self.rows, self.inbound, self.outbound, self.countries, self.frames
        )
    }
}

impl FlowTable {
    #[must_use]
    pub fn new(rows: Vec<FinalRow>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[FinalRow] {
        &self.rows
    }

    #[must_use]
    pub fn into_rows(self) -> Vec<FinalRow> {
        self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct year labels in ascending order, one animation frame each
    #[must_use]
    pub fn frames(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.year.as_str())
            .unique()
            .sorted_unstable()
            .map(str::to_string)
            .collect()
    }

    /// Flow type labels and their marker colours
    #[must_use]
    pub fn color_map() -> [(&'static str, &'static str); 2] {
        FlowType::ALL.map(|flow_type| (flow_type.as_str(), flow_type.color()))
    }

    #[must_use]
    pub fn summary(&self) -> FlowSummary {
        let count = |flow_type: FlowType| self.rows.iter().filter(|r| r.flow_type == flow_type).count();
        FlowSummary {
            rows: self.rows.len(),
            countries: self.rows.iter().map(|row| row.country.as_str()).unique().count(),
            frames: self.rows.iter().map(|row| row.year.as_str()).unique().count(),
            inbound: count(FlowType::Inbound),
            outbound: count(FlowType::Outbound),
        }
    }

    /// Convert the table to an Arrow record batch with the final schema
    pub fn to_record_batch(&self) -> Result<RecordBatch> {
        let schema = final_row_schema();
        Ok(serde_arrow::to_record_batch(schema.fields(), &self.rows)?)
    }

    /// Write the table as a single-row-group Parquet file
    pub fn write_parquet(&self, path: &Path) -> Result<()> {
        let batch = self.to_record_batch()?;
        ensure_parent_dir(path)?;
        let file = File::create(path).map_err(|e| FlowError::io(path, e))?;

        let props = WriterProperties::builder()
            .set_compression(Compression::SNAPPY)
            .build();
        let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props))?;
        writer.write(&batch)?;
        writer.close()?;

        log::info!("Wrote {} rows to {}", batch.num_rows(), path.display());
        Ok(())
    }

    /// Write the table as a JSON array of records
    pub fn write_json(&self, path: &Path) -> Result<()> {
        ensure_parent_dir(path)?;
        let file = File::create(path).map_err(|e| FlowError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.rows)?;
        writer.flush().map_err(|e| FlowError::io(path, e))?;

        log::info!("Wrote {} rows to {}", self.rows.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{Array, Float64Array, StringArray};
    use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
    use std::path::PathBuf;

    fn row(country: &str, year: &str, flow_type: FlowType, students: f64) -> FinalRow {
        FinalRow {
            country: country.to_string(),
            year: year.to_string(),
            gdp_usd: None,
            edu_pct_gdp: Some(5.0),
            urban_pct: None,
            flow_type,
            students,
        }
    }

    fn sample() -> FlowTable {
        FlowTable::new(vec![
            row("Chad", "2012", FlowType::Inbound, 10.0),
            row("Chad", "2010", FlowType::Outbound, 20.0),
            row("Peru", "2012", FlowType::Inbound, 30.0),
        ])
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("student-flows-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_frames_sorted_unique() {
        assert_eq!(sample().frames(), vec!["2010".to_string(), "2012".to_string()]);
        assert!(FlowTable::default().frames().is_empty());
    }

    #[test]
    fn test_summary() {
        let summary = sample().summary();
        assert_eq!(
            summary,
            FlowSummary {
                rows: 3,
                countries: 2,
                frames: 2,
                inbound: 2,
                outbound: 1,
            }
        );
        assert_eq!(
            summary.to_string(),
            "3 rows (2 inbound, 1 outbound) across 2 countries and 2 years"
        );
    }

    #[test]
    fn test_color_map() {
        assert_eq!(FlowTable::color_map(), [("Inbound", "blue"), ("Outbound", "red")]);
    }

    #[test]
    fn test_record_batch_columns() {
        let batch = sample().to_record_batch().unwrap();
        assert_eq!(batch.num_rows(), 3);
        assert_eq!(batch.num_columns(), 7);

        let types = batch
            .column_by_name("Type")
            .unwrap()
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap();
        assert_eq!(types.value(1), "Outbound");

        let gdp = batch
            .column_by_name("GDP_USD")
            .unwrap()
            .as_any()
            .downcast_ref::<Float64Array>()
            .unwrap();
        assert!(gdp.is_null(0));
    }

    #[test]
    fn test_record_batch_matches_final_schema() {
        let batch = sample().to_record_batch().unwrap();
        let names: Vec<&str> = batch.schema_ref().fields().iter().map(|f| f.name().as_str()).collect();
        assert_eq!(names, crate::schema::FINAL_COLUMNS);
        assert_eq!(batch.schema().as_ref(), &final_row_schema());
    }

    #[test]
    fn test_empty_table_converts() {
        let batch = FlowTable::default().to_record_batch().unwrap();
        assert_eq!(batch.num_rows(), 0);
        assert_eq!(batch.num_columns(), 7);
    }

    #[test]
    fn test_parquet_round_trip() {
        let path = temp_path("flows.parquet");
        sample().write_parquet(&path).unwrap();

        let file = File::open(&path).unwrap();
        let reader = ParquetRecordBatchReaderBuilder::try_new(file).unwrap().build().unwrap();
        let batches: Vec<RecordBatch> = reader.collect::<std::result::Result<_, _>>().unwrap();
        let rows: usize = batches.iter().map(RecordBatch::num_rows).sum();
        assert_eq!(rows, 3);

        let countries = batches[0]
            .column_by_name("Country")
            .unwrap()
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap();
        assert_eq!(countries.value(2), "Peru");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_json_output() {
        let path = temp_path("flows.json");
        sample().write_json(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let rows: Vec<FinalRow> = serde_json::from_str(&text).unwrap();
        assert_eq!(rows, sample().into_rows());

        std::fs::remove_file(&path).ok();
    }
}

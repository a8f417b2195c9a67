//! Raw UIS student flow sheet

use std::path::Path;
use std::time::Instant;

use calamine::Data;

use crate::error::Result;
use crate::models::RawFlowRecord;
use crate::schema::{FLOW_COLUMNS, locate_columns};
use crate::sheet::{SheetGrid, cell_f64, cell_i64, cell_text, cell_year, read_named_sheet};
use crate::utils::logging::{log_load_complete, log_load_start};

/// Load every row of the flow worksheet `sheet_name`
pub fn load_raw_flows(path: &Path, sheet_name: &str) -> Result<Vec<RawFlowRecord>> {
    let start = Instant::now();
    log_load_start("student flows", path);

    let grid = read_named_sheet(path, sheet_name)?;
    let records = raw_flows_from_grid(&grid)?;

    log_load_complete("student flows", path, records.len(), start.elapsed());
    Ok(records)
}

/// Read the `indicatorId`, `geoUnit`, `year` and `value` columns of every
/// data row. Cells that do not coerce are kept as `None` for the extractor
/// to filter.
pub fn raw_flows_from_grid(grid: &SheetGrid) -> Result<Vec<RawFlowRecord>> {
    let [indicator_col, geo_col, year_col, value_col] = locate_columns(grid, 0, FLOW_COLUMNS)?;

    Ok(grid
        .rows_from(1)
        .filter(|row| row.iter().any(|cell| *cell != Data::Empty))
        .map(|row| RawFlowRecord {
            indicator_id: row.get(indicator_col).and_then(cell_i64),
            geo_unit: row.get(geo_col).and_then(cell_text),
            year: row.get(year_col).and_then(cell_year),
            value: row.get(value_col).and_then(cell_f64),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Data {
        Data::String(s.to_string())
    }

    #[test]
    fn test_raw_flows_from_grid() {
        let grid = SheetGrid::new(
            "flows.xlsx [data]",
            vec![
                vec![text("indicatorId"), text("geoUnit"), text("year"), text("value"), text("magnitude")],
                vec![Data::Float(26637.0), text("TCD"), Data::Float(2010.0), Data::Float(120.0)],
                vec![Data::Int(26519), text("DEU"), text("2011"), text("n/a")],
                vec![],
            ],
        );

        let records = raw_flows_from_grid(&grid).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0],
            RawFlowRecord {
                indicator_id: Some(26637),
                geo_unit: Some("TCD".to_string()),
                year: Some(2010),
                value: Some(120.0),
            }
        );
        assert_eq!(records[1].year, Some(2011));
        assert_eq!(records[1].value, None);
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let grid = SheetGrid::new(
            "flows.xlsx [data]",
            vec![vec![text("indicatorId"), text("geoUnit"), text("year")]],
        );
        let err = raw_flows_from_grid(&grid).unwrap_err();
        assert!(err.to_string().contains("'value'"));
    }
}

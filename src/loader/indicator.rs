//! World Bank indicator sheets
//!
//! The sheets come straight from the World Bank download: four rows of
//! metadata, a header row with `Country Name`, `Country Code`, a couple of
//! indicator columns and one column per year, then one row per country.

use std::path::Path;
use std::time::Instant;

use crate::error::Result;
use crate::models::{IndicatorRecord, IndicatorTable};
use crate::schema::{INDICATOR_HEADER_ROW, validate_indicator_header};
use crate::sheet::{SheetGrid, cell_f64, cell_text, read_first_sheet};
use crate::utils::logging::{log_load_complete, log_load_start};

/// Load the first worksheet of an indicator workbook into long form
///
/// # Arguments
/// * `path` - Workbook path
/// * `value_name` - Column name the values take in the merged table
pub fn load_indicator_sheet(path: &Path, value_name: &str) -> Result<IndicatorTable> {
    let start = Instant::now();
    let source = format!("{value_name} indicator");
    log_load_start(&source, path);

    let grid = read_first_sheet(path)?;
    let table = reshape_indicator_grid(&grid, value_name)?;

    log_load_complete(&source, path, table.len(), start.elapsed());
    Ok(table)
}

/// Reshape a wide indicator sheet (one column per year) into one record per
/// country and year.
///
/// Header labels that do not parse as a year drop only their own column.
/// Values that are not numbers become `None` and the record is kept. Rows
/// without a country name or code are skipped.
pub fn reshape_indicator_grid(grid: &SheetGrid, value_name: &str) -> Result<IndicatorTable> {
    let layout = validate_indicator_header(grid)?;

    let data_rows = grid.height().saturating_sub(INDICATOR_HEADER_ROW + 1);
    let mut records = Vec::with_capacity(data_rows * layout.year_columns.len());
    let mut skipped_rows = 0usize;

    for row in grid.rows_from(INDICATOR_HEADER_ROW + 1) {
        let country = row.get(layout.country_col).and_then(cell_text);
        let code = row.get(layout.code_col).and_then(cell_text);
        let (Some(country), Some(country_code)) = (country, code) else {
            skipped_rows += 1;
            continue;
        };

        records.extend(layout.year_columns.iter().map(|&(col, year)| IndicatorRecord {
            country: country.clone(),
            country_code: country_code.clone(),
            year,
            value: row.get(col).and_then(cell_f64),
        }));
    }

    if skipped_rows > 0 {
        log::debug!(
            "{}: skipped {skipped_rows} rows without country name or code",
            grid.name()
        );
    }

    Ok(IndicatorTable::new(value_name, records))
}

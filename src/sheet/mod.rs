//! Spreadsheet access
//!
//! Workbooks are read eagerly with calamine into a [`SheetGrid`], a plain
//! row-major copy of the worksheet addressed by absolute sheet coordinates.
//! Loaders work on grids only, so they can be exercised without files.

pub mod cell;

use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};

use crate::error::util::ensure_readable_file;
use crate::error::{FlowError, Result};

pub use cell::{cell_f64, cell_i64, cell_text, cell_year};

/// An in-memory worksheet
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SheetGrid {
    /// Human readable origin, used in error messages
    name: String,
    rows: Vec<Vec<Data>>,
}

impl SheetGrid {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<Data>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Copy a calamine range, padding so that row and column indices match
    /// the worksheet even when the used range does not start at `A1`
    pub fn from_range(name: impl Into<String>, range: &Range<Data>) -> Self {
        let (first_row, first_col) = range.start().unwrap_or((0, 0));
        let mut rows: Vec<Vec<Data>> = vec![Vec::new(); first_row as usize];
        rows.extend(range.rows().map(|row| {
            let mut cells = vec![Data::Empty; first_col as usize];
            cells.extend_from_slice(row);
            cells
        }));
        Self::new(name, rows)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[Data]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Rows from `start` to the end of the sheet
    pub fn rows_from(&self, start: usize) -> impl Iterator<Item = &[Data]> {
        self.rows.iter().skip(start).map(Vec::as_slice)
    }

    /// Cell at `(row, col)`; cells past the end of a short row read as empty
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> &Data {
        static EMPTY: Data = Data::Empty;
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .unwrap_or(&EMPTY)
    }
}

/// Read the first worksheet of a workbook
pub fn read_first_sheet(path: &Path) -> Result<SheetGrid> {
    read_sheet(path, |names| {
        names
            .first()
            .cloned()
            .ok_or_else(|| "Workbook has no worksheets".to_string())
    })
}

/// Read a worksheet by name
pub fn read_named_sheet(path: &Path, sheet_name: &str) -> Result<SheetGrid> {
    read_sheet(path, |names| {
        if names.iter().any(|name| name == sheet_name) {
            Ok(sheet_name.to_string())
        } else {
            Err(format!(
                "Worksheet '{sheet_name}' not found (available: {})",
                names.join(", ")
            ))
        }
    })
}

/// Open `path` and copy the worksheet chosen by `pick` from the workbook's
/// sheet names. A pick failure is reported as a schema error on the file.
fn read_sheet<F>(path: &Path, pick: F) -> Result<SheetGrid>
where
    F: FnOnce(&[String]) -> std::result::Result<String, String>,
{
    ensure_readable_file(path, "reading spreadsheet")?;
    let mut workbook = open_workbook_auto(path).map_err(|source| FlowError::Spreadsheet {
        path: path.to_path_buf(),
        source,
    })?;

    let sheet_name = pick(&workbook.sheet_names())
        .map_err(|message| FlowError::schema(path.display().to_string(), message))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|source| FlowError::Spreadsheet {
            path: path.to_path_buf(),
            source,
        })?;

    log::debug!(
        "Read worksheet '{}' of {} ({} rows)",
        sheet_name,
        path.display(),
        range.height()
    );
    Ok(SheetGrid::from_range(
        format!("{} [{}]", path.display(), sheet_name),
        &range,
    ))
}

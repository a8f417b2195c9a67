//! Header validation for the source sheets

use calamine::Data;

use crate::error::{FlowError, Result};
use crate::sheet::{SheetGrid, cell_text, cell_year};

/// Row holding the column labels in World Bank indicator sheets
pub const INDICATOR_HEADER_ROW: usize = 4;

/// Code and name columns of the country lookup sheet
pub const LOOKUP_COLUMNS: [&str; 2] = ["COUNTRY_ID", "COUNTRY_NAME_EN"];

/// Columns read from the raw flow sheet
pub const FLOW_COLUMNS: [&str; 4] = ["indicatorId", "geoUnit", "year", "value"];

/// A problem found while validating a header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaIssue {
    /// Zero-based column, when the issue concerns a single column
    pub column: Option<usize>,
    pub description: String,
}

/// Result of checking a sheet header against the expected layout
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderReport {
    pub issues: Vec<SchemaIssue>,
}

impl HeaderReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    fn push(&mut self, column: Option<usize>, description: impl Into<String>) {
        self.issues.push(SchemaIssue {
            column,
            description: description.into(),
        });
    }

    /// Turn the collected issues into a schema error for `sheet`
    pub fn into_result(self, sheet: &str) -> Result<()> {
        if self.is_valid() {
            return Ok(());
        }
        let message = self
            .issues
            .iter()
            .map(|issue| match issue.column {
                Some(col) => format!("column {col}: {}", issue.description),
                None => issue.description.clone(),
            })
            .collect::<Vec<_>>()
            .join("; ");
        Err(FlowError::schema(sheet, message))
    }
}

/// Positions of the country columns and the year axis of an indicator sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorLayout {
    pub country_col: usize,
    pub code_col: usize,
    /// `(column, year)` for every header label that parses as a year
    pub year_columns: Vec<(usize, i32)>,
}

/// Validate the header row of a World Bank style indicator sheet.
///
/// The header must sit at [`INDICATOR_HEADER_ROW`], have at least three
/// columns (name, code, one period) and at least one label that parses as a
/// year. Labels that are not years (e.g. a trailing notes column) are skipped;
/// their cells never produce records.
pub fn validate_indicator_header(grid: &SheetGrid) -> Result<IndicatorLayout> {
    let Some(header) = grid.row(INDICATOR_HEADER_ROW) else {
        return Err(FlowError::schema(
            grid.name(),
            format!(
                "Header row {INDICATOR_HEADER_ROW} not found, sheet has only {} rows",
                grid.height()
            ),
        ));
    };

    let mut report = HeaderReport::default();

    let width = header.iter().rposition(|cell| *cell != Data::Empty).map_or(0, |i| i + 1);
    if width < 3 {
        report.push(
            None,
            format!("Header row has {width} columns, expected country name, country code and year columns"),
        );
    }

    for (col, label) in [(0, "country name"), (1, "country code")] {
        if header.get(col).and_then(cell_text).is_none() {
            report.push(Some(col), format!("Missing {label} header"));
        }
    }

    let year_columns: Vec<(usize, i32)> = header
        .iter()
        .enumerate()
        .skip(2)
        .filter_map(|(col, cell)| cell_year(cell).map(|year| (col, year)))
        .collect();

    if width >= 3 && year_columns.is_empty() {
        report.push(None, "No header label parses as a year");
    }

    report.into_result(grid.name())?;

    let skipped = width.saturating_sub(2).saturating_sub(year_columns.len());
    if skipped > 0 {
        log::debug!("{}: {skipped} header labels are not years", grid.name());
    }

    Ok(IndicatorLayout {
        country_col: 0,
        code_col: 1,
        year_columns,
    })
}

/// Find the index of each required column label in `header_row`.
///
/// Labels are matched exactly after trimming. All missing labels are reported
/// together.
pub fn locate_columns<const N: usize>(
    grid: &SheetGrid,
    header_row: usize,
    required: [&str; N],
) -> Result<[usize; N]> {
    let header: Vec<Option<String>> = grid
        .row(header_row)
        .map(|cells| cells.iter().map(cell_text).collect())
        .unwrap_or_default();

    let mut report = HeaderReport::default();
    let mut found = [0usize; N];
    for (slot, name) in found.iter_mut().zip(required) {
        match header.iter().position(|label| label.as_deref() == Some(name)) {
            Some(idx) => *slot = idx,
            None => report.push(None, format!("Required column '{name}' not found")),
        }
    }
    report.into_result(grid.name())?;
    Ok(found)
}

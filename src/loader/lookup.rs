//! Country code lookup sheet (UIS `OPRI_COUNTRY`)

use std::path::Path;
use std::time::Instant;

use crate::error::Result;
use crate::models::CountryLookup;
use crate::schema::{LOOKUP_COLUMNS, locate_columns};
use crate::sheet::{SheetGrid, cell_text, read_first_sheet};
use crate::utils::logging::{log_load_complete, log_load_start};

/// Load the country lookup from the first worksheet of `path`
pub fn load_country_lookup(path: &Path) -> Result<CountryLookup> {
    let start = Instant::now();
    log_load_start("country lookup", path);

    let grid = read_first_sheet(path)?;
    let lookup = lookup_from_grid(&grid)?;

    log_load_complete("country lookup", path, lookup.len(), start.elapsed());
    Ok(lookup)
}

/// Build the lookup from a sheet with a `COUNTRY_ID` / `COUNTRY_NAME_EN` header.
///
/// Duplicate codes resolve to the last name in sheet order.
pub fn lookup_from_grid(grid: &SheetGrid) -> Result<CountryLookup> {
    let [code_col, name_col] = locate_columns(grid, 0, LOOKUP_COLUMNS)?;

    let lookup: CountryLookup = grid
        .rows_from(1)
        .filter_map(|row| {
            let code = row.get(code_col).and_then(cell_text)?;
            let name = row.get(name_col).and_then(cell_text)?;
            Some((code, name))
        })
        .collect();

    if lookup.overridden() > 0 {
        log::debug!(
            "{}: {} duplicate country codes, later names kept",
            grid.name(),
            lookup.overridden()
        );
    }
    Ok(lookup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::Data;

    fn text(s: &str) -> Data {
        Data::String(s.to_string())
    }

    #[test]
    fn test_lookup_from_grid() {
        let grid = SheetGrid::new(
            "OPRI_COUNTRY.xlsx",
            vec![
                vec![text("COUNTRY_ID"), text("COUNTRY_NAME_EN"), text("COUNTRY_NAME_FR")],
                vec![text("TCD"), text("Chad"), text("Tchad")],
                vec![text("DEU"), text("Germany"), text("Allemagne")],
                vec![text("ZZZ"), Data::Empty],
                vec![text("TCD"), text("Republic of Chad")],
            ],
        );

        let lookup = lookup_from_grid(&grid).unwrap();
        assert_eq!(lookup.len(), 2);
        assert_eq!(lookup.resolve("DEU"), Some("Germany"));
        assert_eq!(lookup.resolve("TCD"), Some("Republic of Chad"));
        assert_eq!(lookup.resolve("ZZZ"), None);
    }

    #[test]
    fn test_missing_name_column_is_fatal() {
        let grid = SheetGrid::new("OPRI_COUNTRY.xlsx", vec![vec![text("COUNTRY_ID"), text("NAME")]]);
        assert!(lookup_from_grid(&grid).is_err());
    }
}

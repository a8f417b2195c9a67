//! In-memory sheet fixtures shaped like the real source workbooks

#![allow(dead_code)]

use calamine::Data;
use student_flows::loader::{lookup_from_grid, raw_flows_from_grid, reshape_indicator_grid};
use student_flows::pipeline::{EDUCATION_COLUMN, GDP_COLUMN, URBAN_COLUMN};
use student_flows::{PipelineInputs, SheetGrid};

pub const INBOUND: f64 = 26637.0;
pub const OUTBOUND: f64 = 26519.0;

#[must_use]
pub fn text(s: &str) -> Data {
    Data::String(s.to_string())
}

/// World Bank style sheet: four metadata rows, header, one row per country
#[must_use]
pub fn indicator_grid(name: &str, years: &[i32], rows: &[(&str, &str, &[Option<f64>])]) -> SheetGrid {
    let mut header = vec![
        text("Country Name"),
        text("Country Code"),
        text("Indicator Name"),
        text("Indicator Code"),
    ];
    header.extend(years.iter().map(|year| text(&year.to_string())));

    let mut grid = vec![
        vec![text("Data Source"), text("World Development Indicators")],
        vec![],
        vec![text("Last Updated Date"), text("2024-06-28")],
        vec![],
        header,
    ];
    for (country, code, values) in rows {
        let mut row = vec![text(country), text(code), text(name), text("XX.YY")];
        row.extend(values.iter().map(|v| v.map_or(Data::Empty, Data::Float)));
        grid.push(row);
    }
    SheetGrid::new(name, grid)
}

/// `OPRI_COUNTRY` style lookup sheet
#[must_use]
pub fn lookup_grid(pairs: &[(&str, &str)]) -> SheetGrid {
    let mut grid = vec![vec![text("COUNTRY_ID"), text("COUNTRY_NAME_EN")]];
    grid.extend(pairs.iter().map(|(code, name)| vec![text(code), text(name)]));
    SheetGrid::new("OPRI_COUNTRY.xlsx", grid)
}

/// `data` worksheet of the flow workbook: (indicatorId, geoUnit, year, value)
#[must_use]
pub fn flows_grid(rows: &[(f64, &str, f64, f64)]) -> SheetGrid {
    let mut grid = vec![vec![
        text("indicatorId"),
        text("geoUnit"),
        text("year"),
        text("value"),
        text("magnitude"),
        text("qualifier"),
    ]];
    grid.extend(rows.iter().map(|&(indicator, geo, year, value)| {
        vec![
            Data::Float(indicator),
            text(geo),
            Data::Float(year),
            Data::Float(value),
            Data::Empty,
            Data::Empty,
        ]
    }));
    SheetGrid::new("flows.xlsx [data]", grid)
}

/// Reshape fixture grids through the real loaders
pub fn inputs(
    gdp: &SheetGrid,
    education: &SheetGrid,
    urban: &SheetGrid,
    lookup: &SheetGrid,
    flows: &SheetGrid,
) -> student_flows::Result<PipelineInputs> {
    Ok(PipelineInputs {
        gdp: reshape_indicator_grid(gdp, GDP_COLUMN)?,
        education: reshape_indicator_grid(education, EDUCATION_COLUMN)?,
        urban: reshape_indicator_grid(urban, URBAN_COLUMN)?,
        lookup: lookup_from_grid(lookup)?,
        raw_flows: raw_flows_from_grid(flows)?,
    })
}

/// Indicator sheet with no country rows
#[must_use]
pub fn empty_indicator(name: &str) -> SheetGrid {
    indicator_grid(name, &[2010], &[])
}

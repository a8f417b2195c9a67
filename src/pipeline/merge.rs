//! Indicator joins, year filter and the final melt

use crate::config::YearRange;
use crate::models::{FinalRow, FlowType, IndicatorTable, MergedRow, MigrationWide};

/// Left-join the migration rows with the three indicator tables on
/// `(Country, Year)`.
///
/// Every migration row is kept. A missing indicator observation leaves the
/// field `None`. Each key matches at most one indicator record: when a table
/// repeats a `(Country, Year)`, its first record is joined and the rest are
/// ignored, so the output has exactly one row per migration row.
#[must_use]
pub fn merge_indicators(
    wide: &[MigrationWide],
    gdp: &IndicatorTable,
    education: &IndicatorTable,
    urban: &IndicatorTable,
) -> Vec<MergedRow> {
    let gdp_index = gdp.index();
    let education_index = education.index();
    let urban_index = urban.index();

    wide.iter()
        .map(|row| {
            let key = (row.country.as_str(), row.year);
            MergedRow {
                country: row.country.clone(),
                year: row.year,
                inbound: row.inbound,
                outbound: row.outbound,
                gdp_usd: gdp_index.get(&key).copied().flatten(),
                edu_pct_gdp: education_index.get(&key).copied().flatten(),
                urban_pct: urban_index.get(&key).copied().flatten(),
            }
        })
        .collect()
}

/// Keep merged rows whose year lies in `years`
#[must_use]
pub fn filter_years(merged: Vec<MergedRow>, years: YearRange) -> Vec<MergedRow> {
    merged.into_iter().filter(|row| years.contains(row.year)).collect()
}

/// Unpivot the inbound and outbound columns into `(Type, Students)` rows.
///
/// All inbound rows come first, then all outbound rows, each block in merged
/// row order. Missing flows produce no row, so a country-year with neither
/// flow disappears.
#[must_use]
pub fn melt_flows(merged: &[MergedRow]) -> Vec<FinalRow> {
    FlowType::ALL
        .into_iter()
        .flat_map(|flow_type| {
            merged.iter().filter_map(move |row| {
                let students = match flow_type {
                    FlowType::Inbound => row.inbound,
                    FlowType::Outbound => row.outbound,
                }?;
                Some(FinalRow::from_merged(row, flow_type, students))
            })
        })
        .collect()
}

/// Restrict to the year window and melt to the final long form
#[must_use]
pub fn finalize(merged: Vec<MergedRow>, years: YearRange) -> Vec<FinalRow> {
    melt_flows(&filter_years(merged, years))
}

//! Student flow extraction and pivot

use rustc_hash::FxHashMap;

use crate::config::FlowIndicators;
use crate::models::{CountryLookup, MigrationRecord, MigrationWide, RawFlowRecord};

/// Keep the recognised flow indicators and resolve their country names.
///
/// Rows are dropped when the indicator is not one of the two flow
/// indicators, when year or value is missing, or when the geographic unit has
/// no entry in the lookup (regional aggregates, territories). None of these
/// are errors. Input order is preserved.
#[must_use]
pub fn extract_migration(
    raw: &[RawFlowRecord],
    lookup: &CountryLookup,
    flows: &FlowIndicators,
) -> Vec<MigrationRecord> {
    let mut other_indicator = 0usize;
    let mut incomplete = 0usize;
    let mut unresolved = 0usize;

    let records: Vec<MigrationRecord> = raw
        .iter()
        .filter_map(|row| {
            let Some(flow_type) = row.indicator_id.and_then(|id| flows.classify(id)) else {
                other_indicator += 1;
                return None;
            };
            let (Some(year), Some(students)) = (row.year, row.value) else {
                incomplete += 1;
                return None;
            };
            let resolved = row
                .geo_unit
                .as_deref()
                .and_then(|code| lookup.resolve(code).map(|country| (code, country)));
            let Some((code, country)) = resolved else {
                unresolved += 1;
                return None;
            };
            Some(MigrationRecord {
                country_code: code.to_string(),
                country: country.to_string(),
                year,
                students,
                flow_type,
            })
        })
        .collect();

    log::debug!(
        "Flow extraction kept {} of {} rows ({other_indicator} other indicators, \
         {incomplete} without year or value, {unresolved} unknown country codes)",
        records.len(),
        raw.len()
    );
    records
}

/// Spread flow types into `inbound`/`outbound` columns, one row per country
/// and year.
///
/// If a country, year and flow type occur more than once, the first record in
/// input order wins. Rows come out sorted by country, then year.
#[must_use]
pub fn pivot_migration(records: &[MigrationRecord]) -> Vec<MigrationWide> {
    let mut positions: FxHashMap<(&str, i32), usize> = FxHashMap::default();
    let mut wide: Vec<MigrationWide> = Vec::new();
    let mut duplicates = 0usize;

    for record in records {
        let idx = *positions
            .entry((record.country.as_str(), record.year))
            .or_insert_with(|| {
                wide.push(MigrationWide::new(record.country.clone(), record.year));
                wide.len() - 1
            });
        if !wide[idx].set_first(record.flow_type, record.students) {
            duplicates += 1;
        }
    }

    if duplicates > 0 {
        log::debug!("Pivot ignored {duplicates} repeated country/year/type records");
    }

    wide.sort_by(|a, b| a.country.cmp(&b.country).then(a.year.cmp(&b.year)));
    wide
}

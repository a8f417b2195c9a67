//! Long-form World Bank indicator records

use rustc_hash::FxHashMap;

/// One country-year observation of an indicator
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorRecord {
    /// Country display name
    pub country: String,
    /// ISO3 country code
    pub country_code: String,
    /// Observation year
    pub year: i32,
    /// Indicator value, `None` when the sheet has no usable number
    pub value: Option<f64>,
}

/// All records of one indicator, tagged with the output column name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndicatorTable {
    /// Column name the value takes in the merged table (e.g. `GDP_USD`)
    pub name: String,
    pub records: Vec<IndicatorRecord>,
}

impl IndicatorTable {
    pub fn new(name: impl Into<String>, records: Vec<IndicatorRecord>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }

    /// An indicator with no observations
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Build a `(Country, Year)` lookup of the values.
    ///
    /// When a key occurs more than once the first record in sheet order wins.
    #[must_use]
    pub fn index(&self) -> FxHashMap<(&str, i32), Option<f64>> {
        let mut index = FxHashMap::default();
        for record in &self.records {
            index
                .entry((record.country.as_str(), record.year))
                .or_insert(record.value);
        }
        index
    }
}

//! Arrow schema of the final long-form table

use std::sync::Arc;

use arrow::datatypes::{DataType, Field, FieldRef, Schema};

/// Column names of the final table, in output order
pub const FINAL_COLUMNS: [&str; 7] = [
    "Country",
    "Year",
    "GDP_USD",
    "Edu_pct_GDP",
    "Urban_pct",
    "Type",
    "Students",
];

/// Fields of the final table.
///
/// Indicator columns are nullable; country, year label, flow type and the
/// student count are always present.
#[must_use]
pub fn final_row_fields() -> Vec<FieldRef> {
    let types = [
        (DataType::Utf8, false),
        (DataType::Utf8, false),
        (DataType::Float64, true),
        (DataType::Float64, true),
        (DataType::Float64, true),
        (DataType::Utf8, false),
        (DataType::Float64, false),
    ];
    FINAL_COLUMNS
        .into_iter()
        .zip(types)
        .map(|(name, (data_type, nullable))| Arc::new(Field::new(name, data_type, nullable)))
        .collect()
}

/// Schema of the final table
#[must_use]
pub fn final_row_schema() -> Schema {
    Schema::new(final_row_fields())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_column_order() {
        let schema = final_row_schema();
        let names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
        assert_eq!(names, FINAL_COLUMNS);
        assert!(schema.field_with_name("GDP_USD").unwrap().is_nullable());
        assert!(!schema.field_with_name("Students").unwrap().is_nullable());
    }
}

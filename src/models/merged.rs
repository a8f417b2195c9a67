//! Joined and final output rows

use serde::{Deserialize, Serialize};

use super::migration::FlowType;

/// A migration row with the three indicators attached
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRow {
    pub country: String,
    pub year: i32,
    pub inbound: Option<f64>,
    pub outbound: Option<f64>,
    pub gdp_usd: Option<f64>,
    pub edu_pct_gdp: Option<f64>,
    pub urban_pct: Option<f64>,
}

/// One point on the animated map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalRow {
    #[serde(rename = "Country")]
    pub country: String,
    /// Animation frame key; a label, not a number
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "GDP_USD")]
    pub gdp_usd: Option<f64>,
    #[serde(rename = "Edu_pct_GDP")]
    pub edu_pct_gdp: Option<f64>,
    #[serde(rename = "Urban_pct")]
    pub urban_pct: Option<f64>,
    #[serde(rename = "Type")]
    pub flow_type: FlowType,
    #[serde(rename = "Students")]
    pub students: f64,
}

impl FinalRow {
    /// Build the output row for one flow of a merged row
    #[must_use]
    pub fn from_merged(row: &MergedRow, flow_type: FlowType, students: f64) -> Self {
        Self {
            country: row.country.clone(),
            year: row.year.to_string(),
            gdp_usd: row.gdp_usd,
            edu_pct_gdp: row.edu_pct_gdp,
            urban_pct: row.urban_pct,
            flow_type,
            students,
        }
    }
}

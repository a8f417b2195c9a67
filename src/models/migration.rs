//! International student flow records

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Direction of an international student flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FlowType {
    /// Students coming into the country
    Inbound,
    /// Students leaving the country to study abroad
    Outbound,
}

impl FlowType {
    /// Both flow types in output order
    pub const ALL: [Self; 2] = [Self::Inbound, Self::Outbound];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inbound => "Inbound",
            Self::Outbound => "Outbound",
        }
    }

    /// Marker colour used by the map for this flow type
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Inbound => "blue",
            Self::Outbound => "red",
        }
    }
}

impl fmt::Display for FlowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlowType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Inbound" => Ok(Self::Inbound),
            "Outbound" => Ok(Self::Outbound),
            other => Err(format!("Unknown flow type: {other}")),
        }
    }
}

// Serialized as the plain label so it lands in a Utf8 column
impl Serialize for FlowType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FlowType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

/// One row of the raw UIS flow sheet after cell coercion
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawFlowRecord {
    pub indicator_id: Option<i64>,
    pub geo_unit: Option<String>,
    pub year: Option<i32>,
    pub value: Option<f64>,
}

/// A recognised flow observation resolved to a country name
#[derive(Debug, Clone, PartialEq)]
pub struct MigrationRecord {
    pub country_code: String,
    pub country: String,
    pub year: i32,
    pub students: f64,
    pub flow_type: FlowType,
}

/// Inbound and outbound students for one country-year
#[derive(Debug, Clone, PartialEq)]
pub struct MigrationWide {
    pub country: String,
    pub year: i32,
    pub inbound: Option<f64>,
    pub outbound: Option<f64>,
}

impl MigrationWide {
    pub fn new(country: impl Into<String>, year: i32) -> Self {
        Self {
            country: country.into(),
            year,
            inbound: None,
            outbound: None,
        }
    }

    #[must_use]
    pub const fn get(&self, flow_type: FlowType) -> Option<f64> {
        match flow_type {
            FlowType::Inbound => self.inbound,
            FlowType::Outbound => self.outbound,
        }
    }

    /// Set the value for a flow type unless one is already present.
    ///
    /// Returns `false` when an earlier value was kept.
    pub fn set_first(&mut self, flow_type: FlowType, students: f64) -> bool {
        let slot = match flow_type {
            FlowType::Inbound => &mut self.inbound,
            FlowType::Outbound => &mut self.outbound,
        };
        if slot.is_some() {
            return false;
        }
        *slot = Some(students);
        true
    }

    /// Present `(Type, Students)` pairs, inbound first
    pub fn flows(&self) -> impl Iterator<Item = (FlowType, f64)> + '_ {
        FlowType::ALL
            .into_iter()
            .filter_map(|flow_type| self.get(flow_type).map(|students| (flow_type, students)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_type_labels() {
        assert_eq!(FlowType::Inbound.to_string(), "Inbound");
        assert_eq!("Outbound".parse::<FlowType>(), Ok(FlowType::Outbound));
        assert!("Sideways".parse::<FlowType>().is_err());
        assert_eq!(serde_json::to_string(&FlowType::Inbound).unwrap(), "\"Inbound\"");
        assert_eq!(FlowType::Outbound.color(), "red");
    }

    #[test]
    fn test_set_first_keeps_earlier_value() {
        let mut wide = MigrationWide::new("A", 2015);
        assert!(wide.set_first(FlowType::Inbound, 50.0));
        assert!(!wide.set_first(FlowType::Inbound, 70.0));
        assert_eq!(wide.inbound, Some(50.0));
        assert_eq!(wide.outbound, None);
    }

    #[test]
    fn test_flows_skips_missing() {
        let mut wide = MigrationWide::new("A", 2015);
        assert_eq!(wide.flows().count(), 0);
        wide.set_first(FlowType::Outbound, 3.0);
        assert_eq!(wide.flows().collect::<Vec<_>>(), vec![(FlowType::Outbound, 3.0)]);
        wide.set_first(FlowType::Inbound, 1.0);
        assert_eq!(
            wide.flows().collect::<Vec<_>>(),
            vec![(FlowType::Inbound, 1.0), (FlowType::Outbound, 3.0)]
        );
    }
}

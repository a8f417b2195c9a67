//! Country code to display name lookup

use rustc_hash::FxHashMap;

/// Immutable map from country code to English country name.
///
/// Built once per run. When a code is inserted twice the later name replaces
/// the earlier one (last-wins), and the replacement is counted so loaders can
/// report it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryLookup {
    names: FxHashMap<String, String>,
    overridden: usize,
}

impl CountryLookup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a code, replacing any earlier name for the same code
    pub fn insert(&mut self, code: impl Into<String>, name: impl Into<String>) {
        if self.names.insert(code.into(), name.into()).is_some() {
            self.overridden += 1;
        }
    }

    /// Resolve a code to its country name
    #[must_use]
    pub fn resolve(&self, code: &str) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Number of inserts that replaced an existing code
    #[must_use]
    pub fn overridden(&self) -> usize {
        self.overridden
    }
}

impl<C: Into<String>, N: Into<String>> FromIterator<(C, N)> for CountryLookup {
    fn from_iter<I: IntoIterator<Item = (C, N)>>(iter: I) -> Self {
        let mut lookup = Self::new();
        for (code, name) in iter {
            lookup.insert(code, name);
        }
        lookup
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_code_last_wins() {
        let lookup: CountryLookup = [("FRA", "France"), ("DEU", "Germany"), ("FRA", "French Republic")]
            .into_iter()
            .collect();
        assert_eq!(lookup.len(), 2);
        assert_eq!(lookup.resolve("FRA"), Some("French Republic"));
        assert_eq!(lookup.overridden(), 1);
        assert_eq!(lookup.resolve("XYZ"), None);
    }
}

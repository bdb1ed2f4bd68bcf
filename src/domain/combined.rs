//! Parameter set with the scenario dimension collapsed.

use indexmap::IndexMap;

use super::id::ParameterKey;
use super::parameter::{ParameterRow, ParameterValues};

/// Effective parameters for one scenario combination, keyed by
/// (category, parameter).
///
/// Built from layers listed lowest priority first: the row seen last for a
/// key wins and takes that key's position in the set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombinedParameterSet {
    entries: IndexMap<ParameterKey, ParameterValues>,
}

impl CombinedParameterSet {
    /// Concatenate rows in order and keep the last row for each key.
    pub fn from_rows<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a ParameterRow>,
    {
        let mut entries = IndexMap::new();
        for row in rows {
            entries.shift_remove(&row.key);
            entries.insert(row.key.clone(), row.values.clone());
        }
        Self { entries }
    }

    /// Effective values for a key.
    #[must_use]
    pub fn get(&self, category: &str, parameter: &str) -> Option<&ParameterValues> {
        self.entries.get(&ParameterKey::new(category, parameter))
    }

    /// Entries in effective order.
    pub fn iter(&self) -> impl Iterator<Item = (&ParameterKey, &ParameterValues)> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn row(scenario: &str, parameter: &str, constant: i64) -> ParameterRow {
        ParameterRow::new(
            scenario,
            ParameterKey::new("cat", parameter),
            ParameterValues::constant(constant.into()),
        )
    }

    #[test]
    fn later_rows_override_earlier_ones() {
        let rows = [row("common", "x", 1), row("common", "y", 2), row("base", "x", 3)];
        let set = CombinedParameterSet::from_rows(&rows);

        assert_eq!(set.len(), 2);
        assert_eq!(set.get("cat", "x").unwrap().constant, Some(dec!(3)));
        assert_eq!(set.get("cat", "y").unwrap().constant, Some(dec!(2)));
    }

    #[test]
    fn overridden_key_moves_to_last_position() {
        let rows = [row("common", "x", 1), row("common", "y", 2), row("base", "x", 3)];
        let set = CombinedParameterSet::from_rows(&rows);
        let order: Vec<&str> = set.iter().map(|(k, _)| k.parameter()).collect();
        assert_eq!(order, ["y", "x"]);
    }
}

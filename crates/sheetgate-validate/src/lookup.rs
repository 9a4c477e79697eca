//! Header lookup.

use std::collections::HashMap;

use sheetgate_model::{Cell, fold_case};

/// Case-insensitive map from header text to column index, built once per
/// validation run from the header row.
///
/// Only string cells name a column. When a header repeats, the leftmost
/// column wins.
#[derive(Debug, Clone, Default)]
pub struct HeaderIndex {
    /// Maps case-folded header -> column index
    inner: HashMap<String, usize>,
}

impl HeaderIndex {
    pub fn from_row(row: &[Cell]) -> Self {
        let mut inner = HashMap::new();
        for (index, cell) in row.iter().enumerate() {
            if let Cell::String(name) = cell {
                inner.entry(fold_case(name)).or_insert(index);
            }
        }
        Self { inner }
    }

    /// Column index of `name`, ignoring case. No trimming is applied.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.inner.get(&fold_case(name)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_lookup() {
        let index = HeaderIndex::from_row(&[
            Cell::text("ProjectCode"),
            Cell::Empty,
            Cell::text("RATE"),
        ]);

        assert_eq!(index.get("projectcode"), Some(0));
        assert_eq!(index.get("Rate"), Some(2));
        assert_eq!(index.get("ResourceName"), None);
        assert_eq!(index.get(""), None);
    }

    #[test]
    fn first_duplicate_wins() {
        let index = HeaderIndex::from_row(&[Cell::text("Rate"), Cell::text("rate")]);
        assert_eq!(index.get("Rate"), Some(0));
    }

    #[test]
    fn non_text_cells_and_padding_do_not_match() {
        let index = HeaderIndex::from_row(&[Cell::Number(1.0), Cell::text(" Rate ")]);
        assert_eq!(index.get("1"), None);
        assert_eq!(index.get("Rate"), None);
    }

    #[test]
    fn multi_char_case_mappings_do_not_match() {
        let index = HeaderIndex::from_row(&[Cell::text("STRASSE"), Cell::text("Größe")]);
        assert_eq!(index.get("Straße"), None);
        assert_eq!(index.get("strasse"), Some(0));
        assert_eq!(index.get("GRÖßE"), Some(1));
    }
}

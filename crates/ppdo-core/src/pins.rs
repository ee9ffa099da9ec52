//! Pinned ("favorite") records.
//!
//! Pins live in their own set keyed by record id and are joined with the
//! records only when a view is built. The flag is never written back onto
//! the record.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::Office;
use crate::record::Record;
use crate::sort::{compare_records, SortState};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PinSet {
    ids: BTreeSet<String>,
}

impl PinSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Add `id` if absent, remove it if present. Returns whether it is
    /// pinned afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for PinSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Pinned records first, then unpinned; `sort` orders each partition.
pub fn sort_with_pins<'a, R: Record>(
    mut rows: Vec<&'a R>,
    sort: &SortState,
    pins: &PinSet,
) -> Vec<&'a R> {
    rows.sort_by(|a, b| {
        pins.contains(b.id())
            .cmp(&pins.contains(a.id()))
            .then_with(|| compare_records(*a, *b, sort))
    });
    rows
}

/// An office joined with the pin set for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfficeRow<'a> {
    #[serde(flatten)]
    pub office: &'a Office,
    pub is_favorite: bool,
}

pub fn office_rows<'a>(offices: &[&'a Office], pins: &PinSet) -> Vec<OfficeRow<'a>> {
    offices
        .iter()
        .map(|&office| OfficeRow {
            office,
            is_favorite: pins.contains(&office.code),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::SortDirection;

    fn codes(rows: &[&Office]) -> Vec<String> {
        rows.iter().map(|o| o.code.clone()).collect()
    }

    #[test]
    fn test_toggle_membership() {
        let mut pins = PinSet::new();
        assert!(pins.toggle("PHO"));
        assert!(pins.contains("PHO"));
        assert!(!pins.toggle("PHO"));
        assert!(pins.is_empty());
    }

    #[test]
    fn test_pinned_first_then_by_name() {
        let data = vec![
            Office::new("B", "B"),
            Office::new("A", "A"),
            Office::new("C", "C"),
        ];
        let pins: PinSet = ["C"].into_iter().collect();
        let sorted = sort_with_pins(
            data.iter().collect(),
            &SortState::new("name", SortDirection::Asc),
            &pins,
        );
        assert_eq!(codes(&sorted), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_pins_win_over_descending_key() {
        let data = vec![
            Office::new("A", "Accounting"),
            Office::new("B", "Budget"),
            Office::new("C", "Cooperatives"),
            Office::new("D", "Disaster Risk"),
        ];
        let pins: PinSet = ["A", "B"].into_iter().collect();
        let sorted = sort_with_pins(
            data.iter().collect(),
            &SortState::new("name", SortDirection::Desc),
            &pins,
        );
        assert_eq!(codes(&sorted), vec!["B", "A", "D", "C"]);
    }

    #[test]
    fn test_no_key_keeps_order_within_partitions() {
        let data = vec![
            Office::new("A", "a"),
            Office::new("B", "b"),
            Office::new("C", "c"),
            Office::new("D", "d"),
        ];
        let pins: PinSet = ["D", "B"].into_iter().collect();
        let sorted = sort_with_pins(data.iter().collect(), &SortState::default(), &pins);
        assert_eq!(codes(&sorted), vec!["B", "D", "A", "C"]);
    }

    #[test]
    fn test_office_row_flag_is_derived() {
        let data = vec![Office::new("PGO", "Governor"), Office::new("PHO", "Health")];
        let pins: PinSet = ["PHO"].into_iter().collect();
        let refs: Vec<&Office> = data.iter().collect();
        let rows = office_rows(&refs, &pins);
        assert!(!rows[0].is_favorite);
        assert!(rows[1].is_favorite);

        let json = serde_json::to_value(&rows[1]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"code": "PHO", "name": "Health", "is_favorite": true})
        );
    }

    #[test]
    fn test_pin_set_serializes_as_list() {
        let pins: PinSet = ["PHO", "PEO"].into_iter().collect();
        assert_eq!(serde_json::to_string(&pins).unwrap(), r#"["PEO","PHO"]"#);
    }
}

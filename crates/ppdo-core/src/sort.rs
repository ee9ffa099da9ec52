//! Column sorting.
//!
//! Comparison follows the kind of each [`FieldValue`]: dates by instant,
//! text with a case-insensitive collation, numbers numerically. Values of
//! different kinds fall back to a fixed rank so the comparator stays a
//! total order. Rust's sort is stable, so ties keep their incoming order,
//! but callers should not depend on it.

use std::cmp::Ordering;

use crate::record::{FieldValue, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

/// Current sort column and direction. No key means "original order".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    key: Option<String>,
    direction: SortDirection,
}

impl SortState {
    pub fn new(key: &str, direction: SortDirection) -> Self {
        Self {
            key: Some(key.to_string()),
            direction,
        }
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Column-header click: the same key flips direction, a new key starts
    /// ascending.
    pub fn click(&mut self, key: &str) {
        if self.key.as_deref() == Some(key) {
            self.direction = self.direction.toggled();
        } else {
            self.key = Some(key.to_string());
            self.direction = SortDirection::Asc;
        }
    }

    pub fn clear(&mut self) {
        self.key = None;
        self.direction = SortDirection::Asc;
    }
}

/// Case-insensitive primary comparison with an exact secondary one.
pub fn collate(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}

pub fn compare_values(a: &FieldValue<'_>, b: &FieldValue<'_>) -> Ordering {
    match (a, b) {
        (FieldValue::Date(x), FieldValue::Date(y)) => x.cmp(y),
        (FieldValue::Text(x), FieldValue::Text(y)) => collate(x, y),
        (FieldValue::Number(x), FieldValue::Number(y)) => x.total_cmp(y),
        _ => a.rank().cmp(&b.rank()),
    }
}

/// Compare two records under `sort`; `Equal` when no key is set.
pub fn compare_records<R: Record>(a: &R, b: &R, sort: &SortState) -> Ordering {
    match sort.key() {
        Some(key) => sort
            .direction
            .apply(compare_values(&a.field(key), &b.field(key))),
        None => Ordering::Equal,
    }
}

/// Order `rows` by `sort`. With no key the input order is returned as is.
pub fn sort_records<'a, R: Record>(mut rows: Vec<&'a R>, sort: &SortState) -> Vec<&'a R> {
    if sort.key().is_some() {
        rows.sort_by(|a, b| compare_records(*a, *b, sort));
    }
    rows
}

//! The field-accessor trait the list pipeline is parameterized by.
//!
//! Each record shape (documents, concerns, offices) describes which of its
//! fields are searchable, sortable and filterable. The pipeline stages
//! never name a concrete type.

use chrono::{DateTime, Utc};

use crate::error::{CoreError, CoreResult};

/// A single field value as seen by the sort stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// The record has no value for this key.
    Missing,
    Number(f64),
    /// Compared by instant, never by its display string.
    Date(DateTime<Utc>),
    Text(&'a str),
}

impl FieldValue<'_> {
    /// Position of the variant in the fallback order used when two values
    /// of different kinds are compared.
    pub(crate) fn rank(&self) -> u8 {
        match self {
            FieldValue::Missing => 0,
            FieldValue::Number(_) => 1,
            FieldValue::Date(_) => 2,
            FieldValue::Text(_) => 3,
        }
    }
}

/// A flat record that can flow through the list pipeline.
pub trait Record {
    /// Unique identifier within the record's collection.
    fn id(&self) -> &str;

    /// Text fields matched by the free-text search, OR-combined.
    fn search_fields(&self) -> Vec<&str>;

    /// Value for a sort key, or [`FieldValue::Missing`] for unknown keys.
    fn field(&self, key: &str) -> FieldValue<'_>;

    /// Label of the record's value in an enum filter dimension.
    fn enum_value(&self, _dimension: &str) -> Option<&'static str> {
        None
    }

    /// Instant used by the date-range filter.
    fn raw_date(&self) -> Option<DateTime<Utc>> {
        None
    }

    /// Keys accepted by [`field`](Record::field).
    fn sort_keys() -> &'static [&'static str]
    where
        Self: Sized;

    /// Names of the enum filter dimensions.
    fn dimensions() -> &'static [&'static str]
    where
        Self: Sized,
    {
        &[]
    }

    /// Declared values of a dimension, `None` if the dimension is unknown.
    fn dimension_values(_dimension: &str) -> Option<Vec<&'static str>>
    where
        Self: Sized,
    {
        None
    }
}

/// Reject sort keys the record type does not expose.
pub fn validate_sort_key<R: Record>(key: &str) -> CoreResult<()> {
    if R::sort_keys().contains(&key) {
        Ok(())
    } else {
        Err(CoreError::UnknownSortKey {
            key: key.to_string(),
            expected: R::sort_keys().join(", "),
        })
    }
}

/// Resolve a user-supplied filter value to its canonical label.
///
/// Matching is case-insensitive; the returned label is the one the
/// record's [`enum_value`](Record::enum_value) reports.
pub fn validate_filter<R: Record>(dimension: &str, value: &str) -> CoreResult<&'static str> {
    let values = R::dimension_values(dimension).ok_or_else(|| CoreError::UnknownDimension {
        dimension: dimension.to_string(),
        expected: R::dimensions().join(", "),
    })?;
    let wanted = value.trim();
    values
        .iter()
        .copied()
        .find(|label| label.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| CoreError::UnknownValue {
            field: dimension.to_string(),
            value: value.to_string(),
            expected: values.join(", "),
        })
}

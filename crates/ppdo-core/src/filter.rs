//! Multi-field filtering.
//!
//! A [`FilterState`] holds, per enum dimension, the set of accepted
//! labels (empty means "accept all") plus an optional inclusive date
//! range. A record passes when it satisfies every active dimension (AND),
//! matching any accepted label within a dimension (OR).

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use crate::record::Record;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    selections: BTreeMap<String, BTreeSet<String>>,
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checkbox semantics: remove `value` if selected, add it otherwise.
    ///
    /// Returns whether the value is selected afterwards.
    pub fn toggle(&mut self, dimension: &str, value: &str) -> bool {
        let value = value.trim().to_lowercase();
        let set = self.selections.entry(dimension.to_string()).or_default();
        let selected = if set.remove(&value) {
            false
        } else {
            set.insert(value);
            true
        };
        if set.is_empty() {
            self.selections.remove(dimension);
        }
        selected
    }

    /// Accepted labels for a dimension; `None` when the dimension is inactive.
    pub fn accepted(&self, dimension: &str) -> Option<&BTreeSet<String>> {
        self.selections.get(dimension)
    }

    pub fn date_from(&self) -> Option<NaiveDate> {
        self.date_from
    }

    pub fn date_to(&self) -> Option<NaiveDate> {
        self.date_to
    }

    pub fn set_date_from(&mut self, date: Option<NaiveDate>) {
        self.date_from = date;
    }

    pub fn set_date_to(&mut self, date: Option<NaiveDate>) {
        self.date_to = date;
    }

    /// Badge count: selected labels across dimensions plus one per date bound.
    pub fn active_count(&self) -> usize {
        let selected: usize = self.selections.values().map(BTreeSet::len).sum();
        selected + usize::from(self.date_from.is_some()) + usize::from(self.date_to.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    pub fn clear(&mut self) {
        self.selections.clear();
        self.date_from = None;
        self.date_to = None;
    }

    /// The inclusive instant range implied by the date bounds.
    pub fn date_range(&self) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
        (self.date_from.map(start_of_day), self.date_to.map(end_of_day))
    }

    pub fn matches<R: Record>(&self, record: &R) -> bool {
        let enums_ok = self.selections.iter().all(|(dimension, accepted)| {
            record
                .enum_value(dimension)
                .is_some_and(|label| accepted.contains(label))
        });
        if !enums_ok {
            return false;
        }

        let (from, to) = self.date_range();
        if from.is_none() && to.is_none() {
            return true;
        }
        let Some(ts) = record.raw_date() else {
            return false;
        };
        from.map_or(true, |f| ts >= f) && to.map_or(true, |t| ts <= t)
    }
}

/// 00:00:00.000 UTC of `date`.
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// 23:59:59.999 UTC of `date`.
pub fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    start_of_day(date) + Duration::days(1) - Duration::milliseconds(1)
}

/// Keep the records that satisfy every active filter, in their original order.
pub fn filter_by_fields<'a, R: Record>(rows: Vec<&'a R>, filters: &FilterState) -> Vec<&'a R> {
    if filters.is_empty() {
        return rows;
    }
    rows.into_iter().filter(|r| filters.matches(*r)).collect()
}

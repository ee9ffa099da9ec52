//! The list pipeline and the view state that drives it.
//!
//! `process` runs search → field filter → sort → paginate over a record
//! slice. [`ListState`] owns the four inputs; every mutator that can
//! change the result set sends the view back to page 1, so a shrinking
//! result never leaves the view on a page that no longer exists.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::error::CoreResult;
use crate::filter::{filter_by_fields, FilterState};
use crate::paginate::{paginate, total_pages, PageState};
use crate::pins::{sort_with_pins, PinSet};
use crate::record::Record;
use crate::search::filter_by_search;
use crate::sort::{sort_records, SortDirection, SortState};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    search: String,
    filters: FilterState,
    sort: SortState,
    page: PageState,
}

impl ListState {
    pub fn new(page_size: usize) -> CoreResult<Self> {
        Ok(Self {
            page: PageState::new(page_size)?,
            ..Self::default()
        })
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    pub fn set_search(&mut self, query: &str) {
        self.search = query.to_string();
        self.page.reset();
    }

    pub fn toggle_filter(&mut self, dimension: &str, value: &str) -> bool {
        let selected = self.filters.toggle(dimension, value);
        self.page.reset();
        selected
    }

    pub fn set_date_from(&mut self, date: Option<NaiveDate>) {
        self.filters.set_date_from(date);
        self.page.reset();
    }

    pub fn set_date_to(&mut self, date: Option<NaiveDate>) {
        self.filters.set_date_to(date);
        self.page.reset();
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.page.reset();
    }

    /// Column-header click (see [`SortState::click`]).
    pub fn click_sort(&mut self, key: &str) {
        self.sort.click(key);
        self.page.reset();
    }

    pub fn set_sort(&mut self, key: &str, direction: SortDirection) {
        self.sort = SortState::new(key, direction);
        self.page.reset();
    }

    pub fn clear_sort(&mut self) {
        self.sort.clear();
        self.page.reset();
    }

    pub fn set_page(&mut self, page: usize) {
        self.page.set_page(page);
    }

    pub fn set_page_size(&mut self, page_size: usize) -> CoreResult<()> {
        self.page.set_page_size(page_size)
    }
}

/// The visible slice plus the counts a pagination control needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListPage<'a, R> {
    pub items: Vec<&'a R>,
    /// Matches before pagination.
    pub total_count: usize,
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
}

impl<R> ListPage<'_, R> {
    /// True when nothing matched; views show "no results" instead of a
    /// page control.
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }
}

/// Search, filter and sort without paginating.
///
/// With `pins`, pinned records are placed ahead of the rest and the sort
/// key orders each group.
pub fn select<'a, R: Record>(
    records: &'a [R],
    state: &ListState,
    pins: Option<&PinSet>,
) -> Vec<&'a R> {
    let rows: Vec<&R> = records.iter().collect();
    let rows = filter_by_search(rows, &state.search);
    let searched = rows.len();
    let rows = filter_by_fields(rows, &state.filters);
    debug!(
        total = records.len(),
        searched,
        filtered = rows.len(),
        "list pipeline"
    );
    match pins {
        Some(pins) => sort_with_pins(rows, &state.sort, pins),
        None => sort_records(rows, &state.sort),
    }
}

pub fn process<'a, R: Record>(
    records: &'a [R],
    state: &ListState,
    pins: Option<&PinSet>,
) -> ListPage<'a, R> {
    let rows = select(records, state, pins);
    let page_size = state.page.page_size();
    ListPage {
        items: paginate(&rows, &state.page).to_vec(),
        total_count: rows.len(),
        total_pages: total_pages(rows.len(), page_size),
        page: state.page.page(),
        page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Office;

    fn offices(n: usize) -> Vec<Office> {
        (0..n)
            .map(|i| Office::new(&format!("OFF{:02}", i), &format!("Office {:02}", i)))
            .collect()
    }

    #[test]
    fn test_mutators_reset_page() {
        let mut state = ListState::new(10).unwrap();
        let steps: Vec<Box<dyn Fn(&mut ListState)>> = vec![
            Box::new(|s: &mut ListState| s.set_search("x")),
            Box::new(|s: &mut ListState| {
                s.toggle_filter("status", "pending");
            }),
            Box::new(|s: &mut ListState| s.set_date_from(NaiveDate::from_ymd_opt(2024, 1, 1))),
            Box::new(|s: &mut ListState| s.set_date_to(NaiveDate::from_ymd_opt(2024, 1, 31))),
            Box::new(|s: &mut ListState| s.clear_filters()),
            Box::new(|s: &mut ListState| s.click_sort("title")),
            Box::new(|s: &mut ListState| s.set_sort("title", SortDirection::Desc)),
            Box::new(|s: &mut ListState| s.clear_sort()),
            Box::new(|s: &mut ListState| s.set_page_size(25).unwrap()),
        ];
        for step in steps {
            state.set_page(4);
            step(&mut state);
            assert_eq!(state.page().page(), 1);
        }
    }

    #[test]
    fn test_set_page_keeps_other_state() {
        let mut state = ListState::new(10).unwrap();
        state.set_search("office");
        state.set_page(2);
        assert_eq!(state.page().page(), 2);
        assert_eq!(state.search(), "office");
    }

    #[test]
    fn test_process_reports_counts() {
        let data = offices(23);
        let mut state = ListState::new(10).unwrap();
        state.set_page(3);
        let page = process(&data, &state, None);
        assert_eq!(page.total_count, 23);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.items[0].code, "OFF20");
    }

    #[test]
    fn test_empty_result() {
        let data = offices(5);
        let mut state = ListState::new(10).unwrap();
        state.set_search("treasury");
        let page = process(&data, &state, None);
        assert!(page.is_empty());
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_pins_applied_before_pagination() {
        let data = offices(12);
        let pins: PinSet = ["OFF11"].into_iter().collect();
        let state = ListState::new(5).unwrap();
        let page = process(&data, &state, Some(&pins));
        assert_eq!(page.items[0].code, "OFF11");
        assert_eq!(page.items[1].code, "OFF00");
    }
}

//! `ppdo list`: run the list pipeline over one collection and print a page.
//!
//! Command-line options are validated against the record type before any
//! data is read, then applied to a [`ListState`] in the order a user would
//! set them in the UI: search, filters, date range, sort, page size and
//! finally the page number (which every earlier step resets).

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use ppdo_core::record::{validate_filter, validate_sort_key};
use ppdo_core::sort::SortDirection;
use ppdo_core::{process, ListState, Record};
use tracing::{debug, warn};

use crate::config::Config;
use crate::dataset::{self, Dataset};
use crate::render::{self, PageMeta, TableRow};

/// Options shared by every list view.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub search: Option<String>,
    /// `(dimension, value)` pairs; each pair selects one accepted value.
    pub filters: Vec<(String, String)>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub sort: Option<String>,
    pub desc: bool,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub json: bool,
}

fn parse_date(flag: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .with_context(|| format!("--{flag} expects YYYY-MM-DD, got '{value}'"))
}

/// Translate `query` into a validated [`ListState`] for records of type `R`.
pub fn build_state<R: Record>(config: &Config, query: &ListQuery) -> Result<ListState> {
    let mut state = ListState::new(config.pagination.page_size)?;

    if let Some(q) = &query.search {
        state.set_search(q);
    }

    for (dimension, value) in &query.filters {
        let dimension = dimension.trim().to_ascii_lowercase();
        let label = validate_filter::<R>(&dimension, value)?;
        let already = state
            .filters()
            .accepted(&dimension)
            .is_some_and(|set| set.contains(label));
        if !already {
            state.toggle_filter(&dimension, label);
        }
    }

    let from = query.from.as_deref().map(|v| parse_date("from", v)).transpose()?;
    let to = query.to.as_deref().map(|v| parse_date("to", v)).transpose()?;
    if let (Some(f), Some(t)) = (from, to) {
        if f > t {
            warn!(from = %f, to = %t, "date range is inverted; nothing can match");
        }
    }
    state.set_date_from(from);
    state.set_date_to(to);

    match (&query.sort, query.desc) {
        (Some(key), desc) => {
            validate_sort_key::<R>(key)?;
            let direction = if desc {
                SortDirection::Desc
            } else {
                SortDirection::Asc
            };
            state.set_sort(key, direction);
        }
        (None, true) => bail!("--desc requires --sort <key>"),
        (None, false) => {}
    }

    if let Some(size) = query.page_size {
        state.set_page_size(size)?;
        if !config.pagination.allows(size) {
            bail!(
                "--page-size must be one of {:?}",
                config.pagination.page_size_options
            );
        }
    }

    if let Some(page) = query.page {
        state.set_page(page);
    }

    debug!(?state, "list state");
    Ok(state)
}

pub fn run_list<R: Dataset + TableRow>(config: &Config, query: &ListQuery) -> Result<()> {
    let state = build_state::<R>(config, query)?;
    let store = dataset::load::<R>(config)?;
    let page = process(store.records(), &state, None);
    render::print_page(&page.items, PageMeta::of(&page), query.json)
}

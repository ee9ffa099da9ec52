//! `ppdo offices`: the office directory with pinned favorites.
//!
//! Pins are read from the session file and joined onto the office list at
//! display time; `offices.json` never stores the flag.

use anyhow::{bail, Context, Result};
use chrono::Utc;
use ppdo_core::models::Office;
use ppdo_core::office_form::OfficeForm;
use ppdo_core::pins::office_rows;
use ppdo_core::{process, Record};
use tracing::info;

use crate::config::Config;
use crate::dataset;
use crate::list::{build_state, ListQuery};
use crate::render::{self, PageMeta};
use crate::session::Session;

/// Favorites first, then the remaining offices; the sort key (if any)
/// orders each group.
pub fn run_list(config: &Config, query: &ListQuery) -> Result<()> {
    let state = build_state::<Office>(config, query)?;
    let store = dataset::load::<Office>(config)?;
    let session = Session::open(&config.data.session_path())?;

    let page = process(store.records(), &state, Some(session.pins()));
    let rows = office_rows(&page.items, session.pins());
    render::print_page(&rows, PageMeta::of(&page), query.json)
}

/// Toggle the pin on `code`. Returns whether the office is pinned now.
pub fn run_pin(config: &Config, code: &str) -> Result<bool> {
    let code = code.trim().to_uppercase();
    let store = dataset::load::<Office>(config)?;
    if store.get(&code).is_none() {
        bail!("Unknown office code: {code}");
    }

    let mut session = Session::open(&config.data.session_path())?;
    let pinned = session.pins_mut().toggle(&code);
    session.prune_pins(store.records().iter().map(|o| o.id()));
    session.save()?;

    info!(code = %code, pinned, "office pin toggled");
    if pinned {
        println!("Pinned {code}.");
    } else {
        println!("Unpinned {code}.");
    }
    Ok(pinned)
}

pub fn run_add(config: &Config, code: &str, name: &str) -> Result<()> {
    let mut store = dataset::load::<Office>(config)?;
    let mut form = OfficeForm::new();
    form.set_code(code);
    form.set_name(name);
    form.submit(&mut store, Utc::now())
        .context("Office not added")?;
    dataset::save(config, &store)?;
    println!("Added office {} ({}).", form.code().trim(), form.name().trim());
    Ok(())
}

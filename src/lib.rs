//! # PPDO Dashboard
//!
//! Command-line front end for a provincial planning and development
//! office's document tracking dashboard: incoming and outgoing documents,
//! citizen e-concerns and the office directory.
//!
//! All list logic (search, field filters, sorting, pagination, pinned
//! favorites) lives in [`ppdo_core`]; this crate adds configuration, JSON
//! file persistence, the session file and terminal output.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │  data dir    │──▶│ RecordStore  │──▶│  ppdo-core   │
//! │  *.json      │   │  (dataset)   │   │  process()   │
//! └──────────────┘   └──────────────┘   └──────┬───────┘
//!        ▲                                     │
//!        │ init / delete / update              ▼
//! ┌──────┴───────┐   ┌──────────────┐   ┌──────────────┐
//! │    seed      │   │   session    │──▶│    render    │
//! │  (StdRng)    │   │  (pins)      │   │ table / JSON │
//! └──────────────┘   └──────────────┘   └──────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! ppdo init                                   # seed the data directory
//! ppdo list incoming --search "road" --filter status=pending
//! ppdo list concerns --sort date_submitted --desc --page-size 25
//! ppdo offices pin PHO
//! ppdo offices list
//! ppdo stats
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`dataset`] | JSON record files |
//! | [`session`] | Pinned offices persisted between runs |
//! | [`seed`] | Deterministic fixtures for `ppdo init` |
//! | [`list`] | Command-line options → list state |
//! | [`render`] | Tables, footers and JSON output |
//! | [`documents`] | Document deletion |
//! | [`concerns`] | Concern status and notes updates |
//! | [`offices`] | Office directory, pins and the add form |
//! | [`stats`] | Dashboard summary |
//! | [`logging`] | Tracing subscriber setup |

pub mod concerns;
pub mod config;
pub mod dataset;
pub mod documents;
pub mod list;
pub mod logging;
pub mod offices;
pub mod render;
pub mod seed;
pub mod session;
pub mod stats;

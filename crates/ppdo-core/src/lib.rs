//! # PPDO Core
//!
//! Shared, I/O-free logic for the PPDO dashboard: record models, the
//! record store, and the list pipeline that backs every tabular view.
//!
//! ```text
//! records ──▶ search ──▶ field filter ──▶ sort ──▶ paginate ──▶ ListPage
//!                 ▲            ▲            ▲          ▲
//!                 └────────────┴─ ListState ┴──────────┘
//! ```
//!
//! Every stage is a plain function over `Vec<&R>` where `R: Record`, so
//! documents, concerns and offices share one implementation. The crate
//! is synchronous and holds no global state.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Documents, concerns, offices and their closed enums |
//! | [`record`] | The [`Record`](record::Record) field-accessor trait |
//! | [`search`] | Case-insensitive substring search |
//! | [`filter`] | Enum and date-range filtering |
//! | [`sort`] | Sort state and value comparison |
//! | [`paginate`] | Page state and slicing |
//! | [`pins`] | Pinned/favorite set and favorites-aware ordering |
//! | [`pipeline`] | View state and the composite `process` |
//! | [`store`] | In-memory record store with id uniqueness |
//! | [`office_form`] | "Add office" form state machine |
//! | [`stats`] | Dashboard summary counts |

pub mod error;
pub mod filter;
pub mod models;
pub mod office_form;
pub mod paginate;
pub mod pins;
pub mod pipeline;
pub mod record;
pub mod search;
pub mod sort;
pub mod stats;
pub mod store;

pub use error::{CoreError, CoreResult};
pub use pipeline::{process, select, ListPage, ListState};
pub use record::{FieldValue, Record};

//! # PPDO Dashboard CLI (`ppdo`)
//!
//! The `ppdo` binary seeds, lists and edits the dashboard's record files.
//!
//! ## Usage
//!
//! ```bash
//! ppdo --config ./config/ppdo.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `ppdo init` | Seed deterministic fixtures into the data directory |
//! | `ppdo list <collection>` | Search, filter, sort and page a collection |
//! | `ppdo delete <collection> <id>` | Remove a document |
//! | `ppdo concern status <id> <status>` | Move a concern to a new status |
//! | `ppdo concern notes <id> <text>` | Replace a concern's notes |
//! | `ppdo offices list` | Office directory, pinned offices first |
//! | `ppdo offices pin <code>` | Pin or unpin an office |
//! | `ppdo offices add <code> <name>` | Add an office |
//! | `ppdo stats` | Summary counts per collection |
//!
//! ## Examples
//!
//! ```bash
//! # Pending or in-progress incoming documents, newest first
//! ppdo list incoming --filter status=pending --filter status=in-progress \
//!     --sort date_submitted --desc
//!
//! # Health concerns filed in March, as JSON
//! ppdo list concerns --filter category=health --from 2024-03-01 --to 2024-03-31 --json
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use ppdo_core::models::{Concern, IncomingDocument, OutgoingDocument};
use ppdo_dashboard::list::ListQuery;
use ppdo_dashboard::{concerns, config, documents, list, logging, offices, seed, stats};
use std::path::PathBuf;

/// PPDO Dashboard CLI: document tracking, e-concerns and the office
/// directory over local JSON files.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. See `config/ppdo.example.toml` for a full example.
#[derive(Parser)]
#[command(
    name = "ppdo",
    about = "PPDO Dashboard: document tracking, e-concerns and office directory",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/ppdo.toml")]
    config: PathBuf,

    /// Log at debug level regardless of RUST_LOG and `[logging].level`.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the data directory with deterministic fixtures.
    ///
    /// Existing files are kept unless `--force` is given.
    Init {
        /// Overwrite existing record files.
        #[arg(long)]
        force: bool,
    },

    /// List a collection through search, filters, sort and pagination.
    List {
        collection: Collection,

        #[command(flatten)]
        view: ViewArgs,

        /// Keep only records whose value for a dimension is VALUE
        /// (`status=pending`, `priority=high`, `category=health`).
        /// Repeat to accept several values.
        #[arg(long = "filter", value_parser = parse_key_val)]
        filters: Vec<(String, String)>,

        /// Earliest date, inclusive (YYYY-MM-DD).
        #[arg(long)]
        from: Option<String>,

        /// Latest date, inclusive (YYYY-MM-DD).
        #[arg(long)]
        to: Option<String>,
    },

    /// Delete a document by id.
    Delete {
        collection: DocumentCollection,
        id: String,
    },

    /// Update an e-concern.
    Concern {
        #[command(subcommand)]
        action: ConcernAction,
    },

    /// Office directory.
    Offices {
        #[command(subcommand)]
        action: OfficeAction,
    },

    /// Print dashboard statistics.
    Stats,
}

#[derive(Clone, Copy, ValueEnum)]
enum Collection {
    Incoming,
    Outgoing,
    Concerns,
}

#[derive(Clone, Copy, ValueEnum)]
enum DocumentCollection {
    Incoming,
    Outgoing,
}

/// Options shared by every list view.
#[derive(Args)]
struct ViewArgs {
    /// Case-insensitive substring search over the visible columns.
    #[arg(long)]
    search: Option<String>,

    /// Sort column (see the column names in `--json` output).
    #[arg(long)]
    sort: Option<String>,

    /// Sort descending instead of ascending.
    #[arg(long)]
    desc: bool,

    /// 1-based page number.
    #[arg(long)]
    page: Option<usize>,

    /// Rows per page; must be one of `[pagination].page_size_options`.
    #[arg(long)]
    page_size: Option<usize>,

    /// Print the page as JSON.
    #[arg(long)]
    json: bool,
}

impl ViewArgs {
    fn into_query(self) -> ListQuery {
        ListQuery {
            search: self.search,
            sort: self.sort,
            desc: self.desc,
            page: self.page,
            page_size: self.page_size,
            json: self.json,
            ..ListQuery::default()
        }
    }
}

#[derive(Subcommand)]
enum ConcernAction {
    /// Set a concern's status (pending, in-progress, resolved, closed).
    Status { id: String, status: String },
    /// Replace a concern's notes.
    Notes { id: String, text: String },
}

#[derive(Subcommand)]
enum OfficeAction {
    /// List offices, pinned favorites first.
    List {
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Toggle the pin on an office.
    Pin { code: String },
    /// Add an office to the directory.
    Add { code: String, name: String },
}

/// Parse a `key=value` pair for `--filter` arguments.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid KEY=VALUE: no '=' found in '{}'", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;
    logging::init(&cfg.logging, cli.verbose)?;

    match cli.command {
        Commands::Init { force } => {
            let written = seed::run_init(&cfg, force)?;
            println!("Data directory ready ({} file(s) written).", written);
        }
        Commands::List {
            collection,
            view,
            filters,
            from,
            to,
        } => {
            let query = ListQuery {
                filters,
                from,
                to,
                ..view.into_query()
            };
            match collection {
                Collection::Incoming => list::run_list::<IncomingDocument>(&cfg, &query)?,
                Collection::Outgoing => list::run_list::<OutgoingDocument>(&cfg, &query)?,
                Collection::Concerns => list::run_list::<Concern>(&cfg, &query)?,
            }
        }
        Commands::Delete { collection, id } => match collection {
            DocumentCollection::Incoming => documents::run_delete::<IncomingDocument>(&cfg, &id)?,
            DocumentCollection::Outgoing => documents::run_delete::<OutgoingDocument>(&cfg, &id)?,
        },
        Commands::Concern { action } => match action {
            ConcernAction::Status { id, status } => {
                concerns::run_set_status(&cfg, &id, &status)?;
            }
            ConcernAction::Notes { id, text } => {
                concerns::run_set_notes(&cfg, &id, &text)?;
            }
        },
        Commands::Offices { action } => match action {
            OfficeAction::List { view } => {
                offices::run_list(&cfg, &view.into_query())?;
            }
            OfficeAction::Pin { code } => {
                offices::run_pin(&cfg, &code)?;
            }
            OfficeAction::Add { code, name } => {
                offices::run_add(&cfg, &code, &name)?;
            }
        },
        Commands::Stats => {
            stats::run_stats(&cfg)?;
        }
    }

    Ok(())
}

//! Deterministic fixture generation for `ppdo init`.
//!
//! All randomness comes from a `StdRng` seeded from `[seed].seed`, so the
//! same config always produces the same data directory.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use ppdo_core::models::{
    Concern, ConcernCategory, ConcernStatus, Document, DocumentStatus, IncomingDocument,
    IncomingStatus, Label, Office, OutgoingDocument, OutgoingStatus, Priority,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::config::Config;
use crate::dataset::{self, Dataset};

const INCOMING_TITLES: &[&str] = &[
    "Request for Financial Assistance",
    "Endorsement of Barangay Development Plan",
    "Request for Road Concreting Project",
    "Application for Business Permit Clearance",
    "Submission of Annual Investment Program",
    "Request for Technical Assistance",
    "Letter of Intent for Livelihood Program",
    "Request for Certified True Copy",
];

const OUTGOING_TITLES: &[&str] = &[
    "Memorandum on Budget Call",
    "Notice of Approved Allocation",
    "Invitation to Provincial Development Council Meeting",
    "Reply to Request for Assistance",
    "Transmittal of Project Evaluation Report",
    "Advisory on Submission Deadlines",
];

const PEOPLE: &[&str] = &[
    "Juan Dela Cruz",
    "Maria Santos",
    "Jose Rizal Reyes",
    "Ana Marie Villanueva",
    "Pedro Bautista",
    "Liza Mendoza",
    "Ramon Garcia",
    "Cristina Aquino",
];

const AGENCIES: &[&str] = &[
    "Municipality of San Jose",
    "Municipality of Santa Maria",
    "DPWH District Engineering Office",
    "DILG Provincial Office",
    "NEDA Regional Office",
    "Barangay San Isidro",
];

const LOCATIONS: &[&str] = &[
    "Poblacion",
    "Barangay San Isidro",
    "Barangay Malinis",
    "Sitio Riverside",
    "Barangay Bagong Silang",
    "Public Market Area",
];

const OFFICES: &[(&str, &str)] = &[
    ("PGO", "Provincial Governor's Office"),
    ("PPDO", "Provincial Planning and Development Office"),
    ("PBO", "Provincial Budget Office"),
    ("PTO", "Provincial Treasurer's Office"),
    ("PACCO", "Provincial Accounting Office"),
    ("PEO", "Provincial Engineering Office"),
    ("PHO", "Provincial Health Office"),
    ("PSWDO", "Provincial Social Welfare and Development Office"),
    ("PENRO", "Provincial Environment and Natural Resources Office"),
    ("PDRRMO", "Provincial Disaster Risk Reduction and Management Office"),
    ("PAGRO", "Provincial Agriculture Office"),
    ("HRMO", "Human Resource Management Office"),
];

const CONCERN_TITLES: &[(ConcernCategory, &str, &str)] = &[
    (ConcernCategory::Infrastructure, "Damaged road near the public school", "PEO"),
    (ConcernCategory::Infrastructure, "Clogged drainage causing flooding", "PEO"),
    (ConcernCategory::Health, "Request for medical mission", "PHO"),
    (ConcernCategory::Health, "Shortage of medicines at rural health unit", "PHO"),
    (ConcernCategory::Environment, "Illegal dumping along the river", "PENRO"),
    (ConcernCategory::Environment, "Tree cutting without permit", "PENRO"),
    (ConcernCategory::PublicSafety, "Broken streetlights on the highway", "PDRRMO"),
    (ConcernCategory::SocialServices, "Follow-up on senior citizen pension", "PSWDO"),
    (ConcernCategory::Others, "Inquiry on scholarship application", "PGO"),
];

fn pick<'a, T>(rng: &mut StdRng, items: &'a [T]) -> &'a T {
    &items[rng.random_range(0..items.len())]
}

fn seeded_id(rng: &mut StdRng) -> String {
    uuid::Builder::from_random_bytes(rng.random()).into_uuid().to_string()
}

/// A working-hours instant somewhere in `year`.
fn random_instant(rng: &mut StdRng, year: i32) -> Result<DateTime<Utc>> {
    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1).with_context(|| format!("invalid year {year}"))?;
    let day = jan1 + Duration::days(rng.random_range(0..365));
    let seconds = rng.random_range(8 * 3600..17 * 3600);
    Ok(ppdo_core::filter::start_of_day(day) + Duration::seconds(seconds))
}

fn documents<S: DocumentStatus>(
    rng: &mut StdRng,
    count: usize,
    year: i32,
    prefix: &str,
    titles: &[&str],
    parties: &[&str],
) -> Result<Vec<Document<S>>> {
    (1..=count)
        .map(|i| {
            Ok(Document {
                id: seeded_id(rng),
                document_number: format!("{prefix}-{i:04}-{year}"),
                title: pick(rng, titles).to_string(),
                party: pick(rng, parties).to_string(),
                date_raw: random_instant(rng, year)?,
                status: *pick(rng, S::ALL),
                priority: *pick(rng, Priority::ALL),
            })
        })
        .collect()
}

pub fn incoming(rng: &mut StdRng, config: &Config) -> Result<Vec<IncomingDocument>> {
    let parties: Vec<&str> = PEOPLE.iter().chain(AGENCIES).copied().collect();
    documents::<IncomingStatus>(
        rng,
        config.seed.incoming,
        config.seed.year,
        "INC",
        INCOMING_TITLES,
        &parties,
    )
}

pub fn outgoing(rng: &mut StdRng, config: &Config) -> Result<Vec<OutgoingDocument>> {
    documents::<OutgoingStatus>(
        rng,
        config.seed.outgoing,
        config.seed.year,
        "OUT",
        OUTGOING_TITLES,
        AGENCIES,
    )
}

pub fn concerns(rng: &mut StdRng, config: &Config) -> Result<Vec<Concern>> {
    let year = config.seed.year;
    (1..=config.seed.concerns)
        .map(|i| {
            let (category, title, department) = *pick(rng, CONCERN_TITLES);
            let submitter = *pick(rng, PEOPLE);
            let status = *pick(rng, ConcernStatus::ALL);
            let assigned_to = match status {
                ConcernStatus::Pending => None,
                _ => Some(pick(rng, PEOPLE).to_string()),
            };
            Ok(Concern {
                id: seeded_id(rng),
                document_number: format!("EC-{i:04}-{year}"),
                title: title.to_string(),
                submitter: submitter.to_string(),
                submitter_email: format!(
                    "{}@example.ph",
                    submitter.to_lowercase().replace(' ', ".")
                ),
                submitter_phone: format!(
                    "0917-{:03}-{:04}",
                    rng.random_range(100..1000),
                    rng.random_range(0..10000)
                ),
                location: pick(rng, LOCATIONS).to_string(),
                category,
                date_raw: random_instant(rng, year)?,
                status,
                priority: *pick(rng, Priority::ALL),
                assigned_department: department.to_string(),
                assigned_to,
                notes: String::new(),
            })
        })
        .collect()
}

pub fn offices() -> Vec<Office> {
    OFFICES
        .iter()
        .map(|(code, name)| Office::new(code, name))
        .collect()
}

/// Seed every collection into the data directory.
///
/// Existing files are left alone unless `force` is set. Returns the
/// number of files written.
pub fn run_init(config: &Config, force: bool) -> Result<usize> {
    let mut rng = StdRng::seed_from_u64(config.seed.seed);
    // Generate all collections up front so the output does not depend on
    // which files already exist.
    let incoming = incoming(&mut rng, config)?;
    let outgoing = outgoing(&mut rng, config)?;
    let concerns = concerns(&mut rng, config)?;
    let offices = offices();

    let mut written = 0;
    written += write_if_needed(config, &incoming, force)?;
    written += write_if_needed(config, &outgoing, force)?;
    written += write_if_needed(config, &concerns, force)?;
    written += write_if_needed(config, &offices, force)?;
    Ok(written)
}

fn write_if_needed<R: Dataset>(config: &Config, records: &[R], force: bool) -> Result<usize> {
    let path = dataset::path_for::<R>(config);
    if path.exists() && !force {
        println!("{:<10} exists, skipped ({})", R::LABEL, path.display());
        return Ok(0);
    }
    dataset::write_records(config, records)?;
    info!(file = R::FILE, count = records.len(), "seeded");
    println!("{:<10} {} records -> {}", R::LABEL, records.len(), path.display());
    Ok(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use ppdo_core::store::RecordStore;

    fn config() -> Config {
        parse_config("[data]\ndir = \"unused\"\n[seed]\nseed = 7\nincoming = 25\nconcerns = 12\n")
            .unwrap()
    }

    #[test]
    fn test_same_seed_same_data() {
        let cfg = config();
        let a = incoming(&mut StdRng::seed_from_u64(cfg.seed.seed), &cfg).unwrap();
        let b = incoming(&mut StdRng::seed_from_u64(cfg.seed.seed), &cfg).unwrap();
        assert_eq!(a, b);
        let c = incoming(&mut StdRng::seed_from_u64(cfg.seed.seed + 1), &cfg).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_counts_and_numbering() {
        let cfg = config();
        let mut rng = StdRng::seed_from_u64(1);
        let docs = incoming(&mut rng, &cfg).unwrap();
        assert_eq!(docs.len(), 25);
        assert_eq!(docs[0].document_number, "INC-0001-2024");
        assert_eq!(docs[24].document_number, "INC-0025-2024");
        assert!(docs.iter().all(|d| d.date_raw.format("%Y").to_string() == "2024"));
        assert_eq!(concerns(&mut rng, &cfg).unwrap().len(), 12);
    }

    #[test]
    fn test_ids_are_unique() {
        let cfg = config();
        let mut rng = StdRng::seed_from_u64(3);
        assert!(RecordStore::new(incoming(&mut rng, &cfg).unwrap()).is_ok());
        assert!(RecordStore::new(outgoing(&mut rng, &cfg).unwrap()).is_ok());
        assert!(RecordStore::new(concerns(&mut rng, &cfg).unwrap()).is_ok());
        assert!(RecordStore::new(offices()).is_ok());
    }

    #[test]
    fn test_pending_concerns_are_unassigned() {
        let cfg = config();
        let list = concerns(&mut StdRng::seed_from_u64(9), &cfg).unwrap();
        for c in list {
            assert_eq!(c.status == ConcernStatus::Pending, c.assigned_to.is_none());
        }
    }
}

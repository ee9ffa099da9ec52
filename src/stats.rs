//! Dashboard summary.
//!
//! Totals and per-status/per-priority counts for each collection, plus the
//! size of the office directory and how many offices are pinned. Used by
//! `ppdo stats` to mirror the dashboard's summary cards.

use anyhow::Result;
use ppdo_core::models::{Concern, IncomingDocument, Office, OutgoingDocument};
use ppdo_core::stats::{collection_stats, CollectionStats};

use crate::config::Config;
use crate::dataset::{self, Dataset};
use crate::session::Session;

fn load_stats<R: Dataset>(config: &Config) -> Result<CollectionStats> {
    let store = dataset::load::<R>(config)?;
    Ok(collection_stats(store.records()))
}

fn format_collection(title: &str, stats: &CollectionStats) -> String {
    let mut out = format!("  {:<12} {}\n", title, stats.total);
    for (dimension, counts) in &stats.breakdown {
        let parts: Vec<String> = counts
            .iter()
            .map(|(label, n)| format!("{label} {n}"))
            .collect();
        out.push_str(&format!("    {:<10} {}\n", dimension, parts.join(" | ")));
    }
    out
}

/// Run the stats command: load every collection and print a summary.
pub fn run_stats(config: &Config) -> Result<()> {
    let incoming = load_stats::<IncomingDocument>(config)?;
    let outgoing = load_stats::<OutgoingDocument>(config)?;
    let concerns = load_stats::<Concern>(config)?;
    let offices = dataset::load::<Office>(config)?;
    let session = Session::open(&config.data.session_path())?;
    let pinned = offices
        .records()
        .iter()
        .filter(|o| session.pins().contains(&o.code))
        .count();

    println!("PPDO Dashboard Stats");
    println!("====================");
    println!();
    println!("  Data dir:    {}", config.data.dir.display());
    println!();
    print!("{}", format_collection("Incoming", &incoming));
    println!();
    print!("{}", format_collection("Outgoing", &outgoing));
    println!();
    print!("{}", format_collection("Concerns", &concerns));
    println!();
    println!("  {:<12} {} ({} pinned)", "Offices", offices.len(), pinned);
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use ppdo_core::models::{IncomingStatus, Priority};

    #[test]
    fn test_format_lists_every_label() {
        let docs = vec![IncomingDocument {
            id: "1".to_string(),
            document_number: "INC-0001-2024".to_string(),
            title: "Request".to_string(),
            party: "Juan Dela Cruz".to_string(),
            date_raw: Utc.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).unwrap(),
            status: IncomingStatus::Completed,
            priority: Priority::High,
        }];
        let text = format_collection("Incoming", &collection_stats(&docs));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0].trim_end(), "  Incoming     1");
        assert!(lines[1].contains("priority"));
        assert!(lines[1].contains("high 1 | low 0 | medium 0"));
        assert!(lines[2].contains("completed 1 | in-progress 0 | pending 0 | rejected 0"));
    }
}

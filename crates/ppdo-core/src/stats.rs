//! Summary counts for the dashboard cards.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::record::Record;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CollectionStats {
    pub total: usize,
    /// Dimension name → label → count. Every declared label is present,
    /// including those with a zero count.
    pub breakdown: BTreeMap<&'static str, BTreeMap<&'static str, usize>>,
}

impl CollectionStats {
    pub fn count(&self, dimension: &str, label: &str) -> usize {
        self.breakdown
            .get(dimension)
            .and_then(|counts| counts.get(label))
            .copied()
            .unwrap_or(0)
    }
}

pub fn collection_stats<R: Record>(records: &[R]) -> CollectionStats {
    let mut breakdown = BTreeMap::new();
    for &dimension in R::dimensions() {
        let mut counts: BTreeMap<&'static str, usize> = R::dimension_values(dimension)
            .unwrap_or_default()
            .into_iter()
            .map(|label| (label, 0))
            .collect();
        for r in records {
            if let Some(label) = r.enum_value(dimension) {
                *counts.entry(label).or_insert(0) += 1;
            }
        }
        breakdown.insert(dimension, counts);
    }
    CollectionStats {
        total: records.len(),
        breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IncomingDocument, IncomingStatus, Office, Priority};
    use chrono::{TimeZone, Utc};

    fn doc(id: &str, status: IncomingStatus, priority: Priority) -> IncomingDocument {
        IncomingDocument {
            id: id.to_string(),
            document_number: format!("INC-{}", id),
            title: "Request".to_string(),
            party: "Someone".to_string(),
            date_raw: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            status,
            priority,
        }
    }

    #[test]
    fn test_counts_per_dimension() {
        let docs = vec![
            doc("1", IncomingStatus::Pending, Priority::High),
            doc("2", IncomingStatus::Pending, Priority::Low),
            doc("3", IncomingStatus::Completed, Priority::High),
        ];
        let stats = collection_stats(&docs);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.count("status", "pending"), 2);
        assert_eq!(stats.count("status", "completed"), 1);
        assert_eq!(stats.count("status", "rejected"), 0);
        assert!(stats.breakdown["status"].contains_key("rejected"));
        assert_eq!(stats.count("priority", "high"), 2);
    }

    #[test]
    fn test_offices_have_no_breakdown() {
        let stats = collection_stats(&[Office::new("PGO", "Governor")]);
        assert_eq!(stats.total, 1);
        assert!(stats.breakdown.is_empty());
    }
}

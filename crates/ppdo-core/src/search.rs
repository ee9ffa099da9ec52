//! Free-text search: case-insensitive substring containment over each
//! record's designated fields. No tokenization, no ranking.

use crate::record::Record;

/// True if any designated field contains `needle`.
///
/// `needle` must already be lower-cased.
pub fn matches_query<R: Record>(record: &R, needle: &str) -> bool {
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Keep the records matching `query`, in their original order.
///
/// An empty or whitespace-only query keeps everything.
pub fn filter_by_search<'a, R: Record>(rows: Vec<&'a R>, query: &str) -> Vec<&'a R> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return rows;
    }
    rows.into_iter()
        .filter(|r| matches_query(*r, &needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Office;

    fn offices() -> Vec<Office> {
        vec![
            Office::new("PPDO", "Provincial Planning and Development Office"),
            Office::new("PHO", "Provincial Health Office"),
            Office::new("PEO", "Provincial Engineering Office"),
        ]
    }

    #[test]
    fn test_empty_query_keeps_all() {
        let data = offices();
        let rows: Vec<&Office> = data.iter().collect();
        assert_eq!(filter_by_search(rows.clone(), ""), rows);
        assert_eq!(filter_by_search(rows.clone(), "   \t"), rows);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let data = offices();
        let hits = filter_by_search(data.iter().collect(), "HEALTH");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].code, "PHO");
    }

    #[test]
    fn test_matches_any_designated_field() {
        let data = offices();
        let by_name = filter_by_search(data.iter().collect(), "develop");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].code, "PPDO");

        let by_code = filter_by_search(data.iter().collect(), "peo");
        assert_eq!(by_code.len(), 1);
        assert_eq!(by_code[0].code, "PEO");
    }

    #[test]
    fn test_query_is_trimmed() {
        let data = offices();
        let hits = filter_by_search(data.iter().collect(), "  pho  ");
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_no_match_is_empty() {
        let data = offices();
        assert!(filter_by_search(data.iter().collect(), "treasury").is_empty());
    }
}

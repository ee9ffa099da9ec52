//! Terminal and JSON output for list views.

use anyhow::Result;
use ppdo_core::models::{display_date, Concern, Document, DocumentStatus, Label};
use ppdo_core::pins::OfficeRow;
use ppdo_core::ListPage;
use serde::Serialize;

/// A record that can be printed as one row of a column-aligned table.
pub trait TableRow {
    fn headers() -> Vec<String>
    where
        Self: Sized;
    fn cells(&self) -> Vec<String>;
}

impl<T: TableRow> TableRow for &T {
    fn headers() -> Vec<String> {
        T::headers()
    }

    fn cells(&self) -> Vec<String> {
        (*self).cells()
    }
}

fn owned(headers: &[&str]) -> Vec<String> {
    headers.iter().map(|h| h.to_string()).collect()
}

impl<S: DocumentStatus> TableRow for Document<S> {
    fn headers() -> Vec<String> {
        let party = S::PARTY_FIELD.to_uppercase();
        owned(&["NUMBER", "TITLE", party.as_str(), "DATE", "STATUS", "PRIORITY", "ID"])
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.document_number.clone(),
            self.title.clone(),
            self.party.clone(),
            self.date_display(),
            self.status.as_str().to_string(),
            self.priority.as_str().to_string(),
            self.id.clone(),
        ]
    }
}

impl TableRow for Concern {
    fn headers() -> Vec<String> {
        owned(&[
            "NUMBER",
            "TITLE",
            "SUBMITTER",
            "CATEGORY",
            "DEPARTMENT",
            "DATE",
            "STATUS",
            "PRIORITY",
            "ID",
        ])
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.document_number.clone(),
            self.title.clone(),
            self.submitter.clone(),
            self.category.as_str().to_string(),
            self.assigned_department.clone(),
            self.date_display(),
            self.status.as_str().to_string(),
            self.priority.as_str().to_string(),
            self.id.clone(),
        ]
    }
}

impl TableRow for OfficeRow<'_> {
    fn headers() -> Vec<String> {
        owned(&["", "CODE", "NAME", "ADDED"])
    }

    fn cells(&self) -> Vec<String> {
        vec![
            if self.is_favorite { "*" } else { "" }.to_string(),
            self.office.code.clone(),
            self.office.name.clone(),
            self.office
                .created_at
                .map(display_date)
                .unwrap_or_default(),
        ]
    }
}

/// Pagination numbers shown under a table or merged into JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub total_count: usize,
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
}

impl PageMeta {
    pub fn of<R>(page: &ListPage<'_, R>) -> Self {
        Self {
            total_count: page.total_count,
            total_pages: page.total_pages,
            page: page.page,
            page_size: page.page_size,
        }
    }
}

#[derive(Serialize)]
struct JsonPage<'a, T> {
    items: &'a [T],
    #[serde(flatten)]
    meta: PageMeta,
}

pub fn format_table<T: TableRow>(rows: &[T]) -> String {
    let headers = T::headers();
    let cells: Vec<Vec<String>> = rows.iter().map(TableRow::cells).collect();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let line = |row: &[String]| -> String {
        let padded: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{:<w$}", cell))
            .collect();
        padded.join("  ").trim_end().to_string()
    };

    let mut out = String::new();
    out.push_str(&line(&headers));
    out.push('\n');
    out.push_str(&"-".repeat(widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1)));
    out.push('\n');
    for row in &cells {
        out.push_str(&line(row));
        out.push('\n');
    }
    out
}

pub fn format_footer(meta: &PageMeta) -> String {
    let start = meta.page.saturating_sub(1).saturating_mul(meta.page_size);
    let (from, to) = if start >= meta.total_count {
        (0, 0)
    } else {
        (
            start + 1,
            start.saturating_add(meta.page_size).min(meta.total_count),
        )
    };
    format!(
        "Showing {}-{} of {} (page {} of {}, {} per page)",
        from,
        to,
        meta.total_count,
        meta.page,
        meta.total_pages,
        meta.page_size
    )
}

/// Print one page of rows, either as a table or as a JSON object with the
/// pagination numbers alongside `items`.
pub fn print_page<T: TableRow + Serialize>(rows: &[T], meta: PageMeta, json: bool) -> Result<()> {
    if json {
        let out = JsonPage { items: rows, meta };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }
    if meta.total_count == 0 {
        println!("No results.");
        return Ok(());
    }
    if rows.is_empty() {
        println!("No rows on page {}.", meta.page);
    } else {
        print!("{}", format_table(rows));
    }
    println!();
    println!("{}", format_footer(&meta));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ppdo_core::models::Office;

    #[test]
    fn test_table_columns_align() {
        let a = Office::new("PGO", "Governor");
        let b = Office::new("PSWDO", "Social Welfare");
        let rows = vec![
            OfficeRow {
                office: &a,
                is_favorite: true,
            },
            OfficeRow {
                office: &b,
                is_favorite: false,
            },
        ];
        let table = format_table(&rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("   CODE   NAME"));
        assert!(lines[2].starts_with("*  PGO    Governor"));
        assert!(lines[3].starts_with("   PSWDO  Social Welfare"));
    }

    #[test]
    fn test_footer_counts() {
        let meta = PageMeta {
            total_count: 23,
            total_pages: 3,
            page: 3,
            page_size: 10,
        };
        assert_eq!(
            format_footer(&meta),
            "Showing 21-23 of 23 (page 3 of 3, 10 per page)"
        );
    }

    #[test]
    fn test_footer_past_last_page() {
        let meta = PageMeta {
            total_count: 5,
            total_pages: 1,
            page: 4,
            page_size: 10,
        };
        assert_eq!(
            format_footer(&meta),
            "Showing 0-0 of 5 (page 4 of 1, 10 per page)"
        );
    }

    #[test]
    fn test_footer_huge_page_does_not_overflow() {
        let meta = PageMeta {
            total_count: 5,
            total_pages: 1,
            page: usize::MAX,
            page_size: 100,
        };
        assert_eq!(
            format_footer(&meta),
            format!("Showing 0-0 of 5 (page {} of 1, 100 per page)", usize::MAX)
        );
    }
}

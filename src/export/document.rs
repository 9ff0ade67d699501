//! Paginated plain-text document export.
//!
//! Renders the record sequence as a fixed-width table split into pages,
//! each page carrying the document title, the column header and a page
//! footer. Long cells wrap within their column instead of truncating.
//! The image column never embeds image data: it reads "Image Attached"
//! or "No Image".

use crate::model::ReportRecord;

use super::{DATE_FORMAT, EXPORT_COLUMNS};

const DOCUMENT_TITLE: &str = "Reports";
const RECORDS_PER_PAGE: usize = 10;

/// Column widths, aligned with [`EXPORT_COLUMNS`].
const COLUMN_WIDTHS: [usize; 7] = [18, 30, 24, 20, 8, 19, 14];

/// Render `records` as a paginated text document.
pub fn to_document(records: &[ReportRecord]) -> String {
    let total_pages = records.len().div_ceil(RECORDS_PER_PAGE).max(1);
    let mut out = String::new();

    for page in 0..total_pages {
        let start = page * RECORDS_PER_PAGE;
        let end = (start + RECORDS_PER_PAGE).min(records.len());

        out.push_str(DOCUMENT_TITLE);
        out.push('\n');
        out.push('\n');
        out.push_str(&render_row(EXPORT_COLUMNS.map(String::from)));
        out.push_str(&rule());

        for record in &records[start..end] {
            out.push_str(&render_row([
                record.title.clone(),
                record.description.clone(),
                record.category.label().to_string(),
                record.location.clone(),
                record.status.label().to_string(),
                record.submitted_at.format(DATE_FORMAT).to_string(),
                if record.image.is_some() {
                    "Image Attached".to_string()
                } else {
                    "No Image".to_string()
                },
            ]));
        }

        out.push('\n');
        out.push_str(&format!("Page {} of {}\n", page + 1, total_pages));
        if page + 1 < total_pages {
            out.push('\n');
        }
    }

    log::info!("DOCUMENT_EXPORTED rows={} pages={}", records.len(), total_pages);
    out
}

/// Horizontal rule spanning all columns and separators.
fn rule() -> String {
    let width: usize = COLUMN_WIDTHS.iter().sum::<usize>() + (COLUMN_WIDTHS.len() - 1) * 3;
    let mut line = "-".repeat(width);
    line.push('\n');
    line
}

/// Render one logical row, wrapping each cell within its column width and
/// padding shorter cells so the columns stay aligned across wrapped lines.
fn render_row(cells: [String; 7]) -> String {
    let wrapped: Vec<Vec<String>> = cells
        .iter()
        .zip(COLUMN_WIDTHS)
        .map(|(cell, width)| {
            if cell.is_empty() {
                vec![String::new()]
            } else {
                textwrap::wrap(cell, width)
                    .into_iter()
                    .map(|line| line.into_owned())
                    .collect()
            }
        })
        .collect();

    let height = wrapped.iter().map(Vec::len).max().unwrap_or(1);
    let mut out = String::new();

    for line_idx in 0..height {
        let mut parts = Vec::with_capacity(COLUMN_WIDTHS.len());
        for (col, width) in wrapped.iter().zip(COLUMN_WIDTHS) {
            let text = col.get(line_idx).map(String::as_str).unwrap_or("");
            parts.push(format!("{text:<width$}"));
        }
        out.push_str(parts.join(" | ").trim_end());
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Status};
    use chrono::{TimeZone, Utc};

    fn record(id: i64, title: &str, image: Option<&str>) -> ReportRecord {
        ReportRecord {
            id,
            title: title.to_string(),
            description: "desc".to_string(),
            category: Category::WasteManagement,
            location: "Market Rd".to_string(),
            image: image.map(str::to_string),
            status: Status::Resolved,
            submitted_at: Utc.with_ymd_and_hms(2026, 8, 20, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_single_page_layout() {
        let doc = to_document(&[record(1, "Overflowing bin", None)]);

        assert!(doc.starts_with("Reports\n"));
        assert!(doc.contains("Title"));
        assert!(doc.contains("Overflowing bin"));
        assert!(doc.contains("Waste Management"));
        assert!(doc.contains("No Image"));
        assert!(doc.trim_end().ends_with("Page 1 of 1"));
    }

    #[test]
    fn test_image_placeholders() {
        let doc = to_document(&[
            record(1, "with image", Some("blob:abc")),
            record(2, "without", None),
        ]);
        assert!(doc.contains("Image Attached"));
        assert!(doc.contains("No Image"));
        // Never the raw image reference.
        assert!(!doc.contains("blob:abc"));
    }

    #[test]
    fn test_pagination() {
        let records: Vec<ReportRecord> = (0..25)
            .map(|i| record(i, &format!("issue {i}"), None))
            .collect();

        let doc = to_document(&records);

        assert!(doc.contains("Page 1 of 3"));
        assert!(doc.contains("Page 2 of 3"));
        assert!(doc.contains("Page 3 of 3"));
        // Column header repeats on every page.
        assert_eq!(doc.matches("Title").count(), 3);
        // Every record is present.
        assert!(doc.contains("issue 0"));
        assert!(doc.contains("issue 24"));
    }

    #[test]
    fn test_empty_sequence_renders_one_page() {
        let doc = to_document(&[]);
        assert!(doc.contains("Reports"));
        assert!(doc.trim_end().ends_with("Page 1 of 1"));
    }

    #[test]
    fn test_long_description_wraps_instead_of_truncating() {
        let mut r = record(1, "t", None);
        r.description =
            "The stretch between the flyover and the market has been flooded for two weeks now"
                .to_string();
        let doc = to_document(&[r]);
        assert!(doc.contains("flooded"));
        assert!(doc.contains("two weeks"));
        assert!(doc.lines().all(|l| l.len() <= 160));
    }
}

//! CSV export.
//!
//! One header row, then one row per record in sequence order. Records with
//! no attached image carry the literal "No Image" in the image column;
//! otherwise the stored image reference is emitted as-is.

use csv::WriterBuilder;

use crate::model::ReportRecord;

use super::{ExportError, DATE_FORMAT, EXPORT_COLUMNS};

/// Serialize `records` to a CSV document.
pub fn to_csv(records: &[ReportRecord]) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());

    writer.write_record(EXPORT_COLUMNS)?;
    for record in records {
        writer.write_record([
            record.title.as_str(),
            record.description.as_str(),
            record.category.label(),
            record.location.as_str(),
            record.status.label(),
            &record.submitted_at.format(DATE_FORMAT).to_string(),
            record.image.as_deref().unwrap_or("No Image"),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))?;
    let csv = String::from_utf8(bytes)?;

    log::info!("CSV_EXPORTED rows={}", records.len());
    Ok(csv)
}

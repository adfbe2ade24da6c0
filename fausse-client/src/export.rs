//! CSV export of reservation listings
//!
//! Every data field is wrapped in double quotes with embedded quotes doubled,
//! so commas, quotes and line breaks inside a customer name survive a round
//! trip through any standard CSV reader. Rows are separated by CRLF.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use shared::models::ReservationRecord;
use shared::util::DATE_FORMAT;
use thiserror::Error;

pub const CSV_HEADER: &str = "ID,Time Slot,Table,Party Size,Customer,Email";

const ROW_SEPARATOR: &str = "\r\n";

/// CSV rendering errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV buffer error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV output is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Fields of one data row; a missing customer exports as empty fields
pub fn csv_fields(record: &ReservationRecord) -> [String; 6] {
    [
        record.id.to_string(),
        record.time_slot.clone(),
        record.table_number.to_string(),
        record.party_size.to_string(),
        record.customer_name().unwrap_or_default().to_string(),
        record.customer_email().unwrap_or_default().to_string(),
    ]
}

/// Header plus one row per record, no trailing separator
pub fn reservations_csv(records: &[ReservationRecord]) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());
    for record in records {
        writer.write_record(csv_fields(record))?;
    }
    let buffer = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    let rows = String::from_utf8(buffer)?;

    let mut out = String::with_capacity(CSV_HEADER.len() + rows.len());
    out.push_str(CSV_HEADER);
    if let Some(rows) = rows.strip_suffix(ROW_SEPARATOR) {
        out.push_str(ROW_SEPARATOR);
        out.push_str(rows);
    }
    Ok(out)
}

/// `reservations_<YYYY-MM-DD>.csv`
pub fn export_filename(day: NaiveDate) -> String {
    format!("reservations_{}.csv", day.format(DATE_FORMAT))
}

/// A rendered export, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub contents: String,
    pub rows: usize,
}

impl CsvExport {
    pub fn new(records: &[ReservationRecord], day: NaiveDate) -> Result<Self, ExportError> {
        Ok(Self {
            filename: export_filename(day),
            contents: reservations_csv(records)?,
            rows: records.len(),
        })
    }

    /// Write into `dir`, replacing a file of the same name
    pub fn write_to(&self, dir: impl AsRef<Path>) -> std::io::Result<PathBuf> {
        let path = dir.as_ref().join(&self.filename);
        std::fs::write(&path, self.contents.as_bytes())?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::CustomerRef;

    fn record(id: i64, name: Option<&str>) -> ReservationRecord {
        ReservationRecord {
            id,
            time_slot: "2030-05-01T19:00:00".into(),
            table_number: 4,
            party_size: 2,
            customer: name.map(|n| CustomerRef {
                id: Some(1),
                name: Some(n.to_string()),
                email: Some("jane@example.com".into()),
            }),
        }
    }

    #[test]
    fn test_quotes_are_doubled() {
        let csv = reservations_csv(&[record(7, Some("Jane \"JJ\" Doe, Esq."))]).unwrap();
        assert!(csv.ends_with("\"Jane \"\"JJ\"\" Doe, Esq.\",\"jane@example.com\""));
    }

    #[test]
    fn test_rows_and_separator() {
        let csv = reservations_csv(&[record(1, Some("Jane")), record(2, None)]).unwrap();
        assert_eq!(
            csv,
            "ID,Time Slot,Table,Party Size,Customer,Email\r\n\
             \"1\",\"2030-05-01T19:00:00\",\"4\",\"2\",\"Jane\",\"jane@example.com\"\r\n\
             \"2\",\"2030-05-01T19:00:00\",\"4\",\"2\",\"\",\"\""
        );
    }

    #[test]
    fn test_empty_export_is_header_only() {
        assert_eq!(reservations_csv(&[]).unwrap(), CSV_HEADER);
    }

    #[test]
    fn test_filename() {
        let day = NaiveDate::from_ymd_opt(2030, 5, 1).unwrap();
        assert_eq!(export_filename(day), "reservations_2030-05-01.csv");
    }
}

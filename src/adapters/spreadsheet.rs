use crate::adapters::storage::read_source;
use crate::config::DateLocale;
use crate::domain::model::TimesheetEntry;
use crate::domain::ports::EntrySource;
use crate::domain::schema::{Column, FieldKind, RawRow};
use crate::utils::error::{ReportError, Result};
use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use std::io::Cursor;
use std::path::Path;

/// Reads the first (or a named) worksheet of a workbook. Row 1 is the header.
pub struct SpreadsheetReader {
    range: Range<Data>,
    locale: DateLocale,
}

impl SpreadsheetReader {
    pub fn open(path: &Path, sheet: Option<&str>, locale: DateLocale) -> Result<Self> {
        let bytes = read_source(path)?;
        Self::from_bytes(bytes, sheet, locale)
    }

    pub fn from_bytes(bytes: Vec<u8>, sheet: Option<&str>, locale: DateLocale) -> Result<Self> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;

        let range = match sheet {
            Some(name) => {
                if !workbook.sheet_names().iter().any(|s| s == name) {
                    return Err(ReportError::WorksheetNotFound {
                        name: name.to_string(),
                    });
                }
                workbook.worksheet_range(name)?
            }
            None => match workbook.worksheet_range_at(0) {
                Some(range) => range?,
                None => {
                    return Err(ReportError::WorksheetNotFound {
                        name: "#1".to_string(),
                    })
                }
            },
        };

        tracing::debug!(
            "Loaded worksheet range {:?}..{:?}",
            range.start(),
            range.end()
        );

        Ok(Self { range, locale })
    }

    fn raw_rows(&self) -> impl Iterator<Item = RawRow> + '_ {
        let (start_row, start_col) = self.range.start().unwrap_or((0, 0));

        self.range
            .rows()
            .enumerate()
            .skip(1)
            .map(move |(offset, cells)| {
                let values = Column::ALL
                    .iter()
                    .map(|column| {
                        let cell = (column.index() as u32)
                            .checked_sub(start_col)
                            .and_then(|i| cells.get(i as usize));
                        cell_text(cell, column.kind())
                    })
                    .collect();
                RawRow::new(start_row as usize + offset + 1, values)
            })
    }
}

impl EntrySource for SpreadsheetReader {
    fn entries(&self) -> Box<dyn Iterator<Item = Result<TimesheetEntry>> + '_> {
        let locale = self.locale;
        Box::new(
            self.raw_rows()
                .map(move |raw| TimesheetEntry::decode(raw, locale)),
        )
    }
}

/// Text of one cell. Unreadable and blank cells become an empty string so
/// that optional columns never abort the read.
fn cell_text(cell: Option<&Data>, kind: FieldKind) -> String {
    let Some(cell) = cell else {
        return String::new();
    };

    match cell {
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => match kind {
            FieldKind::Date => dt
                .as_datetime()
                .map(|d| d.format("%-d.%-m.%Y").to_string())
                .unwrap_or_default(),
            FieldKind::Duration => days_as_hours_text(dt.as_f64()),
            FieldKind::Text => dt.as_f64().to_string(),
        },
        Data::Error(_) | Data::Empty => String::new(),
    }
}

/// Spreadsheet times are fractions of a day; render as `H:MM`.
fn days_as_hours_text(days: f64) -> String {
    let minutes = (days * 24.0 * 60.0).round() as i64;
    format!("{}:{:02}", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_and_error_cells_read_as_empty() {
        assert_eq!(cell_text(None, FieldKind::Text), "");
        assert_eq!(cell_text(Some(&Data::Empty), FieldKind::Text), "");
        assert_eq!(
            cell_text(Some(&Data::Error(calamine::CellErrorType::NA)), FieldKind::Text),
            ""
        );
    }

    #[test]
    fn test_scalar_cells_read_as_text() {
        assert_eq!(cell_text(Some(&Data::String("P1".into())), FieldKind::Text), "P1");
        assert_eq!(cell_text(Some(&Data::Int(4021)), FieldKind::Text), "4021");
        assert_eq!(cell_text(Some(&Data::Float(4021.0)), FieldKind::Text), "4021");
        assert_eq!(cell_text(Some(&Data::Float(1.5)), FieldKind::Text), "1.5");
    }

    #[test]
    fn test_fraction_of_day_as_hours() {
        assert_eq!(days_as_hours_text(7.5 / 24.0), "7:30");
        assert_eq!(days_as_hours_text(0.0), "0:00");
        assert_eq!(days_as_hours_text(10.0 / 24.0 + 5.0 / 1440.0), "10:05");
    }

    #[test]
    fn test_garbage_bytes_are_not_a_workbook() {
        let result = SpreadsheetReader::from_bytes(b"not a workbook".to_vec(), None, DateLocale::Fi);
        assert!(matches!(result, Err(ReportError::SpreadsheetError(_))));
    }
}

use crate::adapters::storage::read_source;
use crate::config::{DateLocale, TextEncoding};
use crate::domain::model::TimesheetEntry;
use crate::domain::ports::EntrySource;
use crate::domain::schema::{RawRow, COLUMN_COUNT};
use crate::utils::encoding;
use crate::utils::error::Result;
use std::path::Path;

pub const FIELD_DELIMITER: u8 = b';';

/// Reads a semicolon separated text export. The first line is the header.
///
/// Quoting is not part of the format: a `;` inside a value splits the field.
pub struct DelimitedTextReader {
    content: String,
    locale: DateLocale,
}

impl DelimitedTextReader {
    pub fn open(path: &Path, encoding: TextEncoding, locale: DateLocale) -> Result<Self> {
        let bytes = read_source(path)?;
        Ok(Self::from_bytes(&bytes, encoding, locale))
    }

    pub fn from_bytes(bytes: &[u8], encoding: TextEncoding, locale: DateLocale) -> Self {
        Self {
            content: encoding::decode(bytes, encoding),
            locale,
        }
    }

    fn raw_rows(&self) -> impl Iterator<Item = Result<RawRow>> + '_ {
        // The header is the first physical line, even a blank one.
        let body = self
            .content
            .split_once('\n')
            .map(|(_, rest)| rest)
            .unwrap_or_default();

        csv::ReaderBuilder::new()
            .delimiter(FIELD_DELIMITER)
            .quoting(false)
            .has_headers(false)
            .flexible(true)
            .from_reader(body.as_bytes())
            .into_records()
            .map(|record| {
                let record = record?;
                let line = record
                    .position()
                    .map(|p| p.line() as usize + 1)
                    .unwrap_or_default();
                if record.len() != COLUMN_COUNT {
                    tracing::warn!(
                        "Line {} has {} fields, expected {}; decoding positionally",
                        line,
                        record.len(),
                        COLUMN_COUNT
                    );
                }
                Ok(RawRow::new(line, record.iter().map(str::to_string).collect()))
            })
    }
}

impl EntrySource for DelimitedTextReader {
    fn entries(&self) -> Box<dyn Iterator<Item = Result<TimesheetEntry>> + '_> {
        let locale = self.locale;
        Box::new(
            self.raw_rows()
                .map(move |raw| raw.and_then(|raw| TimesheetEntry::decode(raw, locale))),
        )
    }
}

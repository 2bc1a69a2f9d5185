use crate::config::{DateLocale, InputFormat, RoundingMode, TextEncoding};
use crate::domain::model::{SummaryRow, TimesheetEntry, TransformResult};
use crate::utils::error::Result;
use std::path::Path;

/// A reader positioned after the header row.
pub trait EntrySource {
    fn entries(&self) -> Box<dyn Iterator<Item = Result<TimesheetEntry>> + '_>;

    /// Stops at the first row that fails to decode.
    fn read_all(&self) -> Result<Vec<TimesheetEntry>> {
        self.entries().collect()
    }
}

pub trait Storage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &Path;
    fn input_format(&self) -> Result<InputFormat>;
    fn sheet(&self) -> Option<&str>;
    fn input_encoding(&self) -> TextEncoding;
    fn date_locale(&self) -> DateLocale;
    fn output_path(&self) -> &Path;
    fn output_encoding(&self) -> TextEncoding;
    fn decimal_separator(&self) -> char;
    fn workday_length(&self) -> f64;
    fn rounding(&self) -> RoundingMode;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<TimesheetEntry>>;
    fn transform(&self, data: Vec<TimesheetEntry>) -> Result<TransformResult>;
    fn load(&self, rows: &[SummaryRow]) -> Result<String>;
}

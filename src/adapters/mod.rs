// Adapters layer: concrete readers, the report writer and filesystem storage.

pub mod delimited;
pub mod report;
pub mod spreadsheet;
pub mod storage;

pub use delimited::DelimitedTextReader;
pub use report::ReportWriter;
pub use spreadsheet::SpreadsheetReader;
pub use storage::LocalStorage;

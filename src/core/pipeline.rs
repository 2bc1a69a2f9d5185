use crate::adapters::{DelimitedTextReader, ReportWriter, SpreadsheetReader};
use crate::config::InputFormat;
use crate::core::aggregate::Aggregator;
use crate::core::{
    ConfigProvider, EntrySource, Pipeline, Result, Storage, SummaryRow, TimesheetEntry,
    TransformResult,
};

pub struct TimesheetPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> TimesheetPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for TimesheetPipeline<S, C> {
    fn extract(&self) -> Result<Vec<TimesheetEntry>> {
        let path = self.config.input_path();
        let format = self.config.input_format()?;
        tracing::debug!("Reading {:?} input from {}", format, path.display());

        let bytes = self.storage.read_file(path)?;
        tracing::debug!("Read {} bytes", bytes.len());

        match format {
            InputFormat::Delimited => DelimitedTextReader::from_bytes(
                &bytes,
                self.config.input_encoding(),
                self.config.date_locale(),
            )
            .read_all(),
            InputFormat::Spreadsheet | InputFormat::Auto => {
                SpreadsheetReader::from_bytes(bytes, self.config.sheet(), self.config.date_locale())?
                    .read_all()
            }
        }
    }

    fn transform(&self, data: Vec<TimesheetEntry>) -> Result<TransformResult> {
        let aggregator = Aggregator::new(self.config.workday_length(), self.config.rounding());
        let total_hours = data.iter().map(|e| e.allocated.total_hours()).sum();
        let summary_rows = aggregator.aggregate(&data);

        Ok(TransformResult {
            summary_rows,
            entry_count: data.len(),
            total_hours,
        })
    }

    fn load(&self, rows: &[SummaryRow]) -> Result<String> {
        let writer = ReportWriter::new(self.config.output_encoding(), self.config.decimal_separator());
        let bytes = writer.encode(rows);

        let output_path = self.config.output_path();
        tracing::debug!("Writing report ({} bytes) to {}", bytes.len(), output_path.display());
        self.storage.write_file(output_path, &bytes)?;

        Ok(output_path.display().to_string())
    }
}

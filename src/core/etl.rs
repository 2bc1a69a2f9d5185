use crate::core::{Pipeline, TransformResult};
use crate::utils::error::Result;
use std::time::Instant;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Extract and transform without writing anything.
    pub fn preview(&self) -> Result<TransformResult> {
        tracing::info!("Extracting timesheet entries...");
        let entries = self.pipeline.extract()?;
        tracing::info!("Extracted {} entries", entries.len());

        tracing::info!("Aggregating...");
        let result = self.pipeline.transform(entries)?;
        tracing::info!(
            "Aggregated {} entries into {} rows ({:.2} hours in total)",
            result.entry_count,
            result.summary_rows.len(),
            result.total_hours
        );

        Ok(result)
    }

    /// Runs the whole pipeline. Nothing is written unless extract and
    /// transform both succeed.
    pub fn run(&self) -> Result<String> {
        let started = Instant::now();
        let result = self.preview()?;

        tracing::info!("Writing report...");
        let output_path = self.pipeline.load(&result.summary_rows)?;
        tracing::info!("Report saved to {} in {:?}", output_path, started.elapsed());

        Ok(output_path)
    }
}

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{DelimitedTextReader, LocalStorage, ReportWriter, SpreadsheetReader};
pub use config::ReportSettings;
pub use crate::core::{aggregate::Aggregator, etl::EtlEngine, pipeline::TimesheetPipeline};
pub use domain::model::{SummaryRow, TimesheetEntry, WorkDuration};
pub use domain::ports::EntrySource;
pub use utils::error::{ReportError, Result};

pub mod aggregate;
pub mod etl;
pub mod pipeline;

pub use crate::domain::model::{SummaryRow, TimesheetEntry, TransformResult};
pub use crate::domain::ports::{ConfigProvider, EntrySource, Pipeline, Storage};
pub use crate::utils::error::Result;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Input file not found: {path}")]
    InputMissing { path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    SpreadsheetError(#[from] calamine::Error),

    #[error("Worksheet not found: {name}")]
    WorksheetNotFound { name: String },

    #[error("Malformed date '{value}' on row {row}")]
    MalformedDate { row: usize, value: String },

    #[error("Malformed duration '{value}' on row {row}, expected H:MM")]
    MalformedDuration { row: usize, value: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ReportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReportError::InputMissing { .. }
            | ReportError::SpreadsheetError(_)
            | ReportError::WorksheetNotFound { .. } => ErrorCategory::Input,
            ReportError::MalformedDate { .. }
            | ReportError::MalformedDuration { .. }
            | ReportError::CsvError(_) => ErrorCategory::Data,
            ReportError::ConfigError { .. } | ReportError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            ReportError::IoError(_) | ReportError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Input | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the binary.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ReportError::InputMissing { .. } => {
                "Place the timesheet export next to the executable or pass --input"
            }
            ReportError::SpreadsheetError(_) => {
                "Check that the input is a valid workbook, or use --format delimited for text exports"
            }
            ReportError::WorksheetNotFound { .. } => {
                "Check the worksheet name, or omit --sheet to read the first worksheet"
            }
            ReportError::MalformedDate { .. } => {
                "Fix the date cell in the export (expected d.M.yyyy) and run again"
            }
            ReportError::MalformedDuration { .. } => {
                "Fix the allocated hours cell in the export (expected H:MM) and run again"
            }
            ReportError::CsvError(_) => "Check that the text export is semicolon separated",
            ReportError::ConfigError { .. } | ReportError::InvalidConfigValueError { .. } => {
                "Check the command line flags and the configuration file"
            }
            ReportError::IoError(_) => "Check file permissions and free disk space",
            ReportError::SerializationError(_) => "Run again without --dry-run",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ReportError::InputMissing { path } => format!("Timesheet export not found: {}", path),
            ReportError::MalformedDate { row, value } => {
                format!("Row {} has an unreadable date: '{}'", row, value)
            }
            ReportError::MalformedDuration { row, value } => {
                format!("Row {} has unreadable allocated hours: '{}'", row, value)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;

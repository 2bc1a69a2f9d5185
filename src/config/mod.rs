#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::{ReportError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT_FILENAME: &str = "Tuntiraportti.xlsx";
pub const DEFAULT_OUTPUT_FILENAME: &str = "Tuntiraportti_projekteittain.csv";
pub const DEFAULT_WORKDAY_LENGTH: f64 = 7.25;

pub const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];
pub const DELIMITED_EXTENSIONS: &[&str] = &["csv", "txt"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum InputFormat {
    /// Pick by file extension
    #[default]
    Auto,
    /// Binary spreadsheet workbook
    Spreadsheet,
    /// Semicolon separated text
    Delimited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum TextEncoding {
    #[default]
    Latin1,
    Utf8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum DateLocale {
    /// Finnish conventions (d.M.yyyy), ISO dates also accepted
    #[default]
    Fi,
    /// ISO 8601 (yyyy-MM-dd) only
    Iso,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum RoundingMode {
    /// Banker's rounding: midpoints go to the even neighbour
    #[default]
    HalfToEven,
    /// Midpoints go away from zero
    HalfAwayFromZero,
}

/// Fully resolved run configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSettings {
    pub input_path: PathBuf,
    pub input_format: InputFormat,
    pub sheet: Option<String>,
    pub input_encoding: TextEncoding,
    pub date_locale: DateLocale,
    pub output_path: PathBuf,
    pub output_encoding: TextEncoding,
    pub decimal_separator: char,
    pub workday_length: f64,
    pub rounding: RoundingMode,
}

impl ReportSettings {
    /// 以執行檔所在目錄為基準的預設設定
    pub fn with_base_dir(base_dir: &Path) -> Self {
        Self {
            input_path: base_dir.join(DEFAULT_INPUT_FILENAME),
            input_format: InputFormat::Auto,
            sheet: None,
            input_encoding: TextEncoding::Latin1,
            date_locale: DateLocale::Fi,
            output_path: base_dir.join(DEFAULT_OUTPUT_FILENAME),
            output_encoding: TextEncoding::Latin1,
            decimal_separator: '.',
            workday_length: DEFAULT_WORKDAY_LENGTH,
            rounding: RoundingMode::HalfToEven,
        }
    }

    /// Directory holding the running executable, or `.` when it cannot be determined.
    pub fn executable_dir() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Resolves `Auto` against the input file extension.
    pub fn effective_input_format(&self) -> Result<InputFormat> {
        match self.input_format {
            InputFormat::Auto => {
                let extension = self
                    .input_path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| ext.to_ascii_lowercase())
                    .unwrap_or_default();
                if SPREADSHEET_EXTENSIONS.contains(&extension.as_str()) {
                    Ok(InputFormat::Spreadsheet)
                } else if DELIMITED_EXTENSIONS.contains(&extension.as_str()) {
                    Ok(InputFormat::Delimited)
                } else {
                    Err(ReportError::ConfigError {
                        message: format!(
                            "Cannot infer input format from '{}'; use --format spreadsheet or --format delimited",
                            self.input_path.display()
                        ),
                    })
                }
            }
            explicit => Ok(explicit),
        }
    }
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self::with_base_dir(Path::new("."))
    }
}

impl Validate for ReportSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input.path", &self.input_path)?;
        validation::validate_path("output.path", &self.output_path)?;

        if self.input_format == InputFormat::Auto {
            let allowed: Vec<&str> = SPREADSHEET_EXTENSIONS
                .iter()
                .chain(DELIMITED_EXTENSIONS)
                .copied()
                .collect();
            validation::validate_file_extension("input.path", &self.input_path, &allowed)?;
        }

        if let Some(sheet) = &self.sheet {
            validation::validate_non_empty_string("input.sheet", sheet)?;
        }

        validation::validate_range("report.workday_length", self.workday_length, 0.01, 24.0)?;
        validation::validate_separator("output.decimal_separator", self.decimal_separator, &[';'])?;

        Ok(())
    }
}

impl ConfigProvider for ReportSettings {
    fn input_path(&self) -> &Path {
        &self.input_path
    }

    fn input_format(&self) -> Result<InputFormat> {
        self.effective_input_format()
    }

    fn sheet(&self) -> Option<&str> {
        self.sheet.as_deref()
    }

    fn input_encoding(&self) -> TextEncoding {
        self.input_encoding
    }

    fn date_locale(&self) -> DateLocale {
        self.date_locale
    }

    fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn output_encoding(&self) -> TextEncoding {
        self.output_encoding
    }

    fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    fn workday_length(&self) -> f64 {
        self.workday_length
    }

    fn rounding(&self) -> RoundingMode {
        self.rounding
    }
}

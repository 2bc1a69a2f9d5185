use crate::config::toml_config::TomlConfig;
use crate::config::{DateLocale, InputFormat, ReportSettings, RoundingMode, TextEncoding};
use crate::utils::error::Result;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "tuntiraportti")]
#[command(about = "Summarise a timesheet export into hours and workdays per unit, activity and project")]
pub struct CliConfig {
    /// Timesheet export to read [default: Tuntiraportti.xlsx next to the executable]
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Report file to write [default: Tuntiraportti_projekteittain.csv next to the executable]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub format: Option<InputFormat>,

    /// Worksheet to read instead of the first one
    #[arg(long)]
    pub sheet: Option<String>,

    #[arg(long, value_enum)]
    pub input_encoding: Option<TextEncoding>,

    #[arg(long, value_enum)]
    pub date_locale: Option<DateLocale>,

    #[arg(long, value_enum)]
    pub output_encoding: Option<TextEncoding>,

    #[arg(long)]
    pub decimal_separator: Option<char>,

    /// Hours in one workday
    #[arg(long)]
    pub workday_length: Option<f64>,

    #[arg(long, value_enum)]
    pub rounding: Option<RoundingMode>,

    /// Print the summary as JSON instead of writing the report
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl CliConfig {
    /// Builds the run settings: defaults, then the TOML file, then explicit flags.
    pub fn resolve(&self, base_dir: &Path, working_dir: &Path) -> Result<ReportSettings> {
        let mut settings = ReportSettings::with_base_dir(base_dir);

        if let Some(config_path) = &self.config {
            let file_config = TomlConfig::from_file(working_dir.join(config_path))?;
            file_config.apply_to(&mut settings, working_dir);
        }

        self.apply_to(&mut settings, working_dir);
        Ok(settings)
    }

    pub fn apply_to(&self, settings: &mut ReportSettings, working_dir: &Path) {
        if let Some(input) = &self.input {
            settings.input_path = working_dir.join(input);
        }
        if let Some(output) = &self.output {
            settings.output_path = working_dir.join(output);
        }
        if let Some(format) = self.format {
            settings.input_format = format;
        }
        if let Some(sheet) = &self.sheet {
            settings.sheet = Some(sheet.clone());
        }
        if let Some(encoding) = self.input_encoding {
            settings.input_encoding = encoding;
        }
        if let Some(locale) = self.date_locale {
            settings.date_locale = locale;
        }
        if let Some(encoding) = self.output_encoding {
            settings.output_encoding = encoding;
        }
        if let Some(separator) = self.decimal_separator {
            settings.decimal_separator = separator;
        }
        if let Some(length) = self.workday_length {
            settings.workday_length = length;
        }
        if let Some(rounding) = self.rounding {
            settings.rounding = rounding;
        }
    }
}

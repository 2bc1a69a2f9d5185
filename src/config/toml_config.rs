use crate::config::{DateLocale, InputFormat, ReportSettings, RoundingMode, TextEncoding};
use crate::utils::error::{ReportError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    pub path: Option<PathBuf>,
    pub format: Option<InputFormat>,
    pub sheet: Option<String>,
    pub encoding: Option<TextEncoding>,
    pub date_locale: Option<DateLocale>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub path: Option<PathBuf>,
    pub encoding: Option<TextEncoding>,
    pub decimal_separator: Option<char>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    pub workday_length: Option<f64>,
    pub rounding: Option<RoundingMode>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ReportError::ConfigError {
                message: format!("Configuration file not found: {}", path.display()),
            },
            _ => ReportError::IoError(e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ReportError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${REPORT_DIR})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// Overlays every value present in the file onto `settings`.
    pub fn apply_to(&self, settings: &mut ReportSettings, working_dir: &Path) {
        if let Some(path) = &self.input.path {
            settings.input_path = working_dir.join(path);
        }
        if let Some(format) = self.input.format {
            settings.input_format = format;
        }
        if let Some(sheet) = &self.input.sheet {
            settings.sheet = Some(sheet.clone());
        }
        if let Some(encoding) = self.input.encoding {
            settings.input_encoding = encoding;
        }
        if let Some(locale) = self.input.date_locale {
            settings.date_locale = locale;
        }
        if let Some(path) = &self.output.path {
            settings.output_path = working_dir.join(path);
        }
        if let Some(encoding) = self.output.encoding {
            settings.output_encoding = encoding;
        }
        if let Some(separator) = self.output.decimal_separator {
            settings.decimal_separator = separator;
        }
        if let Some(length) = self.report.workday_length {
            settings.workday_length = length;
        }
        if let Some(rounding) = self.report.rounding {
            settings.rounding = rounding;
        }
    }
}

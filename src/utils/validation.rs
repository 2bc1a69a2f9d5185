use crate::utils::error::{ReportError, Result};
use std::collections::HashSet;
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let text = path.to_string_lossy();
    if text.is_empty() {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: text.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if text.contains('\0') {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: text.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extension(field_name: &str, path: &Path, allowed_extensions: &[&str]) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    match path.extension().and_then(|ext| ext.to_str()) {
        Some(extension) if allowed_set.contains(extension.to_ascii_lowercase().as_str()) => Ok(()),
        Some(extension) => Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.display().to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.display().to_string(),
            reason: "File has no extension; pass --format explicitly".to_string(),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // NaN fails both comparisons, so check containment rather than exclusion
    if !(value >= min && value <= max) {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_separator(field_name: &str, value: char, reserved: &[char]) -> Result<()> {
    if reserved.contains(&value) || value.is_control() {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.escape_default().to_string(),
            reason: "Separator collides with the report's field or line delimiter".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input", Path::new("Tuntiraportti.xlsx")).is_ok());
        assert!(validate_path("input", Path::new("")).is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        let allowed = ["xlsx", "csv"];
        assert!(validate_file_extension("input", Path::new("a.xlsx"), &allowed).is_ok());
        assert!(validate_file_extension("input", Path::new("a.CSV"), &allowed).is_ok());
        assert!(validate_file_extension("input", Path::new("a.pdf"), &allowed).is_err());
        assert!(validate_file_extension("input", Path::new("noext"), &allowed).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("workday_length", 7.25, 0.01, 24.0).is_ok());
        assert!(validate_range("workday_length", 0.0, 0.01, 24.0).is_err());
        assert!(validate_range("workday_length", f64::NAN, 0.01, 24.0).is_err());
    }

    #[test]
    fn test_validate_separator() {
        assert!(validate_separator("decimal_separator", ',', &[';']).is_ok());
        assert!(validate_separator("decimal_separator", ';', &[';']).is_err());
        assert!(validate_separator("decimal_separator", '\n', &[';']).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("sheet", "Taul1").is_ok());
        assert!(validate_non_empty_string("sheet", "  ").is_err());
    }
}

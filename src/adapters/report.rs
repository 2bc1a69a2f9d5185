use crate::config::TextEncoding;
use crate::domain::model::SummaryRow;
use crate::domain::schema::OUTPUT_HEADER;
use crate::utils::encoding;

/// Renders summary rows as the semicolon separated report.
#[derive(Debug, Clone, Copy)]
pub struct ReportWriter {
    encoding: TextEncoding,
    decimal_separator: char,
}

impl ReportWriter {
    pub fn new(encoding: TextEncoding, decimal_separator: char) -> Self {
        Self {
            encoding,
            decimal_separator,
        }
    }

    /// Header line, then one line per row joined by `\n`. The header is always
    /// newline terminated; the last row never is.
    pub fn render(&self, rows: &[SummaryRow]) -> String {
        let lines: Vec<String> = rows.iter().map(|row| self.render_row(row)).collect();
        format!("{}\n{}", OUTPUT_HEADER, lines.join("\n"))
    }

    pub fn encode(&self, rows: &[SummaryRow]) -> Vec<u8> {
        let text = self.render(rows);
        let (bytes, replaced) = encoding::encode(&text, self.encoding);
        if replaced > 0 {
            tracing::warn!(
                "{} character(s) not representable in {:?} were written as '?'",
                replaced,
                self.encoding
            );
        }
        bytes
    }

    fn render_row(&self, row: &SummaryRow) -> String {
        [
            row.unit_code.as_str(),
            row.unit_name.as_str(),
            row.activity_code.as_str(),
            row.activity_name.as_str(),
            row.project_code.as_str(),
            row.project_name.as_str(),
            self.format_number(row.allocated_hours).as_str(),
            self.format_number(row.allocated_days).as_str(),
        ]
        .join(";")
    }

    /// Shortest round-trip text (`5.5`, `5`, `0.76`) with the configured separator.
    fn format_number(&self, value: f64) -> String {
        let text = value.to_string();
        if self.decimal_separator == '.' {
            text
        } else {
            text.replace('.', &self.decimal_separator.to_string())
        }
    }
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new(TextEncoding::Latin1, '.')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(project: &str, hours: f64, days: f64) -> SummaryRow {
        SummaryRow {
            unit_code: "U1".to_string(),
            unit_name: "Hallinto".to_string(),
            activity_code: "A1".to_string(),
            activity_name: "Kokoukset".to_string(),
            project_code: project.to_string(),
            project_name: "Yleiskulut".to_string(),
            allocated_hours: hours,
            allocated_days: days,
        }
    }

    #[test]
    fn test_render_joins_lines_without_trailing_newline() {
        let text = ReportWriter::default().render(&[row("P1", 5.5, 0.76), row("P2", 8.0, 1.1)]);
        assert_eq!(
            text,
            format!(
                "{}\nU1;Hallinto;A1;Kokoukset;P1;Yleiskulut;5.5;0.76\nU1;Hallinto;A1;Kokoukset;P2;Yleiskulut;8;1.1",
                OUTPUT_HEADER
            )
        );
    }

    #[test]
    fn test_render_empty_report_is_header_and_newline() {
        let text = ReportWriter::default().render(&[]);
        assert_eq!(text, format!("{}\n", OUTPUT_HEADER));
    }

    #[test]
    fn test_decimal_separator() {
        let text = ReportWriter::new(TextEncoding::Latin1, ',').render(&[row("P1", 5.5, 0.76)]);
        assert!(text.ends_with(";5,5;0,76"));
    }

    #[test]
    fn test_header_is_latin1_encoded() {
        let bytes = ReportWriter::default().encode(&[]);
        let expected: Vec<u8> = OUTPUT_HEADER.chars().map(|c| c as u8).chain([b'\n']).collect();
        assert_eq!(bytes, expected);
        assert!(!bytes.contains(&0xC3));
    }

    #[test]
    fn test_utf8_output() {
        let bytes = ReportWriter::new(TextEncoding::Utf8, '.').encode(&[]);
        assert!(bytes.starts_with("ToimintaYksikkö".as_bytes()));
    }
}

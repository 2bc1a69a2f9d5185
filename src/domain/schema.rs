//! Positional layout of a timesheet export row.
//!
//! Both the workbook and the text export carry the same eighteen columns in
//! the same order. Readers only know how to turn a source row into strings;
//! which position means what lives here.

pub const COLUMN_COUNT: usize = 18;

pub const OUTPUT_HEADER: &str =
    "ToimintaYksikkö;ToimintaYksikköName;Toiminto;ToimintoName;Project;ProjectName;AllocatedHours;AllocatedDays";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Date,
    Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    ContractNumber,
    Title,
    Date,
    AllocatedHours,
    UnitCode,
    UnitName,
    ActivityCode,
    ActivityName,
    ProjectCode,
    ProjectName,
    DeliverableCode,
    DeliverableName,
    Reserved1Code,
    Reserved1Name,
    Reserved2Code,
    Reserved2Name,
    Explanation,
    State,
}

impl Column {
    /// Columns in source order; `ALL[i].index() == i`.
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::ContractNumber,
        Column::Title,
        Column::Date,
        Column::AllocatedHours,
        Column::UnitCode,
        Column::UnitName,
        Column::ActivityCode,
        Column::ActivityName,
        Column::ProjectCode,
        Column::ProjectName,
        Column::DeliverableCode,
        Column::DeliverableName,
        Column::Reserved1Code,
        Column::Reserved1Name,
        Column::Reserved2Code,
        Column::Reserved2Name,
        Column::Explanation,
        Column::State,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Column::ContractNumber => "ContractNumber",
            Column::Title => "Title",
            Column::Date => "Date",
            Column::AllocatedHours => "AllocatedHours",
            Column::UnitCode => "ToimintaYksikkö",
            Column::UnitName => "ToimintaYksikköName",
            Column::ActivityCode => "Toiminto",
            Column::ActivityName => "ToimintoName",
            Column::ProjectCode => "Project",
            Column::ProjectName => "ProjectName",
            Column::DeliverableCode => "Suorite",
            Column::DeliverableName => "SuoriteName",
            Column::Reserved1Code => "Seuko1",
            Column::Reserved1Name => "Seuko1Name",
            Column::Reserved2Code => "Seuko2",
            Column::Reserved2Name => "Seuko2Name",
            Column::Explanation => "Explanation",
            Column::State => "State",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Column::Date => FieldKind::Date,
            Column::AllocatedHours => FieldKind::Duration,
            _ => FieldKind::Text,
        }
    }
}

/// One source row as text, before date and duration decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based row/line number in the source; the header is row 1.
    pub row: usize,
    values: Vec<String>,
}

impl RawRow {
    /// Pads missing trailing fields with empty strings and drops any beyond the schema.
    pub fn new(row: usize, mut values: Vec<String>) -> Self {
        values.resize(COLUMN_COUNT, String::new());
        Self { row, values }
    }

    pub fn get(&self, column: Column) -> &str {
        &self.values[column.index()]
    }

    pub fn take(&mut self, column: Column) -> String {
        std::mem::take(&mut self.values[column.index()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_are_listed_in_positional_order() {
        for (position, column) in Column::ALL.iter().enumerate() {
            assert_eq!(column.index(), position);
        }
        assert_eq!(Column::ALL[8], Column::ProjectCode);
        assert_eq!(Column::ALL[17], Column::State);
    }

    #[test]
    fn test_only_date_and_hours_need_decoding() {
        let decoded: Vec<Column> = Column::ALL
            .iter()
            .copied()
            .filter(|c| c.kind() != FieldKind::Text)
            .collect();
        assert_eq!(decoded, vec![Column::Date, Column::AllocatedHours]);
    }

    #[test]
    fn test_raw_row_is_normalised_to_schema_width() {
        let short = RawRow::new(2, vec!["C-1".to_string(), "Title".to_string()]);
        assert_eq!(short.get(Column::Title), "Title");
        assert_eq!(short.get(Column::State), "");

        let long = RawRow::new(3, vec!["x".to_string(); COLUMN_COUNT + 2]);
        assert_eq!(long.values.len(), COLUMN_COUNT);
    }
}

use crate::config::DateLocale;
use crate::domain::fields::{parse_date, parse_duration};
use crate::domain::schema::{Column, RawRow};
use crate::utils::error::{ReportError, Result};
use chrono::NaiveDate;
use serde::Serialize;

/// Time allocated on one day, as booked: whole hours plus minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkDuration {
    pub hours: i64,
    pub minutes: i64,
}

impl WorkDuration {
    pub fn new(hours: i64, minutes: i64) -> Self {
        Self { hours, minutes }
    }

    pub fn total_minutes(&self) -> i64 {
        self.hours * 60 + self.minutes
    }

    pub fn total_hours(&self) -> f64 {
        self.total_minutes() as f64 / 60.0
    }
}

/// One daily time allocation row from the export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimesheetEntry {
    pub contract_number: String,
    pub title: String,
    pub date: NaiveDate,
    pub allocated: WorkDuration,
    pub unit_code: String,
    pub unit_name: String,
    pub activity_code: String,
    pub activity_name: String,
    pub project_code: String,
    pub project_name: String,
    pub deliverable_code: String,
    pub deliverable_name: String,
    pub reserved1_code: String,
    pub reserved1_name: String,
    pub reserved2_code: String,
    pub reserved2_name: String,
    pub explanation: String,
    pub state: String,
}

impl TimesheetEntry {
    /// Decodes a raw row; a bad date or duration fails the whole row.
    pub fn decode(mut raw: RawRow, locale: DateLocale) -> Result<Self> {
        let date = parse_date(raw.get(Column::Date), locale).ok_or_else(|| {
            ReportError::MalformedDate {
                row: raw.row,
                value: raw.get(Column::Date).to_string(),
            }
        })?;
        let allocated = parse_duration(raw.get(Column::AllocatedHours)).ok_or_else(|| {
            ReportError::MalformedDuration {
                row: raw.row,
                value: raw.get(Column::AllocatedHours).to_string(),
            }
        })?;

        Ok(Self {
            contract_number: raw.take(Column::ContractNumber),
            title: raw.take(Column::Title),
            date,
            allocated,
            unit_code: raw.take(Column::UnitCode),
            unit_name: raw.take(Column::UnitName),
            activity_code: raw.take(Column::ActivityCode),
            activity_name: raw.take(Column::ActivityName),
            project_code: raw.take(Column::ProjectCode),
            project_name: raw.take(Column::ProjectName),
            deliverable_code: raw.take(Column::DeliverableCode),
            deliverable_name: raw.take(Column::DeliverableName),
            reserved1_code: raw.take(Column::Reserved1Code),
            reserved1_name: raw.take(Column::Reserved1Name),
            reserved2_code: raw.take(Column::Reserved2Code),
            reserved2_name: raw.take(Column::Reserved2Name),
            explanation: raw.take(Column::Explanation),
            state: raw.take(Column::State),
        })
    }

    pub fn group_key(&self) -> GroupKey {
        GroupKey {
            unit_code: self.unit_code.clone(),
            project_code: self.project_code.clone(),
            activity_code: self.activity_code.clone(),
        }
    }
}

/// Aggregation key. Codes only; display names never split a group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey {
    pub unit_code: String,
    pub project_code: String,
    pub activity_code: String,
}

/// One line of the summary report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub unit_code: String,
    pub unit_name: String,
    pub activity_code: String,
    pub activity_name: String,
    pub project_code: String,
    pub project_name: String,
    pub allocated_hours: f64,
    pub allocated_days: f64,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub summary_rows: Vec<SummaryRow>,
    pub entry_count: usize,
    /// Unrounded sum over every entry.
    pub total_hours: f64,
}

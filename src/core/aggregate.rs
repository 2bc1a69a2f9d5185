use crate::config::RoundingMode;
use crate::domain::model::{GroupKey, SummaryRow, TimesheetEntry};
use std::collections::HashMap;

/// Rounds to `digits` decimal places as `round(value * 10^digits) / 10^digits`.
pub fn round_to(value: f64, digits: i32, mode: RoundingMode) -> f64 {
    let power = 10f64.powi(digits);
    let scaled = value * power;
    let rounded = match mode {
        RoundingMode::HalfToEven => scaled.round_ties_even(),
        RoundingMode::HalfAwayFromZero => scaled.round(),
    };
    rounded / power
}

struct Group<'a> {
    first: &'a TimesheetEntry,
    hours: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct Aggregator {
    workday_length: f64,
    rounding: RoundingMode,
}

impl Aggregator {
    pub fn new(workday_length: f64, rounding: RoundingMode) -> Self {
        Self {
            workday_length,
            rounding,
        }
    }

    /// One row per distinct (unit, project, activity) code triple, sorted by
    /// project code. Display names come from the first entry seen for the key.
    pub fn aggregate(&self, entries: &[TimesheetEntry]) -> Vec<SummaryRow> {
        let mut index: HashMap<GroupKey, usize> = HashMap::new();
        let mut groups: Vec<Group<'_>> = Vec::new();

        for entry in entries {
            let slot = *index.entry(entry.group_key()).or_insert_with(|| {
                groups.push(Group {
                    first: entry,
                    hours: 0.0,
                });
                groups.len() - 1
            });
            groups[slot].hours += entry.allocated.total_hours();
        }

        tracing::debug!(
            "Grouped {} entries into {} unit/project/activity groups",
            entries.len(),
            groups.len()
        );

        let mut rows: Vec<SummaryRow> = groups
            .into_iter()
            .map(|group| self.summarise(group))
            .collect();

        // stable: equal project codes keep order of first appearance
        rows.sort_by(|a, b| a.project_code.cmp(&b.project_code));
        rows
    }

    fn summarise(&self, group: Group<'_>) -> SummaryRow {
        let first = group.first;
        SummaryRow {
            unit_code: first.unit_code.clone(),
            unit_name: first.unit_name.clone(),
            activity_code: first.activity_code.clone(),
            activity_name: first.activity_name.clone(),
            project_code: first.project_code.clone(),
            project_name: first.project_name.clone(),
            allocated_hours: round_to(group.hours, 2, self.rounding),
            // from the unrounded sum, not from allocated_hours
            allocated_days: round_to(group.hours / self.workday_length, 2, self.rounding),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::WorkDuration;
    use chrono::NaiveDate;

    fn entry(unit: &str, unit_name: &str, project: &str, activity: &str, h: i64, m: i64) -> TimesheetEntry {
        TimesheetEntry {
            contract_number: "K-1".to_string(),
            title: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            allocated: WorkDuration::new(h, m),
            unit_code: unit.to_string(),
            unit_name: unit_name.to_string(),
            activity_code: activity.to_string(),
            activity_name: format!("{activity} name"),
            project_code: project.to_string(),
            project_name: format!("{project} name"),
            deliverable_code: String::new(),
            deliverable_name: String::new(),
            reserved1_code: String::new(),
            reserved1_name: String::new(),
            reserved2_code: String::new(),
            reserved2_name: String::new(),
            explanation: String::new(),
            state: String::new(),
        }
    }

    fn aggregator() -> Aggregator {
        Aggregator::new(7.25, RoundingMode::HalfToEven)
    }

    #[test]
    fn test_round_to_midpoints() {
        assert_eq!(round_to(0.125, 2, RoundingMode::HalfToEven), 0.12);
        assert_eq!(round_to(0.125, 2, RoundingMode::HalfAwayFromZero), 0.13);
        assert_eq!(round_to(0.375, 2, RoundingMode::HalfToEven), 0.38);
        assert_eq!(round_to(-0.125, 2, RoundingMode::HalfAwayFromZero), -0.13);
        assert_eq!(round_to(5.5, 2, RoundingMode::HalfToEven), 5.5);
    }

    #[test]
    fn test_two_entries_same_key_are_summed() {
        let rows = aggregator().aggregate(&[
            entry("U1", "Unit", "P1", "A1", 2, 0),
            entry("U1", "Unit", "P1", "A1", 3, 30),
        ]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].allocated_hours, 5.5);
        assert_eq!(rows[0].allocated_days, 0.76);
    }

    #[test]
    fn test_days_are_rounded_from_unrounded_hours() {
        // 11 minutes: 0.1833h rounds to 0.18, but 0.1833 / 7.25 = 0.0253 -> 0.03
        // while 0.18 / 7.25 = 0.0248 -> 0.02
        let rows = aggregator().aggregate(&[entry("U1", "Unit", "P1", "A1", 0, 11)]);
        assert_eq!(rows[0].allocated_hours, 0.18);
        assert_eq!(rows[0].allocated_days, 0.03);
    }

    #[test]
    fn test_first_display_name_wins() {
        let rows = aggregator().aggregate(&[
            entry("U1", "Talous", "P1", "A1", 1, 0),
            entry("U1", "Talouss", "P1", "A1", 1, 0),
        ]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].unit_name, "Talous");
        assert_eq!(rows[0].allocated_hours, 2.0);
    }

    #[test]
    fn test_rows_sorted_by_project_code() {
        let rows = aggregator().aggregate(&[
            entry("U2", "B", "P3", "A1", 1, 0),
            entry("U1", "A", "P1", "A1", 1, 0),
            entry("U1", "A", "P3", "A2", 1, 0),
            entry("U1", "A", "P2", "A1", 1, 0),
        ]);
        let projects: Vec<&str> = rows.iter().map(|r| r.project_code.as_str()).collect();
        assert_eq!(projects, vec!["P1", "P2", "P3", "P3"]);
        // ties keep order of first appearance
        assert_eq!(rows[2].unit_code, "U2");
        assert_eq!(rows[3].activity_code, "A2");
    }

    #[test]
    fn test_empty_codes_form_a_valid_group() {
        let rows = aggregator().aggregate(&[
            entry("", "", "", "", 1, 15),
            entry("", "", "", "", 0, 45),
            entry("U1", "A", "", "", 1, 0),
        ]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].unit_code, "");
        assert_eq!(rows[0].allocated_hours, 2.0);
    }

    #[test]
    fn test_no_entries_no_rows() {
        assert!(aggregator().aggregate(&[]).is_empty());
    }

    #[test]
    fn test_workday_length_is_configurable() {
        let rows = Aggregator::new(7.5, RoundingMode::HalfToEven)
            .aggregate(&[entry("U1", "A", "P1", "A1", 15, 0)]);
        assert_eq!(rows[0].allocated_days, 2.0);
    }
}

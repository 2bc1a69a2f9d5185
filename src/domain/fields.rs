use crate::config::DateLocale;
use crate::domain::model::WorkDuration;
use chrono::{NaiveDate, NaiveTime};

const FINNISH_DATE_FORMATS: &[&str] = &["%d.%m.%Y"];
const ISO_DATE_FORMATS: &[&str] = &["%Y-%m-%d"];
const TIME_FORMATS: &[&str] = &[
    "%H.%M.%S", "%H.%M", "%H:%M:%S%.f", "%H:%M:%S", "%H:%M",
];

/// Parses a date cell. The date part must match the locale's pattern; an
/// optional time part (after a space or `T`) must be well formed but is
/// discarded.
pub fn parse_date(value: &str, locale: DateLocale) -> Option<NaiveDate> {
    let value = value.trim();
    let (date_part, time_part) = match value.split_once([' ', 'T']) {
        Some((date, time)) => (date, Some(time.trim())),
        None => (value, None),
    };

    let date = match locale {
        DateLocale::Fi => parse_with(date_part, FINNISH_DATE_FORMATS)
            .or_else(|| parse_with(date_part, ISO_DATE_FORMATS)),
        DateLocale::Iso => parse_with(date_part, ISO_DATE_FORMATS),
    }?;

    if let Some(time) = time_part {
        let time = time.trim_end_matches('Z');
        TIME_FORMATS
            .iter()
            .find_map(|format| NaiveTime::parse_from_str(time, format).ok())?;
    }

    Some(date)
}

fn parse_with(value: &str, formats: &[&str]) -> Option<NaiveDate> {
    formats
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}

/// Parses an `H:MM` allocation. Only the first two `:`-separated parts are
/// read; minutes are not range checked. Both parts must fit in an `i32`,
/// which keeps `WorkDuration::total_minutes` well inside `i64`.
pub fn parse_duration(value: &str) -> Option<WorkDuration> {
    let mut parts = value.split(':');
    let hours = parts.next()?.trim().parse::<i32>().ok()?;
    let minutes = parts.next()?.trim().parse::<i32>().ok()?;
    Some(WorkDuration::new(hours.into(), minutes.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_finnish_dates() {
        assert_eq!(parse_date("5.1.2024", DateLocale::Fi), Some(date(2024, 1, 5)));
        assert_eq!(parse_date("05.01.2024", DateLocale::Fi), Some(date(2024, 1, 5)));
        assert_eq!(parse_date(" 31.12.2023 ", DateLocale::Fi), Some(date(2023, 12, 31)));
        assert_eq!(parse_date("5.1.2024 8.30.00", DateLocale::Fi), Some(date(2024, 1, 5)));
        assert_eq!(parse_date("5.1.2024 0:00:00", DateLocale::Fi), Some(date(2024, 1, 5)));
    }

    #[test]
    fn test_finnish_locale_also_accepts_iso() {
        assert_eq!(parse_date("2024-01-05", DateLocale::Fi), Some(date(2024, 1, 5)));
        assert_eq!(
            parse_date("2024-01-05T00:00:00", DateLocale::Fi),
            Some(date(2024, 1, 5))
        );
    }

    #[test]
    fn test_iso_locale_rejects_finnish_dates() {
        assert_eq!(parse_date("5.1.2024", DateLocale::Iso), None);
        assert_eq!(parse_date("2024-01-05", DateLocale::Iso), Some(date(2024, 1, 5)));
    }

    #[test]
    fn test_malformed_dates() {
        assert_eq!(parse_date("", DateLocale::Fi), None);
        assert_eq!(parse_date("1/5/2024", DateLocale::Fi), None);
        assert_eq!(parse_date("31.2.2024", DateLocale::Fi), None);
        assert_eq!(parse_date("5.1.2024 kahdeksan", DateLocale::Fi), None);
    }

    #[test]
    fn test_durations() {
        assert_eq!(parse_duration("7:30"), Some(WorkDuration::new(7, 30)));
        assert_eq!(parse_duration("0:05"), Some(WorkDuration::new(0, 5)));
        assert_eq!(parse_duration(" 12 : 00 "), Some(WorkDuration::new(12, 0)));
        assert_eq!(parse_duration("7:30:00"), Some(WorkDuration::new(7, 30)));
        assert_eq!(parse_duration("1:90"), Some(WorkDuration::new(1, 90)));
    }

    #[test]
    fn test_malformed_durations() {
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("7"), None);
        assert_eq!(parse_duration("7,5"), None);
        assert_eq!(parse_duration("7.5:00"), None);
        assert_eq!(parse_duration("h:mm"), None);
    }

    #[test]
    fn test_out_of_range_durations_are_malformed() {
        assert_eq!(parse_duration("200000000000000000:00"), None);
        assert_eq!(parse_duration("1:99999999999"), None);
        assert_eq!(parse_duration("2147483648:00"), None);

        let largest = parse_duration("2147483647:2147483647").unwrap();
        assert!(largest.total_hours().is_finite());
    }
}

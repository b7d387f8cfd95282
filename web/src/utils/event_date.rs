//! Date and status display for event rows. Anything unparseable falls back to
//! placeholder text instead of failing the row.
use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const DAY_PLACEHOLDER: &str = "—";
pub const WEEKDAY_PLACEHOLDER: &str = "TBD";
pub const DATE_PLACEHOLDER: &str = "Date TBD";
pub const TIME_PLACEHOLDER: &str = "Time TBD";
pub const STATUS_PLACEHOLDER: &str = "Upcoming";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDateParts {
    pub weekday: String,
    pub day: String,
    pub month_year: String,
    pub long_date: String,
}

impl EventDateParts {
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        parse_event_date(raw?.trim()).map(Self::from_date)
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            weekday: date.format("%a").to_string(),
            day: date.format("%-d").to_string(),
            month_year: date.format("%b %Y").to_string(),
            long_date: date.format("%B %-d, %Y").to_string(),
        }
    }
}

/// Text for each slot of the row's date block, placeholders included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDateDisplay {
    pub day: String,
    pub weekday: String,
    pub month_year: String,
    pub long_date: String,
}

impl EventDateDisplay {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match EventDateParts::parse(raw) {
            Some(parts) => Self {
                day: parts.day,
                weekday: parts.weekday,
                month_year: parts.month_year,
                long_date: parts.long_date,
            },
            None => Self {
                day: DAY_PLACEHOLDER.to_string(),
                weekday: WEEKDAY_PLACEHOLDER.to_string(),
                month_year: String::new(),
                long_date: DATE_PLACEHOLDER.to_string(),
            },
        }
    }
}

fn parse_event_date(raw: &str) -> Option<NaiveDate> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(timestamp.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventStatus {
    Complete,
    Upcoming,
    #[default]
    Default,
}

impl EventStatus {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|status| status.trim().to_lowercase()).as_deref() {
            Some("complete") => Self::Complete,
            Some("upcoming") => Self::Upcoming,
            _ => Self::Default,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Complete => "event-status complete",
            Self::Upcoming => "event-status upcoming",
            Self::Default => "event-status",
        }
    }
}

pub fn status_label(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|status| !status.is_empty())
        .unwrap_or(STATUS_PLACEHOLDER)
        .to_string()
}

pub fn time_range_label(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|range| !range.is_empty())
        .unwrap_or(TIME_PLACEHOLDER)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_date_formats_all_parts() {
        let parts = EventDateParts::parse(Some("2026-03-08")).unwrap();
        assert_eq!(parts.weekday, "Sun");
        assert_eq!(parts.day, "8");
        assert_eq!(parts.month_year, "Mar 2026");
        assert_eq!(parts.long_date, "March 8, 2026");
    }

    #[test]
    fn timestamps_use_their_calendar_date() {
        let rfc = EventDateParts::parse(Some("2026-05-03T09:30:00-07:00")).unwrap();
        assert_eq!(rfc.long_date, "May 3, 2026");

        let local = EventDateParts::parse(Some("2026-05-03T09:30")).unwrap();
        assert_eq!(local.weekday, "Sun");
    }

    #[test]
    fn bad_or_missing_dates_degrade_to_placeholders() {
        for raw in [None, Some(""), Some("sometime in June"), Some("2026-02-30")] {
            let display = EventDateDisplay::from_raw(raw);
            assert_eq!(display.day, DAY_PLACEHOLDER);
            assert_eq!(display.weekday, WEEKDAY_PLACEHOLDER);
            assert_eq!(display.month_year, "");
            assert_eq!(display.long_date, DATE_PLACEHOLDER);
        }
    }

    #[test]
    fn status_is_case_insensitive() {
        assert_eq!(EventStatus::parse(Some("Complete")), EventStatus::Complete);
        assert_eq!(EventStatus::parse(Some(" UPCOMING ")), EventStatus::Upcoming);
        assert_eq!(EventStatus::parse(Some("postponed")), EventStatus::Default);
        assert_eq!(EventStatus::parse(None), EventStatus::Default);
    }

    #[test]
    fn labels_fall_back_when_blank() {
        assert_eq!(status_label(None), "Upcoming");
        assert_eq!(status_label(Some("  ")), "Upcoming");
        assert_eq!(status_label(Some("Postponed")), "Postponed");
        assert_eq!(time_range_label(None), "Time TBD");
        assert_eq!(time_range_label(Some("11:00am–1:00pm")), "11:00am–1:00pm");
    }
}

//! Human-facing rendering of planned dates.
//!
//! The slot finder only decides which [`DayRelation`] applies; wording and
//! locale live behind [`SlotFormatter`].

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Position of a planned date relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayRelation {
    /// The planned date is today.
    Today,
    /// The planned date is the next calendar day.
    Tomorrow,
    /// Any other date.
    Later,
}

impl DayRelation {
    /// Classify `date` against `today`.
    pub fn between(today: NaiveDate, date: NaiveDate) -> Self {
        if date == today {
            Self::Today
        } else if today.succ_opt() == Some(date) {
            Self::Tomorrow
        } else {
            Self::Later
        }
    }
}

/// Renders a planned date for display.
pub trait SlotFormatter: Send + Sync {
    /// Render `date`, whose relation to today is already known.
    fn format(&self, date: NaiveDate, relation: DayRelation) -> String;
}

/// German labels as shown to the sales team: "Heute", "Morgen",
/// otherwise "Mittwoch, 21.10.2026".
#[derive(Debug, Clone, Copy, Default)]
pub struct GermanSlotFormatter;

const fn weekday_de(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Montag",
        Weekday::Tue => "Dienstag",
        Weekday::Wed => "Mittwoch",
        Weekday::Thu => "Donnerstag",
        Weekday::Fri => "Freitag",
        Weekday::Sat => "Samstag",
        Weekday::Sun => "Sonntag",
    }
}

impl SlotFormatter for GermanSlotFormatter {
    fn format(&self, date: NaiveDate, relation: DayRelation) -> String {
        match relation {
            DayRelation::Today => "Heute".to_string(),
            DayRelation::Tomorrow => "Morgen".to_string(),
            DayRelation::Later => format!(
                "{}, {}",
                weekday_de(date.weekday()),
                date.format("%d.%m.%Y")
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_relation_classification() {
        let today = d(2026, 10, 19);
        assert_eq!(DayRelation::between(today, today), DayRelation::Today);
        assert_eq!(DayRelation::between(today, d(2026, 10, 20)), DayRelation::Tomorrow);
        assert_eq!(DayRelation::between(today, d(2026, 10, 21)), DayRelation::Later);
        assert_eq!(DayRelation::between(today, d(2026, 10, 18)), DayRelation::Later);
    }

    #[test]
    fn test_german_labels() {
        let f = GermanSlotFormatter;
        assert_eq!(f.format(d(2026, 10, 19), DayRelation::Today), "Heute");
        assert_eq!(f.format(d(2026, 10, 20), DayRelation::Tomorrow), "Morgen");
        assert_eq!(
            f.format(d(2026, 10, 21), DayRelation::Later),
            "Mittwoch, 21.10.2026"
        );
    }
}

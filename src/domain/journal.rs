use chrono::format::{Item, StrftimeItems};
use chrono::{Local, NaiveDate};
use serde::Serialize;

/// Date format used when a configured one can't be rendered
pub const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// True when every specifier in `fmt` is one chrono understands
pub fn is_valid_date_format(fmt: &str) -> bool {
    !StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error))
}

/// Source of "today" for dated entries
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to one date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// One mood diary line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodEntry {
    pub date: NaiveDate,
    pub mood: String,
}

impl MoodEntry {
    /// "<date>: <mood>" with the date in the given chrono format.
    /// An invalid format renders the date as `%Y-%m-%d`.
    pub fn display(&self, date_format: &str) -> String {
        let date_format = if is_valid_date_format(date_format) {
            date_format
        } else {
            FALLBACK_DATE_FORMAT
        };
        format!("{}: {}", self.date.format(date_format), self.mood)
    }
}

/// Append-only mood diary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MoodLog {
    entries: Vec<MoodEntry>,
}

impl MoodLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    /// Record a mood for `date`. Returns false for blank text.
    pub fn log(&mut self, text: &str, date: NaiveDate) -> bool {
        let mood = text.trim();
        if mood.is_empty() {
            return false;
        }
        self.entries.push(MoodEntry {
            date,
            mood: mood.to_string(),
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_log_mood() {
        let mut log = MoodLog::new();
        assert!(log.log("Feliz", day(2024, 3, 9)));
        assert_eq!(log.entries().len(), 1);
        assert_eq!(log.entries()[0].mood, "Feliz");
        assert_eq!(log.entries()[0].date, day(2024, 3, 9));
    }

    #[test]
    fn test_log_blank_is_ignored() {
        let mut log = MoodLog::new();
        assert!(!log.log(" ", day(2024, 3, 9)));
        assert!(log.entries().is_empty());
    }

    #[test]
    fn test_log_is_append_only() {
        let mut log = MoodLog::new();
        log.log("Tired", day(2024, 3, 9));
        log.log("Calm", day(2024, 3, 10));
        let moods: Vec<&str> = log.entries().iter().map(|e| e.mood.as_str()).collect();
        assert_eq!(moods, vec!["Tired", "Calm"]);
    }

    #[test]
    fn test_display() {
        let entry = MoodEntry {
            date: day(2024, 3, 9),
            mood: "Feliz".to_string(),
        };
        assert_eq!(entry.display("%d/%m/%Y"), "09/03/2024: Feliz");
        assert_eq!(entry.display("%Y-%m-%d"), "2024-03-09: Feliz");
    }

    #[test]
    fn test_display_with_unknown_specifier_falls_back() {
        let entry = MoodEntry {
            date: day(2024, 3, 9),
            mood: "Calm".to_string(),
        };
        assert_eq!(entry.display("%d/%Q"), "2024-03-09: Calm");
        assert_eq!(entry.display("%"), "2024-03-09: Calm");
    }

    #[test]
    fn test_is_valid_date_format() {
        assert!(is_valid_date_format("%d/%m/%Y"));
        assert!(is_valid_date_format("%A %e %B"));
        assert!(is_valid_date_format("plain text"));
        assert!(!is_valid_date_format("%d/%Q"));
        assert!(!is_valid_date_format("%Y-%"));
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(day(2025, 1, 31));
        assert_eq!(clock.today(), day(2025, 1, 31));
    }
}

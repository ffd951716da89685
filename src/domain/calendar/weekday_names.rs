//! Weekday name table injected into the calculators.

use chrono::{Datelike, NaiveDate, Weekday};

/// Seven weekday names indexed Monday = 0 .. Sunday = 6.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekdayNames([String; 7]);

impl WeekdayNames {
    pub fn new(names: [String; 7]) -> Self {
        Self(names)
    }

    /// Name for a weekday index in `0..7`; indices wrap modulo 7.
    pub fn by_index(&self, index: usize) -> &str {
        &self.0[index % 7]
    }

    pub fn name(&self, weekday: Weekday) -> &str {
        self.by_index(weekday.num_days_from_monday() as usize)
    }

    /// Name of the weekday `date` falls on.
    pub fn of(&self, date: NaiveDate) -> &str {
        self.name(date.weekday())
    }
}

impl Default for WeekdayNames {
    fn default() -> Self {
        Self([
            "Monday".to_string(),
            "Tuesday".to_string(),
            "Wednesday".to_string(),
            "Thursday".to_string(),
            "Friday".to_string(),
            "Saturday".to_string(),
            "Sunday".to_string(),
        ])
    }
}

//! Weekday distribution of past birthdays.
//!
//! Counts, for every anniversary after the birth year up to the most recent
//! one, which weekday it fell on. Weekdays that never occur are left out and
//! the remaining entries are ordered Monday through Sunday.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::ops::RangeInclusive;

use super::{CalendarError, LeapDayPolicy, WeekdayNames};

/// Number of anniversaries that fell on one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdayCount {
    pub weekday: String,
    pub count: u32,
}

/// Weekday counts ordered Monday..Sunday, zero entries omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WeekdayDistribution(Vec<WeekdayCount>);

impl WeekdayDistribution {
    pub fn counts(&self) -> &[WeekdayCount] {
        &self.0
    }

    /// Total number of anniversaries counted.
    pub fn total(&self) -> u32 {
        self.0.iter().map(|c| c.count).sum()
    }

    /// Largest single weekday count, `0` when empty.
    pub fn max_count(&self) -> u32 {
        self.0.iter().map(|c| c.count).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<WeekdayCount> {
        self.0
    }
}

/// Years whose anniversaries are counted.
///
/// Starts the year after birth and ends at `today`'s year if this year's
/// anniversary has already happened, otherwise the year before.
///
/// # Errors
///
/// Propagates [`CalendarError::InvalidDate`] from anniversary resolution.
pub fn anniversary_years(
    today: NaiveDate,
    birthday: NaiveDate,
    policy: LeapDayPolicy,
) -> Result<RangeInclusive<i32>, CalendarError> {
    // A skipped current year contributes nothing, so including it is harmless.
    let occurred = match policy.anniversary(today.year(), birthday)? {
        Some(anniversary) => today >= anniversary,
        None => true,
    };

    let last = if occurred {
        today.year()
    } else {
        today.year() - 1
    };

    Ok((birthday.year() + 1)..=last)
}

/// Counts past birthdays per weekday.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] if an anniversary cannot be placed in
/// a year and `policy` does not cover it.
pub fn count_birthdays_by_weekday(
    today: NaiveDate,
    birthday: NaiveDate,
    names: &WeekdayNames,
    policy: LeapDayPolicy,
) -> Result<WeekdayDistribution, CalendarError> {
    let mut tally = [0u32; 7];

    for year in anniversary_years(today, birthday, policy)? {
        if let Some(anniversary) = policy.anniversary(year, birthday)? {
            tally[anniversary.weekday().num_days_from_monday() as usize] += 1;
        }
    }

    let counts = tally
        .iter()
        .enumerate()
        .filter(|(_, count)| **count > 0)
        .map(|(index, count)| WeekdayCount {
            weekday: names.by_index(index).to_string(),
            count: *count,
        })
        .collect();

    Ok(WeekdayDistribution(counts))
}

/// Whether `today` is the birthday's anniversary under `policy`.
pub fn is_birthday(today: NaiveDate, birthday: NaiveDate, policy: LeapDayPolicy) -> bool {
    matches!(policy.anniversary(today.year(), birthday), Ok(Some(day)) if day == today)
}

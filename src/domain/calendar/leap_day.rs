//! Policy for Feb 29 birthdays in non-leap years.

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

use super::CalendarError;

/// How a Feb 29 birthday is treated in a year without Feb 29.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LeapDayPolicy {
    /// The year has no anniversary and is not counted.
    #[default]
    Skip,
    /// The anniversary is observed on Feb 28.
    RemapToFeb28,
}

impl LeapDayPolicy {
    /// Resolves the anniversary of `birthday` in `year`.
    ///
    /// Returns `Ok(None)` when the policy skips the year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the month/day cannot be placed
    /// in `year` for any reason other than a missing leap day.
    pub fn anniversary(
        self,
        year: i32,
        birthday: NaiveDate,
    ) -> Result<Option<NaiveDate>, CalendarError> {
        let (month, day) = (birthday.month(), birthday.day());

        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Ok(Some(date));
        }

        let invalid = CalendarError::InvalidDate { year, month, day };
        if (month, day) != (2, 29) {
            return Err(invalid);
        }

        match self {
            Self::Skip => Ok(None),
            Self::RemapToFeb28 => NaiveDate::from_ymd_opt(year, 2, 28)
                .map(Some)
                .ok_or(invalid),
        }
    }
}

impl fmt::Display for LeapDayPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skip => f.write_str("skip"),
            Self::RemapToFeb28 => f.write_str("feb28"),
        }
    }
}

impl FromStr for LeapDayPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "feb28" | "remap" => Ok(Self::RemapToFeb28),
            other => Err(format!(
                "unknown leap day policy '{other}' (expected 'skip' or 'feb28')"
            )),
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
    fn test_regular_birthday_ignores_policy() {
        let birthday = d(1990, 7, 14);
        for policy in [LeapDayPolicy::Skip, LeapDayPolicy::RemapToFeb28] {
            assert_eq!(
                policy.anniversary(2023, birthday).unwrap(),
                Some(d(2023, 7, 14))
            );
        }
    }

    #[test]
    fn test_leap_day_in_leap_year() {
        let birthday = d(2000, 2, 29);
        assert_eq!(
            LeapDayPolicy::Skip.anniversary(2024, birthday).unwrap(),
            Some(d(2024, 2, 29))
        );
    }

    #[test]
    fn test_leap_day_skipped() {
        let birthday = d(2000, 2, 29);
        assert_eq!(LeapDayPolicy::Skip.anniversary(2023, birthday).unwrap(), None);
    }

    #[test]
    fn test_leap_day_remapped() {
        let birthday = d(2000, 2, 29);
        assert_eq!(
            LeapDayPolicy::RemapToFeb28.anniversary(2023, birthday).unwrap(),
            Some(d(2023, 2, 28))
        );
    }

    #[test]
    fn test_parse_policy() {
        assert_eq!("skip".parse::<LeapDayPolicy>().unwrap(), LeapDayPolicy::Skip);
        assert_eq!(
            "FEB28".parse::<LeapDayPolicy>().unwrap(),
            LeapDayPolicy::RemapToFeb28
        );
        assert!("march1".parse::<LeapDayPolicy>().is_err());
        assert_eq!(LeapDayPolicy::RemapToFeb28.to_string(), "feb28");
    }
}

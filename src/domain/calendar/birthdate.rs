//! Validated birthdate value.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use super::CalendarError;

/// Earliest birthdate accepted by the form.
pub const MIN_BIRTHDATE: NaiveDate = match NaiveDate::from_ymd_opt(1900, 1, 1) {
    Some(date) => date,
    None => panic!("1900-01-01 is a valid date"),
};

/// A birthdate known to lie within `[1900-01-01, today]`.
///
/// Only constructible through [`Birthdate::new`] or [`Birthdate::parse`], so
/// calculators receiving one never see an out-of-range date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Birthdate(NaiveDate);

impl Birthdate {
    /// Validates `date` against the accepted range ending at `today`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::BeforeMinimum`] for dates before 1900-01-01 and
    /// [`CalendarError::InFuture`] for dates after `today`.
    pub fn new(date: NaiveDate, today: NaiveDate) -> Result<Self, CalendarError> {
        if date < MIN_BIRTHDATE {
            return Err(CalendarError::BeforeMinimum {
                date,
                min: MIN_BIRTHDATE,
            });
        }
        if date > today {
            return Err(CalendarError::InFuture { date, today });
        }
        Ok(Self(date))
    }

    /// Parses a `YYYY-MM-DD` string, as submitted by an HTML date input.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidFormat`] if the string is not a date,
    /// otherwise the range errors of [`Birthdate::new`].
    pub fn parse(input: &str, today: NaiveDate) -> Result<Self, CalendarError> {
        let trimmed = input.trim();
        let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .map_err(|_| CalendarError::InvalidFormat(trimmed.to_string()))?;
        Self::new(date, today)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

//! Errors raised by calendar arithmetic and birthdate validation.

use chrono::NaiveDate;
use thiserror::Error;

/// Failure modes of the calendar calculators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// The (year, month, day) triple does not name a real calendar date.
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// A month/day pair that cannot occur in any year.
    #[error("invalid month/day {month:02}-{day:02}")]
    InvalidMonthDay { month: u32, day: u32 },

    /// Input could not be parsed as `YYYY-MM-DD`.
    #[error("birthdate must be formatted as YYYY-MM-DD, got '{0}'")]
    InvalidFormat(String),

    #[error("birthdate {date} is before {min}")]
    BeforeMinimum { date: NaiveDate, min: NaiveDate },

    #[error("birthdate {date} is after today ({today})")]
    InFuture { date: NaiveDate, today: NaiveDate },
}

//! Calendar arithmetic behind the birthday facts.
//!
//! Everything here is a pure function of its inputs: "today" is always passed
//! in, never read from the system clock.
//!
//! - [`distribution`] - Weekday distribution of past birthdays
//! - [`age`] - Age in whole years
//! - [`birthdate`] - Range-validated birthdate input
//! - [`leap_day`] - Feb 29 handling in non-leap years
//! - [`weekday_names`] - Injected weekday name table

pub mod age;
pub mod birthdate;
pub mod distribution;
pub mod error;
pub mod leap_day;
pub mod weekday_names;

pub use age::age_on;
pub use birthdate::{Birthdate, MIN_BIRTHDATE};
pub use distribution::{
    WeekdayCount, WeekdayDistribution, anniversary_years, count_birthdays_by_weekday, is_birthday,
};
pub use error::CalendarError;
pub use leap_day::LeapDayPolicy;
pub use weekday_names::WeekdayNames;

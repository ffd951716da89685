//! Clock implementations.

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use tracing::debug;

use crate::domain::ports::Clock;

/// Wall clock reporting today's date in a fixed reference time zone.
pub struct SystemClock {
    zone: Tz,
}

impl SystemClock {
    pub fn new(zone: Tz) -> Self {
        debug!(zone = %zone.name(), "Using system clock");
        Self { zone }
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.zone).date_naive()
    }
}

/// Clock frozen at a given date.
///
/// Pins "today" for reproducible reports and tests.
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_returns_given_date() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 2).unwrap();
        let clock = FixedClock::new(date);
        assert_eq!(clock.today(), date);
    }

    #[test]
    fn test_system_clock_is_close_to_utc() {
        let clock = SystemClock::new(chrono_tz::EST5EDT);
        let utc_today = Utc::now().date_naive();
        let diff = (clock.today() - utc_today).num_days().abs();
        assert!(diff <= 1);
    }

    #[test]
    fn test_clock_trait_object_works() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let clock: Box<dyn Clock> = Box::new(FixedClock::new(date));
        assert_eq!(clock.today(), date);
    }
}

//! Zodiac sign reference table and lookup.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

use crate::domain::calendar::CalendarError;

/// One row of the zodiac reference table.
///
/// Bounds are inclusive month/day pairs. A range whose start comes after its
/// end wraps around the new year (Capricorn, Dec 22 - Jan 19).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZodiacRange {
    pub sign: String,
    pub start: (u32, u32),
    pub end: (u32, u32),
}

impl ZodiacRange {
    /// Creates a range, rejecting month/day pairs that never occur.
    ///
    /// Feb 29 is accepted as a bound.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonthDay`] for an impossible bound.
    pub fn new(
        sign: impl Into<String>,
        start: (u32, u32),
        end: (u32, u32),
    ) -> Result<Self, CalendarError> {
        for (month, day) in [start, end] {
            // 2000 is a leap year, so this admits Feb 29.
            if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
                return Err(CalendarError::InvalidMonthDay { month, day });
            }
        }
        Ok(Self {
            sign: sign.into(),
            start,
            end,
        })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        let md = (date.month(), date.day());
        if self.start <= self.end {
            self.start <= md && md <= self.end
        } else {
            md >= self.start || md <= self.end
        }
    }
}

/// Result of a zodiac lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "sign", rename_all = "snake_case")]
pub enum ZodiacSign {
    Known(String),
    Unknown,
}

impl ZodiacSign {
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Known(name) => Some(name),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(name) => f.write_str(name),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

/// Ordered zodiac ranges; the first matching row wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZodiacTable {
    ranges: Vec<ZodiacRange>,
}

impl ZodiacTable {
    pub fn new(ranges: Vec<ZodiacRange>) -> Self {
        Self { ranges }
    }

    pub fn lookup(&self, birthday: NaiveDate) -> ZodiacSign {
        self.ranges
            .iter()
            .find(|range| range.contains(birthday))
            .map_or(ZodiacSign::Unknown, |range| {
                ZodiacSign::Known(range.sign.clone())
            })
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn ranges(&self) -> &[ZodiacRange] {
        &self.ranges
    }
}

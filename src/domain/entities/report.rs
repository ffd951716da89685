//! The full set of facts derived for one submitted birthdate.

use chrono::NaiveDate;

use super::{Fact, MoonPhase, NotablePeople, ZodiacSign};
use crate::domain::calendar::WeekdayDistribution;

/// Everything shown for one birthdate.
///
/// Plain data: rendering happens in the web layer and the API layer maps it
/// into its own response DTO.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayReport {
    pub today: NaiveDate,
    pub birthdate: NaiveDate,
    /// `today` is the birthday's anniversary; the page celebrates.
    pub is_birthday: bool,
    pub weekdays: WeekdayDistribution,
    pub age: i32,
    pub weekday_born: String,
    pub zodiac: ZodiacSign,
    pub moon_phase: Fact<MoonPhase>,
    pub notable_people: Fact<NotablePeople>,
}

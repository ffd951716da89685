//! DTOs for the birthday facts endpoints.

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::calendar::WeekdayCount;
use crate::domain::entities::{BirthdayReport, Fact, MoonPhase, NotablePeople, ZodiacSign};

/// Shape check for `YYYY-MM-DD`; calendar validity is checked afterwards.
static BIRTHDATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// Query string carrying the submitted birthdate.
#[derive(Debug, Deserialize, Validate)]
pub struct BirthdateQuery {
    #[validate(regex(path = "*BIRTHDATE_REGEX", message = "expected YYYY-MM-DD"))]
    pub birthdate: String,
}

/// Full facts response.
#[derive(Debug, Serialize)]
pub struct FactsResponse {
    pub today: NaiveDate,
    pub birthdate: NaiveDate,
    pub is_birthday: bool,
    pub age: i32,
    pub weekday_born: String,
    pub zodiac: ZodiacSign,
    pub weekdays: WeekdaysResponse,
    pub moon_phase: Fact<MoonPhase>,
    pub notable_people: Fact<NotablePeople>,
}

/// Weekday distribution of past birthdays.
#[derive(Debug, Serialize)]
pub struct WeekdaysResponse {
    /// Number of anniversaries counted.
    pub total: u32,
    /// Ordered Monday..Sunday; weekdays with no birthdays are omitted.
    pub counts: Vec<WeekdayCount>,
}

impl From<BirthdayReport> for FactsResponse {
    fn from(report: BirthdayReport) -> Self {
        Self {
            today: report.today,
            birthdate: report.birthdate,
            is_birthday: report.is_birthday,
            age: report.age,
            weekday_born: report.weekday_born,
            zodiac: report.zodiac,
            weekdays: WeekdaysResponse {
                total: report.weekdays.total(),
                counts: report.weekdays.into_inner(),
            },
            moon_phase: report.moon_phase,
            notable_people: report.notable_people,
        }
    }
}

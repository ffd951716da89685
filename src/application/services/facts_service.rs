//! Birthday facts orchestration service.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

use crate::domain::calendar::{
    Birthdate, LeapDayPolicy, WeekdayDistribution, WeekdayNames, age_on,
    count_birthdays_by_weekday, is_birthday,
};
use crate::domain::entities::{BirthdayReport, Fact, ZodiacTable};
use crate::domain::ports::{Clock, FetchError, MoonPhaseSource, NotablePeopleSource};
use crate::error::AppError;

/// Immutable lookup data injected into the calculators.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub weekday_names: WeekdayNames,
    pub zodiac: ZodiacTable,
}

/// Whether a report includes the facts scraped from third-party sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    Online,
    Offline,
}

/// Service producing every fact for a submitted birthdate.
///
/// Local facts (weekday distribution, age, weekday born, zodiac) are computed
/// synchronously. The two scraped facts are fetched concurrently and each
/// failure is confined to its own [`Fact::Unavailable`].
pub struct FactsService {
    clock: Arc<dyn Clock>,
    moon_phases: Arc<dyn MoonPhaseSource>,
    notable_people: Arc<dyn NotablePeopleSource>,
    reference: ReferenceData,
    leap_day_policy: LeapDayPolicy,
}

impl FactsService {
    /// Creates a new facts service.
    pub fn new(
        clock: Arc<dyn Clock>,
        moon_phases: Arc<dyn MoonPhaseSource>,
        notable_people: Arc<dyn NotablePeopleSource>,
        reference: ReferenceData,
        leap_day_policy: LeapDayPolicy,
    ) -> Self {
        Self {
            clock,
            moon_phases,
            notable_people,
            reference,
            leap_day_policy,
        }
    }

    /// Current date in the reference time zone.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn leap_day_policy(&self) -> LeapDayPolicy {
        self.leap_day_policy
    }

    /// Validates raw `YYYY-MM-DD` input against `[1900-01-01, today]`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for malformed or out-of-range dates.
    pub fn parse_birthdate(&self, input: &str) -> Result<Birthdate, AppError> {
        Ok(Birthdate::parse(input, self.today())?)
    }

    /// Weekday distribution of past birthdays as of `today`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if an anniversary cannot be placed in
    /// the calendar.
    pub fn weekday_distribution(
        &self,
        birthdate: Birthdate,
        today: NaiveDate,
    ) -> Result<WeekdayDistribution, AppError> {
        Ok(count_birthdays_by_weekday(
            today,
            birthdate.date(),
            &self.reference.weekday_names,
            self.leap_day_policy,
        )?)
    }

    /// Builds the full report using the clock's current date.
    ///
    /// # Errors
    ///
    /// See [`FactsService::report_at`].
    pub async fn report(&self, birthdate: Birthdate) -> Result<BirthdayReport, AppError> {
        self.report_at(birthdate, self.today(), FetchMode::Online)
            .await
    }

    /// Builds the full report as of `today`.
    ///
    /// Scraped-fact failures never fail the report; they surface as
    /// [`Fact::Unavailable`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `birthdate` is after `today` or an
    /// anniversary cannot be placed in the calendar.
    pub async fn report_at(
        &self,
        birthdate: Birthdate,
        today: NaiveDate,
        mode: FetchMode,
    ) -> Result<BirthdayReport, AppError> {
        let birthday = Birthdate::new(birthdate.date(), today)?.date();

        let weekdays = self.weekday_distribution(birthdate, today)?;
        let celebrate = is_birthday(today, birthday, self.leap_day_policy);
        if celebrate {
            debug!(%birthday, "birthday today");
        }

        let (moon_phase, notable_people) = match mode {
            FetchMode::Online => {
                let (moon, people) = tokio::join!(
                    self.moon_phases.moon_phase(birthday),
                    self.notable_people
                        .notable_people(birthday.month(), birthday.day()),
                );
                (isolate("moon phase", moon), isolate("notable people", people))
            }
            FetchMode::Offline => (
                Fact::unavailable(FetchError::Disabled.to_string()),
                Fact::unavailable(FetchError::Disabled.to_string()),
            ),
        };

        Ok(BirthdayReport {
            today,
            birthdate: birthday,
            is_birthday: celebrate,
            weekdays,
            age: age_on(today, birthday),
            weekday_born: self.reference.weekday_names.of(birthday).to_string(),
            zodiac: self.reference.zodiac.lookup(birthday),
            moon_phase,
            notable_people,
        })
    }
}

fn isolate<T>(fact: &'static str, result: Result<T, FetchError>) -> Fact<T> {
    if let Err(e) = &result {
        warn!(fact, error = %e, "fact unavailable");
    }
    Fact::from(result)
}

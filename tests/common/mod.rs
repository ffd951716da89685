#![allow(dead_code)]

use async_trait::async_trait;
use birthday_facts::application::services::{FactsService, ReferenceData};
use birthday_facts::domain::calendar::{LeapDayPolicy, WeekdayNames};
use birthday_facts::domain::entities::{MoonPhase, NotablePeople, NotablePerson};
use birthday_facts::domain::ports::{FetchError, MoonPhaseSource, NotablePeopleSource};
use birthday_facts::infrastructure::clock::FixedClock;
use birthday_facts::infrastructure::reference::load_zodiac_table;
use birthday_facts::state::AppState;
use chrono::NaiveDate;
use std::sync::Arc;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Moon phase source answering the same phase for every date.
pub struct StaticMoon;

#[async_trait]
impl MoonPhaseSource for StaticMoon {
    async fn moon_phase(&self, date: NaiveDate) -> Result<MoonPhase, FetchError> {
        Ok(MoonPhase {
            phase: "Waning Crescent".to_string(),
            illumination: "21%".to_string(),
            source_url: format!("https://moon.test/{}", date),
        })
    }
}

/// Notable people source returning two fixed people.
pub struct StaticPeople;

#[async_trait]
impl NotablePeopleSource for StaticPeople {
    async fn notable_people(&self, month: u32, day: u32) -> Result<NotablePeople, FetchError> {
        Ok(NotablePeople {
            people: vec![
                NotablePerson {
                    rank: 1,
                    name: "Ada Example".to_string(),
                    age: Some(36),
                    occupation: "Mathematician".to_string(),
                },
                NotablePerson {
                    rank: 2,
                    name: "Historic Figure".to_string(),
                    age: None,
                    occupation: "Painter".to_string(),
                },
            ],
            source_url: format!("https://people.test/{}/{}", month, day),
        })
    }
}

/// Source that always fails like an unreachable site.
pub struct DownSource;

fn down(url: &str) -> FetchError {
    FetchError::Request {
        url: url.to_string(),
        message: "connection refused".to_string(),
    }
}

#[async_trait]
impl MoonPhaseSource for DownSource {
    async fn moon_phase(&self, _date: NaiveDate) -> Result<MoonPhase, FetchError> {
        Err(down("https://moon.test"))
    }
}

#[async_trait]
impl NotablePeopleSource for DownSource {
    async fn notable_people(&self, _month: u32, _day: u32) -> Result<NotablePeople, FetchError> {
        Err(down("https://people.test"))
    }
}

pub fn reference_data() -> ReferenceData {
    ReferenceData {
        weekday_names: WeekdayNames::default(),
        zodiac: load_zodiac_table("data/zodiac.csv").unwrap(),
    }
}

pub fn create_service(
    today: NaiveDate,
    moon: Arc<dyn MoonPhaseSource>,
    people: Arc<dyn NotablePeopleSource>,
) -> FactsService {
    FactsService::new(
        Arc::new(FixedClock::new(today)),
        moon,
        people,
        reference_data(),
        LeapDayPolicy::Skip,
    )
}

/// State with working stub sources, frozen at `today`.
pub fn create_test_state(today: NaiveDate) -> AppState {
    let service = create_service(today, Arc::new(StaticMoon), Arc::new(StaticPeople));
    AppState::new(Arc::new(service), "EST5EDT")
}

/// State whose scraped sources are both unreachable.
pub fn create_offline_state(today: NaiveDate) -> AppState {
    let service = create_service(today, Arc::new(DownSource), Arc::new(DownSource));
    AppState::new(Arc::new(service), "EST5EDT")
}

//! Notable people scraped from famousbirthdays.com.
//!
//! The page for a birthday is `{base}/{monthname}{day}.html`, e.g.
//! `/january1.html`. Each `.person-item` entry carries a `.name` element
//! reading "Name, Age" (age omitted for some entries) and a `.title` element
//! with the occupation. Entries are listed by popularity, which gives the rank.

use std::sync::LazyLock;

use async_trait::async_trait;
use chrono::Month;
use regex::Regex;
use scraper::{Html, Selector};

use super::{HttpFetcher, element_text};
use crate::domain::entities::{NotablePeople, NotablePerson};
use crate::domain::ports::{FetchError, NotablePeopleSource};

static PERSON: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".person-item").expect("static selector"));
static NAME: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".name").expect("static selector"));
static TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".title").expect("static selector"));

/// "Name, 34" with the age captured separately.
static NAME_AGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<name>.+?),\s*(?P<age>\d{1,3})$").unwrap());

/// [`NotablePeopleSource`] backed by famousbirthdays.com day pages.
pub struct FamousBirthdaysClient {
    http: HttpFetcher,
    base_url: String,
    limit: usize,
}

impl FamousBirthdaysClient {
    /// `limit` caps the number of people returned per day.
    pub fn new(http: HttpFetcher, base_url: impl Into<String>, limit: usize) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            limit,
        }
    }

    /// # Errors
    ///
    /// Returns [`FetchError::Parse`] for a month outside `1..=12`.
    pub fn url_for(&self, month: u32, day: u32) -> Result<String, FetchError> {
        let month_name = u8::try_from(month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .ok_or_else(|| FetchError::Parse {
                url: self.base_url.clone(),
                message: format!("invalid month {month}"),
            })?
            .name()
            .to_ascii_lowercase();

        Ok(format!("{}/{}{}.html", self.base_url, month_name, day))
    }
}

#[async_trait]
impl NotablePeopleSource for FamousBirthdaysClient {
    async fn notable_people(&self, month: u32, day: u32) -> Result<NotablePeople, FetchError> {
        let url = self.url_for(month, day)?;
        let html = self.http.get_text(&url).await?;
        parse_notable_people(&html, &url, self.limit)
    }
}

/// Extracts up to `limit` ranked people from a day page.
///
/// # Errors
///
/// Returns [`FetchError::Parse`] if no `.person-item` entry with a name is
/// present.
pub fn parse_notable_people(
    html: &str,
    source_url: &str,
    limit: usize,
) -> Result<NotablePeople, FetchError> {
    let document = Html::parse_document(html);

    let people: Vec<NotablePerson> = document
        .select(&PERSON)
        .filter_map(|item| {
            let raw_name = item.select(&NAME).next().map(element_text)?;
            if raw_name.is_empty() {
                return None;
            }
            let occupation = item
                .select(&TITLE)
                .next()
                .map(element_text)
                .unwrap_or_default();
            let (name, age) = split_name_age(&raw_name);
            Some((name, age, occupation))
        })
        .take(limit)
        .zip(1u32..)
        .map(|((name, age, occupation), rank)| NotablePerson {
            rank,
            name,
            age,
            occupation,
        })
        .collect();

    if people.is_empty() {
        return Err(FetchError::Parse {
            url: source_url.to_string(),
            message: "no .person-item entries found".to_string(),
        });
    }

    Ok(NotablePeople {
        people,
        source_url: source_url.to_string(),
    })
}

fn split_name_age(raw: &str) -> (String, Option<u32>) {
    match NAME_AGE.captures(raw) {
        Some(caps) => (
            caps["name"].trim().to_string(),
            caps["age"].parse().ok(),
        ),
        None => (raw.to_string(), None),
    }
}

//! Moon phase scraped from moongiant.com.
//!
//! The phase page for a date is `{base}/{month}/{day}/{year}` without zero
//! padding. The first `span` at or after the `#moonDetails` block, in document
//! order, holds the phase name and the second the illumination percentage.
//! The spans usually sit inside the block but some layouts place them after it.

use std::sync::LazyLock;

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use scraper::{ElementRef, Html, Selector};

use super::{HttpFetcher, element_text};
use crate::domain::entities::MoonPhase;
use crate::domain::ports::{FetchError, MoonPhaseSource};

static MOON_DETAILS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("#moonDetails").expect("static selector"));

/// [`MoonPhaseSource`] backed by the moongiant.com phase pages.
pub struct MoonGiantClient {
    http: HttpFetcher,
    base_url: String,
}

impl MoonGiantClient {
    pub fn new(http: HttpFetcher, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, date: NaiveDate) -> String {
        format!(
            "{}/{}/{}/{}",
            self.base_url,
            date.month(),
            date.day(),
            date.year()
        )
    }
}

#[async_trait]
impl MoonPhaseSource for MoonGiantClient {
    async fn moon_phase(&self, date: NaiveDate) -> Result<MoonPhase, FetchError> {
        let url = self.url_for(date);
        let html = self.http.get_text(&url).await?;
        parse_moon_phase(&html, &url)
    }
}

/// Extracts the phase name and illumination from a phase page.
///
/// # Errors
///
/// Returns [`FetchError::Parse`] if there is no `#moonDetails` element or
/// fewer than two non-empty `span` elements follow its start.
pub fn parse_moon_phase(html: &str, source_url: &str) -> Result<MoonPhase, FetchError> {
    let document = Html::parse_document(html);

    let missing = |what: &str| FetchError::Parse {
        url: source_url.to_string(),
        message: format!("{what} not found in #moonDetails"),
    };

    let details = document
        .select(&MOON_DETAILS)
        .next()
        .ok_or_else(|| FetchError::Parse {
            url: source_url.to_string(),
            message: "#moonDetails not found".to_string(),
        })?;

    // Pre-order descendants of the root are in document order.
    let mut spans = document
        .root_element()
        .descendants()
        .skip_while(|node| node.id() != details.id())
        .filter_map(ElementRef::wrap)
        .filter(|element| element.value().name() == "span")
        .map(element_text)
        .filter(|text| !text.is_empty());

    let phase = spans.next().ok_or_else(|| missing("phase"))?;
    let illumination = spans.next().ok_or_else(|| missing("illumination"))?;

    Ok(MoonPhase {
        phase,
        illumination,
        source_url: source_url.to_string(),
    })
}

//! Scraped fact sources.
//!
//! Provides the [`crate::domain::ports`] fact source traits over third-party
//! HTML pages:
//! - [`MoonGiantClient`] - Lunar phase on a date
//! - [`FamousBirthdaysClient`] - Notable people sharing a birthday

mod famous_birthdays;
mod http;
mod moon_giant;

pub use famous_birthdays::{FamousBirthdaysClient, parse_notable_people};
pub use http::HttpFetcher;
pub use moon_giant::{MoonGiantClient, parse_moon_phase};

use scraper::ElementRef;

/// Text content of an element with runs of whitespace collapsed.
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

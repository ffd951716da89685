//! Static reference data loaded at startup.

mod zodiac_csv;

pub use zodiac_csv::{ReferenceDataError, load_zodiac_table, parse_zodiac_csv};

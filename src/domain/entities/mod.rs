//! Core domain entities representing the birthday facts data model.
//!
//! Entities are plain data structures; the calendar logic that produces them
//! lives in [`crate::domain::calendar`].
//!
//! # Entity Types
//!
//! - [`BirthdayReport`] - All facts for one birthdate
//! - [`Fact`] - Available value or failure reason for a fetched fact
//! - [`MoonPhase`] - Lunar phase on the birth date
//! - [`NotablePerson`] / [`NotablePeople`] - People sharing the birthday
//! - [`ZodiacTable`] / [`ZodiacSign`] - Zodiac reference data and lookup result

pub mod fact;
pub mod moon_phase;
pub mod notable_person;
pub mod report;
pub mod zodiac;

pub use fact::Fact;
pub use moon_phase::MoonPhase;
pub use notable_person::{NotablePeople, NotablePerson};
pub use report::BirthdayReport;
pub use zodiac::{ZodiacRange, ZodiacSign, ZodiacTable};

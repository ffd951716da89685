//! Domain layer containing the birthday calculators and entities.
//!
//! # Architecture
//!
//! - [`calendar`] - Weekday distribution, age, birthdate validation
//! - [`entities`] - Report, fact wrapper, zodiac table, scraped fact records
//! - [`ports`] - Clock and external fact source traits
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Calculators are pure functions; "today" and lookup tables are passed in
//! - Orchestration lives in [`crate::application::services`]

pub mod calendar;
pub mod entities;
pub mod ports;

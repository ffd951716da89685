//! # Birthday Facts
//!
//! Answers "what's interesting about my birthday?": how many past birthdays
//! fell on each weekday, age, the weekday of birth, the zodiac sign, the moon
//! phase on the day of birth and notable people sharing the birthday.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Calendar arithmetic, entities and fact source ports
//! - **Application Layer** ([`application`]) - Report orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Clock, reference data, HTML scrapers
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - HTML form with a server-rendered bar chart
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: override defaults
//! export TIMEZONE="EST5EDT"
//! export ZODIAC_TABLE="data/zodiac.csv"
//!
//! # Start the web service
//! cargo run
//!
//! # Or use the CLI
//! cargo run --bin facts -- report 2000-01-01
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod telemetry;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{FactsService, FetchMode, ReferenceData};
    pub use crate::domain::calendar::{Birthdate, LeapDayPolicy, WeekdayDistribution};
    pub use crate::domain::entities::{BirthdayReport, Fact, ZodiacSign};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}

//! Application layer services implementing the birthday facts use case.
//!
//! Services consume the domain calculators and port traits and provide a
//! clean API for HTTP handlers and the CLI.
//!
//! # Available Services
//!
//! - [`services::facts_service::FactsService`] - Validates input and assembles a
//!   [`crate::domain::entities::BirthdayReport`]

pub mod services;

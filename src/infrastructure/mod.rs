//! Infrastructure layer for external integrations.
//!
//! This layer implements the ports defined by the domain layer.
//!
//! # Modules
//!
//! - [`clock`] - System and fixed clocks
//! - [`reference`] - Zodiac table CSV loader
//! - [`scraping`] - HTTP fact sources (moon phase, notable people)

pub mod clock;
pub mod reference;
pub mod scraping;

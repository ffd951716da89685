//! Port trait definitions for the domain layer.
//!
//! Traits describe what the application needs from the outside world; the
//! implementations live in `crate::infrastructure`.
//!
//! # Testing
//!
//! Mock implementations of the fact sources are generated via `mockall`
//! under `cfg(test)`.

pub mod clock;
pub mod fact_source;

pub use clock::Clock;
pub use fact_source::{FetchError, MoonPhaseSource, NotablePeopleSource};

#[cfg(test)]
pub use fact_source::{MockMoonPhaseSource, MockNotablePeopleSource};

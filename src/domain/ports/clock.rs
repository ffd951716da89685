//! Source of "today".

use chrono::NaiveDate;

/// Provides the current calendar date.
///
/// The reference time zone is the implementation's concern; calculators only
/// ever see the resulting [`NaiveDate`].
///
/// # Implementations
///
/// - [`crate::infrastructure::clock::SystemClock`] - Wall clock in a configured zone
/// - [`crate::infrastructure::clock::FixedClock`] - Constant date for tests and the CLI
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

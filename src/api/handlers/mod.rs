//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod facts;
pub mod health;

pub use facts::{facts_handler, weekdays_handler};
pub use health::health_handler;

//! Business logic services for the application layer.

pub mod facts_service;

pub use facts_service::{FactsService, FetchMode, ReferenceData};

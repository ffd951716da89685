//! Web layer for the browser form.
//!
//! Renders the date form, the weekday bar chart (inline SVG) and the fact list
//! with Askama templates.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration
//! - [`view`] - Chart geometry and display models fed to the templates

pub mod handlers;
pub mod routes;
pub mod view;

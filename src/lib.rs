//! Salary converter.
//!
//! This crate converts a monthly salary into hourly, daily, weekly, biweekly,
//! monthly, bimonthly, quarterly, semiannual and annual amounts in two
//! currencies, and renders the results as a localized table. Theme, language
//! and form fields persist across sessions.

#![warn(missing_docs)]

pub mod app;
pub mod calculation;
pub mod config;
pub mod error;
pub mod events;
pub mod i18n;
pub mod models;
pub mod presentation;
pub mod store;

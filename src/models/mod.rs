//! Core data models for the salary converter.
//!
//! This module contains all the domain models used throughout the crate.

mod calculation_input;
mod calculation_result;
mod preferences;

pub use calculation_input::{CalculationInput, HoursPerWeek, UnsupportedHours};
pub use calculation_result::{CalculationResult, PERIOD_COUNT, Period, PeriodConversion};
pub use preferences::{Language, Theme, UnknownPreference};

//! Calculation input model.
//!
//! A [`CalculationInput`] is the validated form of what the user typed:
//! two positive monetary amounts and one of the supported weekly-hours
//! selections.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The weekly working-hours options offered by the selector.
///
/// # Example
///
/// ```
/// use salary_converter::models::HoursPerWeek;
///
/// assert_eq!(HoursPerWeek::default(), HoursPerWeek::Forty);
/// assert_eq!(HoursPerWeek::FortyEight.hours(), 48);
/// assert_eq!("45".parse::<HoursPerWeek>().unwrap(), HoursPerWeek::FortyFive);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum HoursPerWeek {
    /// 40 hours per week.
    #[default]
    Forty,
    /// 45 hours per week.
    FortyFive,
    /// 48 hours per week.
    FortyEight,
}

/// Raised when a number of hours is not one of the selector's options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported weekly hours: {0}")]
pub struct UnsupportedHours(String);

impl HoursPerWeek {
    /// All selectable options, in selector order.
    pub const ALL: [HoursPerWeek; 3] = [
        HoursPerWeek::Forty,
        HoursPerWeek::FortyFive,
        HoursPerWeek::FortyEight,
    ];

    /// Returns the number of hours worked per week.
    pub fn hours(&self) -> u32 {
        match self {
            HoursPerWeek::Forty => 40,
            HoursPerWeek::FortyFive => 45,
            HoursPerWeek::FortyEight => 48,
        }
    }

    /// Returns the hours as a decimal for monetary arithmetic.
    pub fn as_decimal(&self) -> Decimal {
        Decimal::from(self.hours())
    }
}

impl TryFrom<u32> for HoursPerWeek {
    type Error = UnsupportedHours;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        HoursPerWeek::ALL
            .into_iter()
            .find(|h| h.hours() == value)
            .ok_or_else(|| UnsupportedHours(value.to_string()))
    }
}

impl From<HoursPerWeek> for u32 {
    fn from(value: HoursPerWeek) -> Self {
        value.hours()
    }
}

impl FromStr for HoursPerWeek {
    type Err = UnsupportedHours;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map_err(|_| UnsupportedHours(s.to_string()))
            .and_then(HoursPerWeek::try_from)
    }
}

impl fmt::Display for HoursPerWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hours())
    }
}

/// Validated input for a single calculation.
///
/// Both monetary fields are strictly positive. Values are only constructed by
/// [`crate::calculation::validate`], or directly in tests and benchmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Salary per month in the primary currency.
    pub monthly_salary: Decimal,
    /// Units of primary currency per one unit of secondary currency.
    pub exchange_rate: Decimal,
    /// The selected weekly hours.
    pub hours_per_week: HoursPerWeek,
}

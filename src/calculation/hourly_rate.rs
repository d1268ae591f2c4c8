//! Hourly rate derivation.
//!
//! A monthly salary is spread over an average month of
//! [`WEEKS_PER_MONTH`] weeks to obtain the hourly rate every shorter
//! period is built from.

use rust_decimal::Decimal;

use crate::models::{CalculationInput, HoursPerWeek};

/// Average number of weeks in a month (4.33).
pub const WEEKS_PER_MONTH: Decimal = Decimal::from_parts(433, 0, 0, false, 2);

/// Length of a working day in hours.
pub const HOURS_PER_WORKDAY: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Returns the number of hours worked in an average month.
///
/// # Example
///
/// ```
/// use salary_converter::calculation::hours_per_month;
/// use salary_converter::models::HoursPerWeek;
///
/// assert_eq!(hours_per_month(HoursPerWeek::Forty).to_string(), "173.20");
/// ```
pub fn hours_per_month(hours_per_week: HoursPerWeek) -> Decimal {
    hours_per_week.as_decimal() * WEEKS_PER_MONTH
}

/// The hourly rate in both currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourlyRate {
    /// Hours worked per average month.
    pub hours_per_month: Decimal,
    /// Hourly rate in the primary currency.
    pub primary: Decimal,
    /// Hourly rate in the secondary currency.
    pub secondary: Decimal,
}

/// Derives the hourly rate from a validated input.
///
/// # Arguments
///
/// * `input` - The validated salary, exchange rate and weekly hours
///
/// # Returns
///
/// Returns an `HourlyRate` holding the monthly hours and the rate in both
/// currencies.
pub fn calculate_hourly_rate(input: &CalculationInput) -> HourlyRate {
    let hours_per_month = hours_per_month(input.hours_per_week);
    let primary = input.monthly_salary / hours_per_month;

    HourlyRate {
        hours_per_month,
        primary,
        secondary: primary / input.exchange_rate,
    }
}

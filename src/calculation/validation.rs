//! Input validation for the salary form.
//!
//! This module turns the raw text of the form fields into a
//! [`CalculationInput`], reporting every invalid field at once.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{ValidationError, ValidationErrors};
use crate::models::{CalculationInput, HoursPerWeek};

/// Largest salary or exchange rate accepted (10^15).
///
/// Keeps the annual amount and the secondary-currency figures inside the
/// range of [`Decimal`].
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Smallest exchange rate accepted (0.000001).
pub const MIN_EXCHANGE_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 6);

/// The form fields as typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawInput<'a> {
    /// Monthly salary text.
    pub salary: &'a str,
    /// Exchange rate text.
    pub exchange_rate: &'a str,
    /// The selected weekly hours.
    pub hours_per_week: HoursPerWeek,
}

/// Parses a decimal number, accepting plain and scientific notation.
///
/// Returns `None` for empty text and anything that is not a number
/// (including `NaN`, `inf` and digit separators such as `1_000`).
pub fn parse_amount(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.is_empty() || text.contains('_') {
        return None;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

fn positive_within(value: Option<Decimal>, floor: Decimal) -> Option<Decimal> {
    value.filter(|v| *v > Decimal::ZERO && *v >= floor && *v <= MAX_AMOUNT)
}

/// Validates the raw form fields.
///
/// The salary and the exchange rate are checked independently and both checks
/// always run, so the error lists every invalid field.
///
/// # Arguments
///
/// * `raw` - The salary and exchange-rate text plus the selected weekly hours
///
/// # Returns
///
/// Returns a `CalculationInput` when the salary lies in (0, 10^15] and the
/// exchange rate in [0.000001, 10^15]. Otherwise returns `ValidationErrors`
/// listing the salary error before the exchange-rate error.
///
/// # Example
///
/// ```
/// use salary_converter::calculation::{RawInput, validate};
/// use salary_converter::error::ValidationError;
/// use salary_converter::models::HoursPerWeek;
///
/// let input = validate(RawInput {
///     salary: "15000",
///     exchange_rate: "18.5",
///     hours_per_week: HoursPerWeek::Forty,
/// })
/// .unwrap();
/// assert_eq!(input.monthly_salary.to_string(), "15000");
///
/// let errors = validate(RawInput {
///     salary: "0",
///     exchange_rate: "",
///     hours_per_week: HoursPerWeek::Forty,
/// })
/// .unwrap_err();
/// assert!(errors.contains(ValidationError::InvalidSalary));
/// assert!(errors.contains(ValidationError::InvalidExchangeRate));
/// ```
pub fn validate(raw: RawInput<'_>) -> Result<CalculationInput, ValidationErrors> {
    let salary = positive_within(parse_amount(raw.salary), Decimal::ZERO);
    let exchange_rate = positive_within(parse_amount(raw.exchange_rate), MIN_EXCHANGE_RATE);

    match (salary, exchange_rate) {
        (Some(monthly_salary), Some(exchange_rate)) => Ok(CalculationInput {
            monthly_salary,
            exchange_rate,
            hours_per_week: raw.hours_per_week,
        }),
        (salary, exchange_rate) => {
            let mut errors = Vec::with_capacity(2);
            if salary.is_none() {
                errors.push(ValidationError::InvalidSalary);
            }
            if exchange_rate.is_none() {
                errors.push(ValidationError::InvalidExchangeRate);
            }
            Err(ValidationErrors::new(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw<'a>(salary: &'a str, exchange_rate: &'a str) -> RawInput<'a> {
        RawInput {
            salary,
            exchange_rate,
            hours_per_week: HoursPerWeek::Forty,
        }
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_bounds_constants() {
        assert_eq!(MAX_AMOUNT, dec("1000000000000000"));
        assert_eq!(MIN_EXCHANGE_RATE, dec("0.000001"));
    }

    #[test]
    fn test_accepts_valid_input() {
        let input = validate(raw("15000", "18.5")).unwrap();
        assert_eq!(input.monthly_salary, dec("15000"));
        assert_eq!(input.exchange_rate, dec("18.5"));
        assert_eq!(input.hours_per_week, HoursPerWeek::Forty);
    }

    #[test]
    fn test_rejects_invalid_salaries() {
        for salary in ["0", "-5", "NaN", "", "   ", "abc", "inf"] {
            let errors = validate(raw(salary, "18.5")).unwrap_err();
            assert_eq!(
                errors.errors(),
                &[ValidationError::InvalidSalary],
                "salary {:?} should be rejected",
                salary
            );
        }
    }

    #[test]
    fn test_rejects_invalid_exchange_rates() {
        for rate in ["0", "-1", "NaN", "", "0.0000001"] {
            let errors = validate(raw("15000", rate)).unwrap_err();
            assert_eq!(
                errors.errors(),
                &[ValidationError::InvalidExchangeRate],
                "rate {:?} should be rejected",
                rate
            );
        }
    }

    #[test]
    fn test_reports_both_errors_together() {
        let errors = validate(raw("-5", "0")).unwrap_err();
        assert_eq!(
            errors.errors(),
            &[
                ValidationError::InvalidSalary,
                ValidationError::InvalidExchangeRate
            ]
        );
    }

    #[test]
    fn test_rejects_amounts_above_ceiling() {
        let errors = validate(raw("1000000000000001", "1e16")).unwrap_err();
        assert_eq!(errors.errors().len(), 2);

        assert!(validate(raw("1000000000000000", "0.000001")).is_ok());
    }

    #[test]
    fn test_parse_amount_trims_and_accepts_scientific() {
        assert_eq!(parse_amount(" 18.5 "), Some(dec("18.5")));
        assert_eq!(parse_amount("1.5e4"), Some(dec("15000")));
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount(""), None);
    }

    #[test]
    fn test_parse_amount_rejects_digit_separators() {
        assert_eq!(parse_amount("1_000"), None);
        assert_eq!(parse_amount("1_5e3"), None);
        assert_eq!(parse_amount("+1000"), Some(dec("1000")));
        assert!(validate(raw("15_000", "18.5")).is_err());
    }

    #[test]
    fn test_hours_selection_is_carried_through() {
        let input = validate(RawInput {
            salary: "20000",
            exchange_rate: "17",
            hours_per_week: HoursPerWeek::FortyEight,
        })
        .unwrap();
        assert_eq!(input.hours_per_week, HoursPerWeek::FortyEight);
    }
}

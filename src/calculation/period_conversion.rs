//! Period conversion: the heart of the salary converter.
//!
//! Every period amount is derived directly from either the hourly rate or the
//! monthly salary, never from another period, so rounding does not compound.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{CalculationInput, CalculationResult, Period, PeriodConversion};

use super::hourly_rate::{HOURS_PER_WORKDAY, HourlyRate, calculate_hourly_rate};

/// Returns the primary-currency amount of a single period.
fn primary_amount(period: Period, input: &CalculationInput, hourly: &HourlyRate) -> Decimal {
    let monthly = input.monthly_salary;
    match period {
        Period::Hourly => hourly.primary,
        Period::Daily => hourly.primary * HOURS_PER_WORKDAY,
        Period::Weekly => hourly.primary * input.hours_per_week.as_decimal(),
        Period::Biweekly => monthly / Decimal::TWO,
        Period::Monthly => monthly,
        Period::Bimonthly => monthly * Decimal::TWO,
        Period::Quarterly => monthly * Decimal::from(3),
        Period::Semiannual => monthly * Decimal::from(6),
        Period::Annual => monthly * Decimal::from(12),
    }
}

/// Converts a validated input into the nine period amounts in both currencies.
///
/// This function cannot fail: the validator guarantees a strictly positive
/// exchange rate and amounts small enough for decimal arithmetic.
///
/// # Arguments
///
/// * `input` - A validated salary, exchange rate and weekly hours
///
/// # Returns
///
/// Returns a `CalculationResult` with one `PeriodConversion` per period,
/// hourly first and annual last.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use salary_converter::calculation::compute;
/// use salary_converter::models::{CalculationInput, HoursPerWeek, Period};
///
/// let result = compute(&CalculationInput {
///     monthly_salary: Decimal::from(15000),
///     exchange_rate: Decimal::new(185, 1),
///     hours_per_week: HoursPerWeek::Forty,
/// });
///
/// assert_eq!(result.conversions().len(), 9);
/// assert_eq!(result.get(Period::Annual).amount_primary, Decimal::from(180000));
/// ```
pub fn compute(input: &CalculationInput) -> CalculationResult {
    let hourly = calculate_hourly_rate(input);

    let conversions = Period::ALL.map(|period| {
        let amount_primary = primary_amount(period, input, &hourly);
        PeriodConversion {
            period,
            amount_primary,
            amount_secondary: amount_primary / input.exchange_rate,
            display_order: period.display_order(),
        }
    });

    let result = CalculationResult::new(*input, conversions);

    debug!(
        calculation_id = %result.calculation_id,
        monthly_salary = %input.monthly_salary,
        exchange_rate = %input.exchange_rate,
        hours_per_week = input.hours_per_week.hours(),
        hours_per_month = %hourly.hours_per_month,
        hourly_primary = %hourly.primary,
        "Computed period conversions"
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HoursPerWeek;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn reference_input() -> CalculationInput {
        CalculationInput {
            monthly_salary: dec("15000"),
            exchange_rate: dec("18.5"),
            hours_per_week: HoursPerWeek::Forty,
        }
    }

    #[test]
    fn test_returns_nine_rows_in_display_order() {
        let result = compute(&reference_input());

        let orders: Vec<u8> = result.iter().map(|c| c.display_order).collect();
        assert_eq!(orders, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);

        let periods: Vec<Period> = result.iter().map(|c| c.period).collect();
        assert_eq!(periods, Period::ALL.to_vec());
    }

    #[test]
    fn test_reference_scenario_amounts() {
        let result = compute(&reference_input());

        let hourly = result.get(Period::Hourly);
        assert_eq!(hourly.amount_primary.round_dp(2), dec("86.61"));
        assert_eq!(hourly.amount_secondary.round_dp(2), dec("4.68"));

        assert_eq!(
            result.get(Period::Daily).amount_primary.round_dp(2),
            dec("692.84")
        );
        assert_eq!(
            result.get(Period::Weekly).amount_primary.round_dp(2),
            dec("3464.20")
        );

        let monthly = result.get(Period::Monthly);
        assert_eq!(monthly.amount_primary, dec("15000"));
        assert_eq!(monthly.amount_secondary.round_dp(2), dec("810.81"));

        let annual = result.get(Period::Annual);
        assert_eq!(annual.amount_primary, dec("180000"));
        assert_eq!(annual.amount_secondary.round_dp(2), dec("9729.73"));
    }

    #[test]
    fn test_monthly_based_periods_are_exact() {
        let result = compute(&reference_input());
        let monthly = result.get(Period::Monthly).amount_primary;

        assert_eq!(result.get(Period::Biweekly).amount_primary, dec("7500"));
        assert_eq!(result.get(Period::Bimonthly).amount_primary, monthly * dec("2"));
        assert_eq!(result.get(Period::Quarterly).amount_primary, dec("45000"));
        assert_eq!(result.get(Period::Semiannual).amount_primary, dec("90000"));
    }

    #[test]
    fn test_weekly_uses_selected_hours() {
        let input = CalculationInput {
            hours_per_week: HoursPerWeek::FortyEight,
            ..reference_input()
        };
        let result = compute(&input);
        let hourly = result.get(Period::Hourly).amount_primary;

        assert_eq!(result.get(Period::Weekly).amount_primary, hourly * dec("48"));
        assert_eq!(result.get(Period::Daily).amount_primary, hourly * dec("8"));
    }

    #[test]
    fn test_secondary_amounts_divide_by_rate() {
        let result = compute(&reference_input());
        for conversion in result.iter() {
            assert_eq!(
                conversion.amount_secondary,
                conversion.amount_primary / dec("18.5")
            );
        }
    }

    #[test]
    fn test_result_carries_input_and_fresh_id() {
        let first = compute(&reference_input());
        let second = compute(&reference_input());

        assert_eq!(first.input, reference_input());
        assert_ne!(first.calculation_id, second.calculation_id);
    }
}

//! Form state for the salary converter.
//!
//! This module holds what the user has typed and which fields are currently
//! flagged as invalid.

use tracing::warn;

use crate::calculation::RawInput;
use crate::error::{ValidationError, ValidationErrors};
use crate::models::HoursPerWeek;
use crate::store::CalculatorRecord;

/// The input fields of the calculator form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Monthly salary text.
    pub salary: String,
    /// Exchange rate text.
    pub exchange_rate: String,
    /// The selected weekly hours.
    pub hours_per_week: HoursPerWeek,
}

impl FormState {
    /// Borrows the fields for validation.
    pub fn raw_input(&self) -> RawInput<'_> {
        RawInput {
            salary: &self.salary,
            exchange_rate: &self.exchange_rate,
            hours_per_week: self.hours_per_week,
        }
    }

    /// Builds the record persisted under `calculatorData`.
    pub fn to_record(&self) -> CalculatorRecord {
        CalculatorRecord {
            salary: self.salary.clone(),
            exchange_rate: self.exchange_rate.clone(),
            hours: self.hours_per_week.to_string(),
        }
    }

    /// Restores the fields from a saved record.
    ///
    /// An hours value that is not one of the options keeps the default
    /// selection.
    pub fn from_record(record: CalculatorRecord) -> Self {
        let hours_per_week = record.hours.parse::<HoursPerWeek>().unwrap_or_else(|e| {
            if !record.hours.is_empty() {
                warn!(error = %e, "Ignoring stored hours selection");
            }
            HoursPerWeek::default()
        });

        Self {
            salary: record.salary,
            exchange_rate: record.exchange_rate,
            hours_per_week,
        }
    }
}

/// Per-field error indicators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    /// Error shown next to the salary field.
    pub salary: Option<ValidationError>,
    /// Error shown next to the exchange-rate field.
    pub exchange_rate: Option<ValidationError>,
}

impl FieldErrors {
    /// Returns true if no field is flagged.
    pub fn is_empty(&self) -> bool {
        self.salary.is_none() && self.exchange_rate.is_none()
    }

    /// Clears every indicator.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        Self {
            salary: errors
                .contains(ValidationError::InvalidSalary)
                .then_some(ValidationError::InvalidSalary),
            exchange_rate: errors
                .contains(ValidationError::InvalidExchangeRate)
                .then_some(ValidationError::InvalidExchangeRate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_round_trip() {
        let form = FormState {
            salary: "15000".to_string(),
            exchange_rate: "18.5".to_string(),
            hours_per_week: HoursPerWeek::FortyEight,
        };
        let record = form.to_record();
        assert_eq!(record.hours, "48");
        assert_eq!(FormState::from_record(record), form);
    }

    #[test]
    fn test_unknown_hours_fall_back_to_default() {
        let form = FormState::from_record(CalculatorRecord {
            salary: "1".to_string(),
            exchange_rate: "2".to_string(),
            hours: "37".to_string(),
        });
        assert_eq!(form.hours_per_week, HoursPerWeek::Forty);
    }

    #[test]
    fn test_field_errors_from_validation() {
        let both = ValidationErrors::new(vec![
            ValidationError::InvalidSalary,
            ValidationError::InvalidExchangeRate,
        ]);
        let errors = FieldErrors::from(&both);
        assert_eq!(errors.salary, Some(ValidationError::InvalidSalary));
        assert_eq!(errors.exchange_rate, Some(ValidationError::InvalidExchangeRate));

        let only_rate = ValidationErrors::new(vec![ValidationError::InvalidExchangeRate]);
        let mut errors = FieldErrors::from(&only_rate);
        assert_eq!(errors.salary, None);
        assert!(!errors.is_empty());

        errors.clear();
        assert!(errors.is_empty());
    }
}

//! Error types for the salary converter.
//!
//! Two families of errors live here. [`ValidationError`] covers the
//! recoverable, per-field problems with user input; these never leave the
//! input form. [`ConverterError`] covers infrastructure failures (configuration,
//! persistence) and is built with the `thiserror` crate.

use std::fmt;

use thiserror::Error;

/// A single invalid form field.
///
/// # Example
///
/// ```
/// use salary_converter::error::ValidationError;
///
/// assert_eq!(ValidationError::InvalidSalary.i18n_key(), "errors.invalidSalary");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    /// The salary was absent, not a number, zero or negative.
    #[error("Invalid salary: expected a number greater than zero")]
    InvalidSalary,

    /// The exchange rate was absent, not a number, zero or negative.
    #[error("Invalid exchange rate: expected a number greater than zero")]
    InvalidExchangeRate,
}

impl ValidationError {
    /// Returns the localization key of the message shown next to the field.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ValidationError::InvalidSalary => "errors.invalidSalary",
            ValidationError::InvalidExchangeRate => "errors.invalidExchange",
        }
    }
}

/// Every field error found by one validation pass.
///
/// Validation never stops at the first failure, so this holds one entry per
/// invalid field, in form order (salary before exchange rate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub(crate) fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    /// Returns the individual field errors.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns true if the given field error is present.
    pub fn contains(&self, error: ValidationError) -> bool {
        self.errors.contains(&error)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Infrastructure errors raised while loading configuration or touching the
/// persistence store.
///
/// # Example
///
/// ```
/// use salary_converter::error::ConverterError;
///
/// let error = ConverterError::ConfigNotFound {
///     path: "/missing/settings.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/settings.yaml");
/// ```
#[derive(Debug, Error)]
pub enum ConverterError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The persistence store could not be read or written.
    #[error("Store error at '{path}': {message}")]
    StoreError {
        /// Location of the store.
        path: String,
        /// A description of the failure.
        message: String,
    },

    /// A persisted value exists but could not be decoded.
    #[error("Malformed stored value for key '{key}': {message}")]
    MalformedRecord {
        /// The store key holding the bad value.
        key: String,
        /// A description of the decode error.
        message: String,
    },
}

/// A type alias for Results that return ConverterError.
pub type ConverterResult<T> = Result<T, ConverterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_keys() {
        assert_eq!(
            ValidationError::InvalidSalary.i18n_key(),
            "errors.invalidSalary"
        );
        assert_eq!(
            ValidationError::InvalidExchangeRate.i18n_key(),
            "errors.invalidExchange"
        );
    }

    #[test]
    fn test_validation_errors_display_joins_fields() {
        let errors = ValidationErrors::new(vec![
            ValidationError::InvalidSalary,
            ValidationError::InvalidExchangeRate,
        ]);
        assert_eq!(
            errors.to_string(),
            "Invalid salary: expected a number greater than zero; \
             Invalid exchange rate: expected a number greater than zero"
        );
        assert!(errors.contains(ValidationError::InvalidSalary));
        assert_eq!(errors.errors().len(), 2);
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = ConverterError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_store_error_displays_path_and_message() {
        let error = ConverterError::StoreError {
            path: "/data/store.json".to_string(),
            message: "permission denied".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Store error at '/data/store.json': permission denied"
        );
    }

    #[test]
    fn test_malformed_record_displays_key() {
        let error = ConverterError::MalformedRecord {
            key: "calculatorData".to_string(),
            message: "expected value".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed stored value for key 'calculatorData': expected value"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ConverterError>();
        assert_error::<ValidationErrors>();
        assert_error::<ValidationError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> ConverterResult<()> {
            Err(ConverterError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> ConverterResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}

//! Typed access to the values a session persists.
//!
//! Three keys are used: [`LANGUAGE_KEY`], [`THEME_KEY`] and
//! [`CALCULATOR_DATA_KEY`], the last holding a JSON [`CalculatorRecord`].

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ConverterError, ConverterResult};
use crate::models::{Language, Theme};

use super::KeyValueStore;

/// Key of the interface language.
pub const LANGUAGE_KEY: &str = "language";

/// Key of the colour theme.
pub const THEME_KEY: &str = "theme";

/// Key of the saved form fields.
pub const CALCULATOR_DATA_KEY: &str = "calculatorData";

/// The calculator form as last saved, kept as the raw text of each field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorRecord {
    /// Salary field text.
    #[serde(default)]
    pub salary: String,
    /// Exchange-rate field text.
    #[serde(default)]
    pub exchange_rate: String,
    /// Selected weekly hours, as text.
    #[serde(default)]
    pub hours: String,
}

/// Reads the saved theme, if any.
///
/// An unrecognised stored value is logged and treated as absent.
pub fn read_theme<S: KeyValueStore + ?Sized>(store: &S) -> ConverterResult<Option<Theme>> {
    Ok(store.get(THEME_KEY)?.and_then(|value| {
        value
            .parse::<Theme>()
            .map_err(|e| warn!(error = %e, "Ignoring stored theme"))
            .ok()
    }))
}

/// Saves the theme.
pub fn write_theme<S: KeyValueStore + ?Sized>(store: &mut S, theme: Theme) -> ConverterResult<()> {
    store.set(THEME_KEY, theme.as_str())
}

/// Reads the saved language, if any.
///
/// An unrecognised stored value is logged and treated as absent.
pub fn read_language<S: KeyValueStore + ?Sized>(store: &S) -> ConverterResult<Option<Language>> {
    Ok(store.get(LANGUAGE_KEY)?.and_then(|value| {
        value
            .parse::<Language>()
            .map_err(|e| warn!(error = %e, "Ignoring stored language"))
            .ok()
    }))
}

/// Saves the language.
pub fn write_language<S: KeyValueStore + ?Sized>(
    store: &mut S,
    language: Language,
) -> ConverterResult<()> {
    store.set(LANGUAGE_KEY, language.code())
}

/// Reads the saved calculator form.
///
/// # Errors
///
/// Returns `MalformedRecord` if the stored value is not a valid record.
pub fn read_record<S: KeyValueStore + ?Sized>(
    store: &S,
) -> ConverterResult<Option<CalculatorRecord>> {
    store
        .get(CALCULATOR_DATA_KEY)?
        .map(|value| {
            serde_json::from_str(&value).map_err(|e| ConverterError::MalformedRecord {
                key: CALCULATOR_DATA_KEY.to_string(),
                message: e.to_string(),
            })
        })
        .transpose()
}

/// Saves the calculator form.
pub fn write_record<S: KeyValueStore + ?Sized>(
    store: &mut S,
    record: &CalculatorRecord,
) -> ConverterResult<()> {
    let value = serde_json::to_string(record).map_err(|e| ConverterError::MalformedRecord {
        key: CALCULATOR_DATA_KEY.to_string(),
        message: e.to_string(),
    })?;
    store.set(CALCULATOR_DATA_KEY, &value)
}

/// Erases the calculator form.
pub fn clear_record<S: KeyValueStore + ?Sized>(store: &mut S) -> ConverterResult<()> {
    store.remove(CALCULATOR_DATA_KEY)
}

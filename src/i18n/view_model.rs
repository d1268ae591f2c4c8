//! Mapping of displayable fields to localization keys.

use std::collections::BTreeMap;

use serde::Serialize;

use super::Translator;

/// A piece of interface text that changes with the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    /// Application title.
    Title,
    /// Application subtitle.
    Subtitle,
    /// Salary input label.
    SalaryLabel,
    /// Salary input placeholder.
    SalaryPlaceholder,
    /// Exchange-rate input label.
    ExchangeRateLabel,
    /// Exchange-rate input placeholder.
    ExchangeRatePlaceholder,
    /// Weekly hours selector label.
    HoursLabel,
    /// Calculate action.
    CalculateAction,
    /// Reset action.
    ResetAction,
    /// Theme toggle.
    ThemeToggle,
    /// Language selector label.
    LanguageLabel,
    /// Heading above the results table.
    ResultsTitle,
}

/// Localized text per field.
pub type LocalizedView = BTreeMap<FieldId, String>;

/// Binds every [`FieldId`] to its localization key.
///
/// Re-apply the view model whenever the active language changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    bindings: Vec<(FieldId, &'static str)>,
}

impl Default for ViewModel {
    fn default() -> Self {
        Self {
            bindings: vec![
                (FieldId::Title, "app.title"),
                (FieldId::Subtitle, "app.subtitle"),
                (FieldId::SalaryLabel, "form.salary"),
                (FieldId::SalaryPlaceholder, "form.salaryPlaceholder"),
                (FieldId::ExchangeRateLabel, "form.exchangeRate"),
                (FieldId::ExchangeRatePlaceholder, "form.exchangeRatePlaceholder"),
                (FieldId::HoursLabel, "form.hours"),
                (FieldId::CalculateAction, "form.calculate"),
                (FieldId::ResetAction, "form.reset"),
                (FieldId::ThemeToggle, "theme.toggle"),
                (FieldId::LanguageLabel, "app.language"),
                (FieldId::ResultsTitle, "results.title"),
            ],
        }
    }
}

impl ViewModel {
    /// Resolves every binding in the translator's active language.
    pub fn apply(&self, translator: &Translator) -> LocalizedView {
        self.bindings
            .iter()
            .map(|(field, key)| (*field, translator.get(key)))
            .collect()
    }
}

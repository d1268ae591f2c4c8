//! The salary converter session.
//!
//! [`SalaryConverter`] is constructed once at startup with its collaborators
//! (configuration, store, translator) and then driven by user actions:
//! editing fields, calculating, resetting, switching theme or language.

use tracing::{debug, info, warn};

use crate::calculation::{compute, validate};
use crate::config::AppConfig;
use crate::error::{ConverterResult, ValidationError, ValidationErrors};
use crate::events::{AppEvent, EventBus, EventKind};
use crate::i18n::{LocalizedView, Translator, ViewModel};
use crate::models::{CalculationResult, HoursPerWeek, Language, Theme};
use crate::presentation::{TableModel, TableRenderer};
use crate::store::{self, KeyValueStore};

use super::state::{FieldErrors, FormState};

/// A calculator session over a persistence store.
#[derive(Debug)]
pub struct SalaryConverter<S: KeyValueStore> {
    renderer: TableRenderer,
    store: S,
    translator: Translator,
    view_model: ViewModel,
    events: EventBus,
    form: FormState,
    errors: FieldErrors,
    theme: Theme,
    result: Option<CalculationResult>,
    table: Option<TableModel>,
}

impl<S: KeyValueStore> SalaryConverter<S> {
    /// Creates a session, restoring theme, language and form fields from the
    /// store. Absent or unreadable values fall back to defaults.
    ///
    /// # Arguments
    ///
    /// * `config` - Number locale, currencies and default language
    /// * `store` - Where preferences and form fields are read and saved
    /// * `translator` - Translation bundles; the stored language is activated
    ///   only if its bundle is loaded
    pub fn new(config: &AppConfig, store: S, mut translator: Translator) -> Self {
        let theme = store::read_theme(&store)
            .unwrap_or_else(|e| {
                warn!(error = %e, "Failed to read theme");
                None
            })
            .unwrap_or_default();

        let language = store::read_language(&store)
            .unwrap_or_else(|e| {
                warn!(error = %e, "Failed to read language");
                None
            })
            .unwrap_or(config.default_language);
        if !translator.set_language(language) {
            warn!(language = %language, "No translations loaded for language");
        }

        let form = match store::read_record(&store) {
            Ok(Some(record)) => FormState::from_record(record),
            Ok(None) => FormState::default(),
            Err(e) => {
                warn!(error = %e, "Discarding saved calculator data");
                FormState::default()
            }
        };

        info!(
            theme = %theme,
            language = %translator.language(),
            restored_salary = !form.salary.is_empty(),
            "Session started"
        );

        Self {
            renderer: config.table_renderer(),
            store,
            translator,
            view_model: ViewModel::default(),
            events: EventBus::new(),
            form,
            errors: FieldErrors::default(),
            theme,
            result: None,
            table: None,
        }
    }

    /// Runs a store operation, logging instead of failing.
    fn persist<F>(&mut self, what: &'static str, op: F)
    where
        F: FnOnce(&mut S) -> ConverterResult<()>,
    {
        if let Err(e) = op(&mut self.store) {
            warn!(what, error = %e, "Failed to persist session data");
        }
    }

    fn save_form(&mut self) {
        let record = self.form.to_record();
        self.persist("calculator data", |store| store::write_record(store, &record));
    }

    /// Returns the current form fields.
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Replaces the salary text and saves the form.
    pub fn set_salary(&mut self, text: impl Into<String>) {
        self.form.salary = text.into();
        self.save_form();
    }

    /// Replaces the exchange-rate text and saves the form.
    pub fn set_exchange_rate(&mut self, text: impl Into<String>) {
        self.form.exchange_rate = text.into();
        self.save_form();
    }

    /// Changes the weekly hours selection and saves the form.
    pub fn set_hours(&mut self, hours_per_week: HoursPerWeek) {
        self.form.hours_per_week = hours_per_week;
        self.save_form();
    }

    /// Validates the form and, when valid, computes and renders the results.
    ///
    /// On failure the offending fields are flagged and any previous results
    /// stay as they were. On success the field flags are cleared and the form
    /// is saved.
    ///
    /// # Returns
    ///
    /// Returns the rendered table, or every invalid field as `ValidationErrors`.
    pub fn calculate(&mut self) -> Result<&TableModel, ValidationErrors> {
        let input = match validate(self.form.raw_input()) {
            Ok(input) => input,
            Err(errors) => {
                debug!(errors = %errors, "Validation failed");
                self.errors = FieldErrors::from(&errors);
                return Err(errors);
            }
        };
        self.errors.clear();

        let result = compute(&input);
        info!(
            calculation_id = %result.calculation_id,
            monthly_salary = %input.monthly_salary,
            exchange_rate = %input.exchange_rate,
            hours_per_week = input.hours_per_week.hours(),
            "Calculation completed"
        );

        let table = self.render(&result);
        self.result = Some(result);
        self.save_form();

        let table: &TableModel = self.table.insert(table);
        Ok(table)
    }

    fn render(&self, result: &CalculationResult) -> TableModel {
        self.renderer.render(result, |key| self.translator.get(key))
    }

    /// Clears the inputs, restores the default hours, hides the results,
    /// clears the error flags and erases the saved form.
    pub fn reset(&mut self) {
        self.form = FormState::default();
        self.errors.clear();
        self.result = None;
        self.table = None;
        self.persist("calculator data", store::clear_record);
        info!("Calculator reset");
    }

    /// Returns the latest calculation, if results are shown.
    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    /// Returns the rendered results table, if results are shown.
    pub fn table(&self) -> Option<&TableModel> {
        self.table.as_ref()
    }

    /// Returns true while a results table is shown.
    pub fn results_visible(&self) -> bool {
        self.table.is_some()
    }

    /// Returns the current field error flags.
    pub fn field_errors(&self) -> FieldErrors {
        self.errors
    }

    fn error_message(&self, error: Option<ValidationError>) -> Option<String> {
        error.map(|e| self.translator.get(e.i18n_key()))
    }

    /// Returns the localized message shown next to the salary field.
    pub fn salary_error(&self) -> Option<String> {
        self.error_message(self.errors.salary)
    }

    /// Returns the localized message shown next to the exchange-rate field.
    pub fn exchange_rate_error(&self) -> Option<String> {
        self.error_message(self.errors.exchange_rate)
    }

    /// Returns the active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Applies and saves a theme, notifying `themeChanged` subscribers.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.persist("theme", |store| store::write_theme(store, theme));
        info!(theme = %theme, "Theme changed");
        self.events.emit(&AppEvent::ThemeChanged(theme));
    }

    /// Switches between the light and dark themes, returning the new one.
    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.theme.toggled();
        self.set_theme(theme);
        theme
    }

    /// Returns the active language.
    pub fn language(&self) -> Language {
        self.translator.language()
    }

    /// Switches the interface language.
    ///
    /// Has no effect and returns `false` when no translations are loaded for
    /// `language`. Otherwise the choice is saved, shown results are
    /// relabelled and `languageChanged` subscribers are notified.
    pub fn set_language(&mut self, language: Language) -> bool {
        if !self.translator.set_language(language) {
            warn!(language = %language, "No translations loaded for language");
            return false;
        }

        self.persist("language", |store| store::write_language(store, language));
        if let Some(result) = &self.result {
            self.table = Some(self.render(result));
        }
        info!(language = %language, "Language changed");
        self.events.emit(&AppEvent::LanguageChanged(language));
        true
    }

    /// Registers a subscriber for theme or language changes.
    pub fn subscribe<F>(&mut self, kind: EventKind, subscriber: F)
    where
        F: FnMut(&AppEvent) + 'static,
    {
        self.events.subscribe(kind, subscriber);
    }

    /// Returns every interface label in the active language.
    pub fn view(&self) -> LocalizedView {
        self.view_model.apply(&self.translator)
    }

    /// Returns the translator.
    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::FieldId;
    use crate::models::Period;
    use crate::store::{CALCULATOR_DATA_KEY, LANGUAGE_KEY, MemoryStore, THEME_KEY};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn converter(store: MemoryStore) -> SalaryConverter<MemoryStore> {
        SalaryConverter::new(
            &AppConfig::default(),
            store,
            Translator::embedded(Language::Es),
        )
    }

    fn filled() -> SalaryConverter<MemoryStore> {
        let mut converter = converter(MemoryStore::new());
        converter.set_salary("15000");
        converter.set_exchange_rate("18.5");
        converter
    }

    #[test]
    fn test_fresh_session_uses_defaults() {
        let converter = converter(MemoryStore::new());
        assert_eq!(converter.theme(), Theme::Light);
        assert_eq!(converter.language(), Language::Es);
        assert_eq!(converter.form(), &FormState::default());
        assert!(!converter.results_visible());
    }

    #[test]
    fn test_calculate_renders_table_and_saves_form() {
        let mut converter = filled();
        let table = converter.calculate().unwrap();

        assert_eq!(table.rows.len(), 9);
        assert_eq!(table.rows[0].label, "Por hora");
        assert_eq!(table.rows[0].primary, "86.61");
        assert_eq!(table.headers[1], "Valor (MXN)");

        assert!(converter.results_visible());
        let stored = store::read_record(converter.store()).unwrap().unwrap();
        assert_eq!(stored.salary, "15000");
        assert_eq!(stored.hours, "40");
    }

    #[test]
    fn test_invalid_input_flags_both_fields() {
        let mut converter = converter(MemoryStore::new());
        converter.set_salary("-5");

        let errors = converter.calculate().unwrap_err();
        assert_eq!(errors.errors().len(), 2);
        assert_eq!(
            converter.salary_error().as_deref(),
            Some("Ingresa un salario válido mayor a cero")
        );
        assert!(converter.exchange_rate_error().is_some());
        assert!(!converter.results_visible());
    }

    #[test]
    fn test_successful_calculation_clears_errors() {
        let mut converter = filled();
        converter.set_exchange_rate("0");
        assert!(converter.calculate().is_err());
        assert!(converter.salary_error().is_none());
        assert!(converter.exchange_rate_error().is_some());

        converter.set_exchange_rate("18.5");
        assert!(converter.calculate().is_ok());
        assert!(converter.field_errors().is_empty());
    }

    #[test]
    fn test_failed_calculation_keeps_previous_results() {
        let mut converter = filled();
        converter.calculate().unwrap();
        let id = converter.result().unwrap().calculation_id;

        converter.set_salary("");
        assert!(converter.calculate().is_err());
        assert_eq!(converter.result().unwrap().calculation_id, id);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut converter = filled();
        converter.set_hours(HoursPerWeek::FortyFive);
        converter.calculate().unwrap();

        converter.reset();

        assert_eq!(converter.form().salary, "");
        assert_eq!(converter.form().exchange_rate, "");
        assert_eq!(converter.form().hours_per_week, HoursPerWeek::Forty);
        assert!(!converter.results_visible());
        assert!(converter.result().is_none());
        assert!(converter.field_errors().is_empty());
        assert_eq!(converter.store().get(CALCULATOR_DATA_KEY).unwrap(), None);
    }

    #[test]
    fn test_session_is_restored_from_store() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "dark").unwrap();
        store.set(LANGUAGE_KEY, "en").unwrap();
        store
            .set(
                CALCULATOR_DATA_KEY,
                r#"{"salary":"20000","exchangeRate":"17","hours":"48"}"#,
            )
            .unwrap();

        let converter = converter(store);
        assert_eq!(converter.theme(), Theme::Dark);
        assert_eq!(converter.language(), Language::En);
        assert_eq!(converter.form().salary, "20000");
        assert_eq!(converter.form().hours_per_week, HoursPerWeek::FortyEight);
        // results are not shown until the user calculates
        assert!(!converter.results_visible());
    }

    #[test]
    fn test_malformed_saved_form_is_discarded() {
        let mut store = MemoryStore::new();
        store.set(CALCULATOR_DATA_KEY, "{broken").unwrap();

        let converter = converter(store);
        assert_eq!(converter.form(), &FormState::default());
    }

    #[test]
    fn test_toggle_theme_persists_and_notifies() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut converter = converter(MemoryStore::new());
        let sink = Rc::clone(&seen);
        converter.subscribe(EventKind::ThemeChanged, move |e| sink.borrow_mut().push(*e));

        assert_eq!(converter.toggle_theme(), Theme::Dark);
        assert_eq!(converter.toggle_theme(), Theme::Light);

        assert_eq!(
            *seen.borrow(),
            vec![
                AppEvent::ThemeChanged(Theme::Dark),
                AppEvent::ThemeChanged(Theme::Light)
            ]
        );
        assert_eq!(
            converter.store().get(THEME_KEY).unwrap().as_deref(),
            Some("light")
        );
    }

    #[test]
    fn test_language_change_relabels_results() {
        let mut converter = filled();
        converter.calculate().unwrap();

        assert!(converter.set_language(Language::En));

        let table = converter.table().unwrap();
        assert_eq!(table.rows[0].label, "Hourly");
        assert_eq!(table.headers[0], "Period");
        assert_eq!(converter.view()[&FieldId::CalculateAction], "Calculate");
        assert_eq!(
            converter.store().get(LANGUAGE_KEY).unwrap().as_deref(),
            Some("en")
        );
    }

    #[test]
    fn test_error_messages_follow_language() {
        let mut converter = converter(MemoryStore::new());
        let _ = converter.calculate();
        converter.set_language(Language::En);
        assert_eq!(
            converter.salary_error().as_deref(),
            Some("Enter a valid salary greater than zero")
        );
    }

    #[test]
    fn test_language_without_bundle_is_rejected() {
        let mut translator = Translator::new(Language::Es);
        translator.insert_bundle(Language::Es, serde_json::json!({}));
        let mut converter =
            SalaryConverter::new(&AppConfig::default(), MemoryStore::new(), translator);

        let notified = Rc::new(RefCell::new(false));
        let flag = Rc::clone(&notified);
        converter.subscribe(EventKind::LanguageChanged, move |_| *flag.borrow_mut() = true);

        assert!(!converter.set_language(Language::En));
        assert_eq!(converter.language(), Language::Es);
        assert!(!*notified.borrow());
        assert_eq!(converter.store().get(LANGUAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_hours_selection_changes_weekly_amount() {
        let mut converter = filled();
        let forty = converter.calculate().unwrap().rows[2].primary.clone();

        converter.set_hours(HoursPerWeek::FortyEight);
        converter.calculate().unwrap();
        let result = converter.result().unwrap();

        assert_eq!(forty, "3,464.20");
        assert_eq!(result.input.hours_per_week, HoursPerWeek::FortyEight);
        assert_eq!(
            result.get(Period::Monthly).amount_primary,
            result.input.monthly_salary
        );
    }
}

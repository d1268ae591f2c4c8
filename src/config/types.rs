//! Configuration types for the salary converter.
//!
//! This module contains the strongly-typed settings deserialized from the
//! YAML configuration file. Every field has a default, so an empty file (or
//! no file at all) yields a working configuration.

use std::path::PathBuf;

use serde::Deserialize;

use crate::models::Language;
use crate::presentation::{DEFAULT_NUMBER_LOCALE, NumberFormat, TableRenderer};

/// Directory name used under the platform data directory.
pub const APP_DIR_NAME: &str = "salary-converter";

/// File name of the session store.
pub const STORE_FILE_NAME: &str = "store.json";

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Language used when the store holds no preference.
    pub default_language: Language,
    /// BCP 47 tag selecting the number conventions (e.g. "es-MX").
    pub number_locale: String,
    /// Code of the currency the salary is entered in.
    pub primary_currency: String,
    /// Code of the currency amounts are converted to.
    pub secondary_currency: String,
    /// Directory holding `<code>.json` bundles; the embedded bundles are used
    /// when unset.
    pub locales_dir: Option<PathBuf>,
    /// Location of the session store; defaults to the platform data directory.
    pub store_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_language: Language::Es,
            number_locale: DEFAULT_NUMBER_LOCALE.to_string(),
            primary_currency: "MXN".to_string(),
            secondary_currency: "USD".to_string(),
            locales_dir: None,
            store_path: None,
        }
    }
}

impl AppConfig {
    /// Returns the number conventions for the configured locale.
    pub fn number_format(&self) -> NumberFormat {
        NumberFormat::for_locale_or_default(&self.number_locale)
    }

    /// Builds the results table renderer for this configuration.
    pub fn table_renderer(&self) -> TableRenderer {
        TableRenderer::new(
            self.number_format(),
            self.primary_currency.clone(),
            self.secondary_currency.clone(),
        )
    }

    /// Returns the store location: the configured path, or
    /// `<data dir>/salary-converter/store.json`.
    pub fn resolved_store_path(&self) -> Option<PathBuf> {
        self.store_path.clone().or_else(|| {
            dirs::data_dir().map(|dir| dir.join(APP_DIR_NAME).join(STORE_FILE_NAME))
        })
    }
}

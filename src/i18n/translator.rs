//! Translation bundles and key lookup.
//!
//! Bundles are nested JSON objects, one per [`Language`]. Keys use dotted
//! notation (`results.hourly`) and resolve by walking the object tree.

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, error, info};

use crate::models::Language;

const EMBEDDED_ES: &str = include_str!("../../locales/es.json");
const EMBEDDED_EN: &str = include_str!("../../locales/en.json");

/// Holds the loaded bundles and the active language.
///
/// Lookups never fail: a missing bundle or key yields the key itself.
///
/// # Example
///
/// ```
/// use salary_converter::i18n::Translator;
/// use salary_converter::models::Language;
///
/// let mut translator = Translator::embedded(Language::Es);
/// assert_eq!(translator.get("results.hourly"), "Por hora");
///
/// translator.set_language(Language::En);
/// assert_eq!(translator.get("results.hourly"), "Hourly");
/// assert_eq!(translator.get("results.missing"), "results.missing");
/// ```
#[derive(Debug, Clone)]
pub struct Translator {
    bundles: HashMap<Language, Value>,
    active: Language,
}

impl Translator {
    /// Creates a translator with no bundles loaded.
    pub fn new(active: Language) -> Self {
        Self {
            bundles: HashMap::new(),
            active,
        }
    }

    /// Creates a translator from the bundles compiled into the crate.
    pub fn embedded(active: Language) -> Self {
        let mut translator = Self::new(active);
        for (language, source) in [(Language::Es, EMBEDDED_ES), (Language::En, EMBEDDED_EN)] {
            translator.insert_json(language, source);
        }
        translator
    }

    /// Loads `<dir>/<code>.json` for every supported language.
    ///
    /// A bundle that cannot be read or parsed is logged and left absent; the
    /// remaining bundles still load.
    pub async fn load_dir<P: AsRef<Path>>(dir: P, active: Language) -> Self {
        let dir = dir.as_ref();
        let mut translator = Self::new(active);

        for language in Language::ALL {
            let path = dir.join(format!("{}.json", language.code()));
            match tokio::fs::read_to_string(&path).await {
                Ok(source) => translator.insert_json(language, &source),
                Err(e) => error!(
                    language = %language,
                    path = %path.display(),
                    error = %e,
                    "Error loading translations"
                ),
            }
        }

        info!(
            loaded = translator.bundles.len(),
            dir = %dir.display(),
            "Translation bundles loaded"
        );
        translator
    }

    fn insert_json(&mut self, language: Language, source: &str) {
        match serde_json::from_str::<Value>(source) {
            Ok(bundle) => self.insert_bundle(language, bundle),
            Err(e) => error!(
                language = %language,
                error = %e,
                "Error parsing translations"
            ),
        }
    }

    /// Adds or replaces the bundle of a language.
    pub fn insert_bundle(&mut self, language: Language, bundle: Value) {
        debug!(language = %language, "Registered translation bundle");
        self.bundles.insert(language, bundle);
    }

    /// Returns true if a bundle is loaded for `language`.
    pub fn has_bundle(&self, language: Language) -> bool {
        self.bundles.contains_key(&language)
    }

    /// Returns the active language.
    pub fn language(&self) -> Language {
        self.active
    }

    /// Switches the active language.
    ///
    /// Only succeeds when that language's bundle is loaded; otherwise the
    /// active language is kept and `false` is returned.
    pub fn set_language(&mut self, language: Language) -> bool {
        if self.has_bundle(language) {
            self.active = language;
            true
        } else {
            false
        }
    }

    /// Looks up a dotted key in the active bundle, falling back to the key.
    pub fn get(&self, key: &str) -> String {
        self.lookup(key)
            .map(str::to_string)
            .unwrap_or_else(|| key.to_string())
    }

    /// Looks up a dotted key, returning `None` when there is no non-empty
    /// string at that path.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let mut value = self.bundles.get(&self.active)?;
        for segment in key.split('.') {
            value = value.get(segment)?;
        }
        value.as_str().filter(|s| !s.is_empty())
    }
}

//! Configuration loading and management for the salary converter.
//!
//! Settings are read from a YAML file such as `config/settings.yaml`:
//!
//! ```yaml
//! default_language: es
//! number_locale: es-MX
//! primary_currency: MXN
//! secondary_currency: USD
//! ```
//!
//! # Example
//!
//! ```no_run
//! use salary_converter::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/settings.yaml").unwrap();
//! println!("Converting {} to {}", config.config().primary_currency, config.config().secondary_currency);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{APP_DIR_NAME, AppConfig, STORE_FILE_NAME};

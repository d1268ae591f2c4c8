//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading settings from
//! a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{ConverterError, ConverterResult};

use super::types::AppConfig;

/// Loads and provides access to the application settings.
///
/// # Example
///
/// ```no_run
/// use salary_converter::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/settings.yaml")?;
/// println!("Primary currency: {}", loader.config().primary_currency);
/// # Ok::<(), salary_converter::error::ConverterError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads settings from the given YAML file.
    ///
    /// # Errors
    ///
    /// - `ConfigNotFound` if the file cannot be read
    /// - `ConfigParseError` if it is not valid YAML or has unknown fields
    pub fn load<P: AsRef<Path>>(path: P) -> ConverterResult<Self> {
        let path = path.as_ref();
        let config = Self::load_yaml::<AppConfig>(path)?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> ConverterResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ConverterError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| ConverterError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> AppConfig {
        self.config
    }
}

//! Session persistence.
//!
//! A [`KeyValueStore`] maps string keys to string values and survives across
//! sessions. The `read_*`/`write_*` helpers give typed access to the keys the
//! converter uses.

mod json_file;
mod memory;
mod session;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use session::{
    CALCULATOR_DATA_KEY, CalculatorRecord, LANGUAGE_KEY, THEME_KEY, clear_record, read_language,
    read_record, read_theme, write_language, write_record, write_theme,
};

use crate::error::ConverterResult;

/// A string-keyed, string-valued store.
pub trait KeyValueStore {
    /// Returns the value stored under `key`.
    fn get(&self, key: &str) -> ConverterResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> ConverterResult<()>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> ConverterResult<()>;
}

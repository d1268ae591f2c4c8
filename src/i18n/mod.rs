//! Internationalization for the salary converter.
//!
//! Interface text is looked up by dotted keys (`results.hourly`,
//! `errors.invalidSalary`) in per-language JSON bundles.

mod translator;
mod view_model;

pub use translator::Translator;
pub use view_model::{FieldId, LocalizedView, ViewModel};

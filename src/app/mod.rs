//! Application layer: the calculator session and its form state.

mod converter;
mod state;

pub use converter::SalaryConverter;
pub use state::{FieldErrors, FormState};

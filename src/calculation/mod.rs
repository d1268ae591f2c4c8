//! Calculation logic for the salary converter.
//!
//! This module contains input validation, hourly rate derivation and the
//! conversion of a monthly salary into every supported period in two
//! currencies.

mod hourly_rate;
mod period_conversion;
mod validation;

pub use hourly_rate::{
    HOURS_PER_WORKDAY, HourlyRate, WEEKS_PER_MONTH, calculate_hourly_rate, hours_per_month,
};
pub use period_conversion::compute;
pub use validation::{MAX_AMOUNT, MIN_EXCHANGE_RATE, RawInput, parse_amount, validate};

//! Presentation of calculation results.
//!
//! Results become a [`TableModel`] of localized labels and formatted amounts,
//! which can then be laid out as text with [`to_text`].

mod number_format;
mod table;
mod text;

pub use number_format::{DEFAULT_NUMBER_LOCALE, NumberFormat};
pub use table::{
    AMOUNT_DECIMALS, PARAMETER_HEADER_KEY, TableModel, TableRenderer, TableRow,
    currency_header_key, render,
};
pub use text::to_text;

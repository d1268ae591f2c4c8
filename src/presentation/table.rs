//! Results table model.
//!
//! [`TableRenderer`] turns a [`CalculationResult`] into a [`TableModel`]:
//! localized headers and labels plus formatted amounts, one row per period.

use serde::Serialize;

use crate::models::{CalculationResult, Period};

use super::number_format::NumberFormat;

/// Fraction digits shown for every amount.
pub const AMOUNT_DECIMALS: u32 = 2;

/// Localization key of the first column header.
pub const PARAMETER_HEADER_KEY: &str = "results.parameter";

/// Returns the localization key of the header of a currency column.
pub fn currency_header_key(currency: &str) -> String {
    format!("results.value{}", currency)
}

/// One rendered row of the results table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    /// The period this row shows.
    pub period: Period,
    /// Localization key of the label.
    pub label_key: &'static str,
    /// Localized period label.
    pub label: String,
    /// Formatted primary-currency amount.
    pub primary: String,
    /// Formatted secondary-currency amount.
    pub secondary: String,
    /// Alternating-row marker, set on even row indices.
    pub striped: bool,
}

/// A display-ready results table with three columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableModel {
    /// Localization keys of the column headers.
    pub header_keys: [String; 3],
    /// Localized column headers.
    pub headers: [String; 3],
    /// Rows from the shortest period to the longest.
    pub rows: Vec<TableRow>,
}

/// Renders calculation results for a pair of currencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRenderer {
    number_format: NumberFormat,
    primary_currency: String,
    secondary_currency: String,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new(NumberFormat::default(), "MXN", "USD")
    }
}

impl TableRenderer {
    /// Creates a renderer for the given number conventions and currency codes.
    ///
    /// # Arguments
    ///
    /// * `number_format` - Separator conventions used for every amount
    /// * `primary_currency` - Code of the first amount column, e.g. `MXN`
    /// * `secondary_currency` - Code of the second amount column, e.g. `USD`
    ///
    /// The codes select the header keys `results.value{CODE}`.
    pub fn new(
        number_format: NumberFormat,
        primary_currency: impl Into<String>,
        secondary_currency: impl Into<String>,
    ) -> Self {
        Self {
            number_format,
            primary_currency: primary_currency.into(),
            secondary_currency: secondary_currency.into(),
        }
    }

    /// Builds the table, localizing every key through `localize`.
    ///
    /// # Arguments
    ///
    /// * `result` - The computed conversions
    /// * `localize` - Maps a localization key to display text
    ///
    /// # Returns
    ///
    /// Returns a `TableModel` with three headers and nine rows ordered by
    /// display order, every other row striped starting with the first.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use salary_converter::calculation::compute;
    /// use salary_converter::models::{CalculationInput, HoursPerWeek};
    /// use salary_converter::presentation::TableRenderer;
    ///
    /// let result = compute(&CalculationInput {
    ///     monthly_salary: Decimal::from(15000),
    ///     exchange_rate: Decimal::new(185, 1),
    ///     hours_per_week: HoursPerWeek::Forty,
    /// });
    /// let table = TableRenderer::default().render(&result, |key| key.to_string());
    ///
    /// assert_eq!(table.headers[1], "results.valueMXN");
    /// assert_eq!(table.rows[0].primary, "86.61");
    /// assert_eq!(table.rows[8].secondary, "9,729.73");
    /// ```
    pub fn render<F>(&self, result: &CalculationResult, localize: F) -> TableModel
    where
        F: Fn(&str) -> String,
    {
        let header_keys = [
            PARAMETER_HEADER_KEY.to_string(),
            currency_header_key(&self.primary_currency),
            currency_header_key(&self.secondary_currency),
        ];
        let headers = [
            localize(&header_keys[0]),
            localize(&header_keys[1]),
            localize(&header_keys[2]),
        ];

        let mut conversions: Vec<_> = result.iter().collect();
        conversions.sort_by_key(|c| c.display_order);

        let rows = conversions
            .into_iter()
            .enumerate()
            .map(|(index, conversion)| {
                let label_key = conversion.period.i18n_key();
                TableRow {
                    period: conversion.period,
                    label_key,
                    label: localize(label_key),
                    primary: self
                        .number_format
                        .format_fixed(conversion.amount_primary, AMOUNT_DECIMALS),
                    secondary: self
                        .number_format
                        .format_fixed(conversion.amount_secondary, AMOUNT_DECIMALS),
                    striped: index % 2 == 0,
                }
            })
            .collect();

        TableModel {
            header_keys,
            headers,
            rows,
        }
    }
}

/// Renders with the default renderer (`es-MX` numbers, MXN and USD columns).
pub fn render<F>(result: &CalculationResult, localize: F) -> TableModel
where
    F: Fn(&str) -> String,
{
    TableRenderer::default().render(result, localize)
}

//! Calculation result models for the salary converter.
//!
//! This module contains the [`CalculationResult`] type and the
//! [`PeriodConversion`] rows it is made of.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CalculationInput;

/// Number of periods every result contains.
pub const PERIOD_COUNT: usize = 9;

/// A pay period a salary can be expressed over.
///
/// Variants are declared from the shortest period to the longest, and
/// [`Period::display_order`] is a fixed property of each variant.
///
/// # Example
///
/// ```
/// use salary_converter::models::Period;
///
/// assert_eq!(Period::Hourly.display_order(), 1);
/// assert_eq!(Period::Annual.display_order(), 9);
/// assert_eq!(Period::Biweekly.i18n_key(), "results.biweekly");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    /// One working hour.
    Hourly,
    /// One eight-hour working day.
    Daily,
    /// One working week.
    Weekly,
    /// Half a month.
    Biweekly,
    /// One month.
    Monthly,
    /// Two months.
    Bimonthly,
    /// Three months.
    Quarterly,
    /// Six months.
    Semiannual,
    /// Twelve months.
    Annual,
}

impl Period {
    /// All periods in display order.
    pub const ALL: [Period; PERIOD_COUNT] = [
        Period::Hourly,
        Period::Daily,
        Period::Weekly,
        Period::Biweekly,
        Period::Monthly,
        Period::Bimonthly,
        Period::Quarterly,
        Period::Semiannual,
        Period::Annual,
    ];

    /// Returns the 1-based position of this period in the results table.
    pub const fn display_order(&self) -> u8 {
        match self {
            Period::Hourly => 1,
            Period::Daily => 2,
            Period::Weekly => 3,
            Period::Biweekly => 4,
            Period::Monthly => 5,
            Period::Bimonthly => 6,
            Period::Quarterly => 7,
            Period::Semiannual => 8,
            Period::Annual => 9,
        }
    }

    /// Returns the localization key of the period label.
    pub const fn i18n_key(&self) -> &'static str {
        match self {
            Period::Hourly => "results.hourly",
            Period::Daily => "results.daily",
            Period::Weekly => "results.weekly",
            Period::Biweekly => "results.biweekly",
            Period::Monthly => "results.monthly",
            Period::Bimonthly => "results.bimonthly",
            Period::Quarterly => "results.quarterly",
            Period::Semiannual => "results.semiannual",
            Period::Annual => "results.annual",
        }
    }
}

/// A salary expressed over one period in both currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodConversion {
    /// The period this row covers.
    pub period: Period,
    /// Amount in the primary currency.
    pub amount_primary: Decimal,
    /// Amount in the secondary currency.
    pub amount_secondary: Decimal,
    /// Position in the table, taken from [`Period::display_order`].
    pub display_order: u8,
}

/// The complete result of a salary conversion.
///
/// Holds one [`PeriodConversion`] per [`Period`], sorted by display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub calculated_at: DateTime<Utc>,
    /// The input the result was derived from.
    pub input: CalculationInput,
    conversions: [PeriodConversion; PERIOD_COUNT],
}

impl CalculationResult {
    /// Assembles a result. `conversions[i]` must hold `Period::ALL[i]`.
    pub(crate) fn new(
        input: CalculationInput,
        conversions: [PeriodConversion; PERIOD_COUNT],
    ) -> Self {
        debug_assert!(
            conversions
                .iter()
                .zip(Period::ALL)
                .all(|(c, p)| c.period == p && c.display_order == p.display_order())
        );
        Self {
            calculation_id: Uuid::new_v4(),
            calculated_at: Utc::now(),
            input,
            conversions,
        }
    }

    /// Returns the converted amounts, hourly first and annual last.
    pub fn conversions(&self) -> &[PeriodConversion; PERIOD_COUNT] {
        &self.conversions
    }

    /// Returns the conversion for the given period.
    pub fn get(&self, period: Period) -> &PeriodConversion {
        &self.conversions[usize::from(period.display_order()) - 1]
    }

    /// Iterates over the conversions in display order.
    pub fn iter(&self) -> impl Iterator<Item = &PeriodConversion> {
        self.conversions.iter()
    }
}

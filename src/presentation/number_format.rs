//! Locale-aware fixed-point number formatting.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

/// Number locale used when a configured tag is not recognised.
pub const DEFAULT_NUMBER_LOCALE: &str = "es-MX";

/// Separator conventions of a number locale.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use salary_converter::presentation::NumberFormat;
///
/// let format = NumberFormat::for_locale("es-MX").unwrap();
/// assert_eq!(format.format_fixed(Decimal::new(1800005, 1), 2), "180,000.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    /// Character placed between groups of three integer digits.
    pub grouping_separator: char,
    /// Character placed before the fraction digits.
    pub decimal_separator: char,
    /// Minimum number of digits in front of the first separator for
    /// grouping to apply at all.
    pub min_grouping_digits: usize,
}

const KNOWN_LOCALES: &[(&str, NumberFormat)] = &[
    (
        "es-MX",
        NumberFormat {
            grouping_separator: ',',
            decimal_separator: '.',
            min_grouping_digits: 1,
        },
    ),
    (
        "en-US",
        NumberFormat {
            grouping_separator: ',',
            decimal_separator: '.',
            min_grouping_digits: 1,
        },
    ),
    (
        "es-ES",
        NumberFormat {
            grouping_separator: '.',
            decimal_separator: ',',
            min_grouping_digits: 2,
        },
    ),
    (
        "de-DE",
        NumberFormat {
            grouping_separator: '.',
            decimal_separator: ',',
            min_grouping_digits: 1,
        },
    ),
];

impl NumberFormat {
    /// Looks up the conventions for a BCP 47 tag such as `es-MX`.
    pub fn for_locale(tag: &str) -> Option<NumberFormat> {
        KNOWN_LOCALES
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(tag))
            .map(|(_, format)| *format)
    }

    /// Like [`NumberFormat::for_locale`], falling back to
    /// [`DEFAULT_NUMBER_LOCALE`] with a warning.
    pub fn for_locale_or_default(tag: &str) -> NumberFormat {
        Self::for_locale(tag).unwrap_or_else(|| {
            warn!(
                number_locale = tag,
                fallback = DEFAULT_NUMBER_LOCALE,
                "Unknown number locale"
            );
            Self::default()
        })
    }

    /// Formats `value` with exactly `decimals` fraction digits, rounding half
    /// away from zero and grouping the integer digits.
    pub fn format_fixed(&self, value: Decimal, decimals: u32) -> String {
        let mut rounded =
            value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(decimals);
        if rounded.is_zero() {
            rounded.set_sign_positive(true);
        }

        let text = rounded.abs().to_string();
        let (integer, fraction) = match text.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (text.as_str(), None),
        };

        let mut out = String::with_capacity(text.len() + integer.len() / 3 + 1);
        if rounded.is_sign_negative() {
            out.push('-');
        }
        out.push_str(&self.group(integer));
        if let Some(fraction) = fraction {
            out.push(self.decimal_separator);
            out.push_str(fraction);
        }
        out
    }

    fn group(&self, digits: &str) -> String {
        if digits.len() < 3 + self.min_grouping_digits {
            return digits.to_string();
        }
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(self.grouping_separator);
            }
            grouped.push(digit);
        }
        grouped
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        KNOWN_LOCALES[0].1
    }
}

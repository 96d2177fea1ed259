//! Fixed-point monetary codec.
//!
//! Amounts are persisted and summed as an integer number of cents and only
//! surfaced as decimal currency at the output boundary, so no sum ever runs
//! through binary floating point.

use serde::{Deserialize, Serialize};

use crate::errors::TreasuryError;

/// Largest decimal magnitude the codec accepts. Cents values stay far below
/// the range where `f64` loses integer precision.
pub const MAX_ABS_DECIMAL: f64 = 1_000_000_000_000.0;

/// Converts a decimal currency value into integer cents, rounding half away
/// from zero. Rejects non-finite input and magnitudes above
/// [`MAX_ABS_DECIMAL`].
pub fn to_cents(value: f64) -> Result<i64, TreasuryError> {
    if !value.is_finite() {
        return Err(TreasuryError::InvalidValue {
            reason: format!("{value} is not a finite number"),
        });
    }
    if value.abs() > MAX_ABS_DECIMAL {
        return Err(TreasuryError::InvalidValue {
            reason: format!("{value} exceeds the supported magnitude"),
        });
    }
    // f64::round rounds half away from zero, matching the storage layer.
    Ok((value * 100.0).round() as i64)
}

/// Converts integer cents back into a decimal currency value.
pub fn to_decimal(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// Separator preferences for rendering amounts. Defaults to the pt-BR style
/// used by every report in the source ledger (`1.234,56`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoneyLocale {
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for MoneyLocale {
    fn default() -> Self {
        Self {
            decimal_separator: ',',
            grouping_separator: '.',
        }
    }
}

/// Formats integer cents as a decimal string with exactly 2 fractional
/// digits and thousands grouping.
pub fn format_cents(cents: i64, locale: &MoneyLocale) -> String {
    let negative = cents < 0;
    let abs = cents.unsigned_abs();
    let units = abs / 100;
    let fraction = abs % 100;
    let grouped = group_digits(&units.to_string(), locale.grouping_separator);
    let body = format!(
        "{}{}{:02}",
        grouped, locale.decimal_separator, fraction
    );
    if negative {
        format!("-{body}")
    } else {
        body
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}

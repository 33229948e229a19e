//! Currency rounding.
//!
//! Every monetary value leaving the engine goes through [`round_currency`],
//! which rounds half away from zero to two decimal places (centavos).

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places kept on monetary outputs.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Rounds a monetary value to 2 decimal places, half away from zero.
///
/// The result always carries a scale of exactly 2, so `100` becomes `100.00`.
///
/// # Examples
///
/// ```
/// use vacation_payroll_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("149.8285").unwrap()).to_string(), "149.83");
/// assert_eq!(round_currency(Decimal::from_str("0.005").unwrap()).to_string(), "0.01");
/// assert_eq!(round_currency(Decimal::new(100, 0)).to_string(), "100.00");
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(CURRENCY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(CURRENCY_DECIMAL_PLACES);
    rounded
}

/// Returns true if `value` has no significant digits past the second decimal.
pub fn has_currency_precision(value: Decimal) -> bool {
    value.normalize().scale() <= CURRENCY_DECIMAL_PLACES
}

/// Returns `rate` percent of `value`.
pub fn percent_of(value: Decimal, rate: Decimal) -> Decimal {
    value * rate / Decimal::ONE_HUNDRED
}

//! Progressive bracket resolution shared by INSS and IRRF.
//!
//! A value is matched against an ascending [`BracketTable`] and taxed with
//! the matched bracket's formula `value * rate / 100 - deduction`, clamped
//! at zero and rounded to centavos.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::{Bracket, BracketTable};

use super::rounding::{percent_of, round_currency};

/// The bracket selected for a value and the amount it yields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketMatch<'a> {
    /// Zero-based position of the bracket in its table.
    pub index: usize,
    /// The matched bracket.
    pub bracket: &'a Bracket,
    /// The rounded, non-negative amount.
    pub amount: Decimal,
}

/// Finds the bracket for `value` and computes the amount it yields.
///
/// Returns `None` when `value` is zero or negative (no scan is made), when
/// it is below the first bracket, or when it exceeds a closed last bracket.
///
/// Tables list amounts in centavos, so adjacent brackets are one cent apart
/// (`2428.80` / `2428.81`). An unrounded value that falls inside that gap
/// belongs to the upper bracket: the match is the first bracket that either
/// contains the value or starts above it.
pub fn match_bracket(value: Decimal, table: &BracketTable) -> Option<BracketMatch<'_>> {
    if value <= Decimal::ZERO {
        return None;
    }

    let brackets = table.brackets();
    if value < brackets.first()?.min {
        return None;
    }

    let (index, bracket) = brackets
        .iter()
        .enumerate()
        .find(|(_, b)| value < b.min || b.contains(value))?;

    let raw = percent_of(value, bracket.rate) - bracket.deduction;
    let amount = round_currency(raw.max(Decimal::ZERO));

    debug!(
        value = %value,
        bracket = index + 1,
        rate = %bracket.rate,
        deduction = %bracket.deduction,
        amount = %amount,
        "Resolved bracket"
    );

    Some(BracketMatch {
        index,
        bracket,
        amount,
    })
}

/// Resolves the amount owed on `value` under `table`.
///
/// Zero when `value ≤ 0` or no bracket matches.
///
/// # Examples
///
/// ```
/// use vacation_payroll_engine::calculation::resolve_bracket;
/// use vacation_payroll_engine::config::TaxTables;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let tables = TaxTables::builtin();
/// let inss = &tables.latest().inss.brackets;
///
/// // 4000.00 falls in the 12% bracket: 4000 * 0.12 - 106.59
/// let amount = resolve_bracket(Decimal::new(4000, 0), inss);
/// assert_eq!(amount, Decimal::from_str("373.41").unwrap());
/// ```
pub fn resolve_bracket(value: Decimal, table: &BracketTable) -> Decimal {
    match_bracket(value, table).map_or(Decimal::ZERO, |m| m.amount)
}

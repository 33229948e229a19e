//! INSS (social security) contribution.
//!
//! Bases below the ceiling threshold are resolved against the progressive
//! table. Bases at or above the threshold pay a flat rate on the whole value
//! with no deduction. The flat branch is checked first, so with the 2025
//! figures the table's top bracket only catches values inside the one-cent
//! gap just below the threshold.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::InssTable;
use crate::models::AuditStep;

use super::bracket::match_bracket;
use super::rounding::{percent_of, round_currency};

/// Statute for the progressive employee contribution.
pub const INSS_LEGAL_REF: &str = "Lei 8.212/1991 art. 20; EC 103/2019 art. 28";

/// How the INSS amount was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InssMethod {
    /// Base was zero or negative.
    NoBase,
    /// Progressive table; holds the zero-based bracket index.
    Progressive(usize),
    /// Flat rate on the whole base.
    Ceiling,
    /// Base matched no bracket.
    Unmatched,
}

/// The result of an INSS calculation.
#[derive(Debug, Clone)]
pub struct InssResult {
    /// The contribution, rounded to centavos.
    pub amount: Decimal,
    /// Which branch produced the amount.
    pub method: InssMethod,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the INSS contribution on `base`.
///
/// Bases at or above the ceiling threshold pay the flat ceiling rate on the
/// whole value; lower bases go through the progressive brackets.
///
/// # Arguments
///
/// * `base` - Vacation pay plus the 13th advance, sold days excluded
/// * `table` - The INSS table in force
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns an `InssResult` with the rounded contribution, the branch that
/// produced it, and an audit step.
///
/// # Legal Reference
///
/// Lei 8.212/1991 art. 20 with the progressive rates of EC 103/2019 art. 28.
///
/// # Examples
///
/// ```
/// use vacation_payroll_engine::calculation::{calculate_inss, InssMethod};
/// use vacation_payroll_engine::config::TaxTables;
/// use rust_decimal::Decimal;
///
/// let tables = TaxTables::builtin();
/// let result = calculate_inss(Decimal::new(5500, 0), &tables.latest().inss, 1);
///
/// assert_eq!(result.amount, Decimal::new(77000, 2));
/// assert_eq!(result.method, InssMethod::Ceiling);
/// ```
pub fn calculate_inss(base: Decimal, table: &InssTable, step_number: u32) -> InssResult {
    let (amount, method, reasoning) = if base <= Decimal::ZERO {
        (
            Decimal::ZERO,
            InssMethod::NoBase,
            "No INSS due on a zero base".to_string(),
        )
    } else if base >= table.ceiling.threshold {
        let amount = round_currency(percent_of(base, table.ceiling.rate));
        let reasoning = format!(
            "Base R${} is at or above R${}: flat {}% on the whole base = R${}",
            base.normalize(),
            table.ceiling.threshold,
            table.ceiling.rate.normalize(),
            amount
        );
        (amount, InssMethod::Ceiling, reasoning)
    } else {
        match match_bracket(base, &table.brackets) {
            Some(m) => {
                let reasoning = format!(
                    "Base R${} in bracket {}: R${} x {}% - R${} = R${}",
                    base.normalize(),
                    m.index + 1,
                    base.normalize(),
                    m.bracket.rate.normalize(),
                    m.bracket.deduction,
                    m.amount
                );
                (m.amount, InssMethod::Progressive(m.index), reasoning)
            }
            None => {
                warn!(base = %base, "INSS base matched no bracket");
                (
                    Decimal::ZERO,
                    InssMethod::Unmatched,
                    format!("Base R${} matched no INSS bracket", base.normalize()),
                )
            }
        }
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "inss_contribution".to_string(),
        rule_name: "INSS Contribution".to_string(),
        legal_ref: INSS_LEGAL_REF.to_string(),
        input: serde_json::json!({
            "inss_base": base.normalize().to_string(),
            "ceiling_threshold": table.ceiling.threshold.to_string()
        }),
        output: serde_json::json!({
            "inss": amount.to_string(),
            "method": method
        }),
        reasoning,
    };

    InssResult {
        amount,
        method,
        audit_step,
    }
}

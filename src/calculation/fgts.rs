//! FGTS (severance fund) deposit.
//!
//! FGTS is paid by the employer on top of gross pay and is never withheld
//! from the employee. Sold vacation days are outside its base.

use rust_decimal::Decimal;

use crate::models::AuditStep;

use super::rounding::{percent_of, round_currency};

/// Statute for the monthly FGTS deposit.
pub const FGTS_LEGAL_REF: &str = "Lei 8.036/1990 art. 15";

/// The result of an FGTS calculation.
#[derive(Debug, Clone)]
pub struct FgtsResult {
    /// The deposit, rounded to centavos.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the FGTS deposit as `rate` percent of `base`.
///
/// # Arguments
///
/// * `base` - Vacation pay plus the 13th advance, sold days excluded
/// * `rate` - The deposit rate in percent
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns an `FgtsResult` with the rounded deposit (zero for a
/// non-positive base) and an audit step.
///
/// # Legal Reference
///
/// Lei 8.036/1990 art. 15 sets the 8% monthly deposit.
///
/// # Examples
///
/// ```
/// use vacation_payroll_engine::calculation::calculate_fgts;
/// use rust_decimal::Decimal;
///
/// let result = calculate_fgts(Decimal::new(4000, 0), Decimal::new(8, 0), 1);
/// assert_eq!(result.amount, Decimal::new(32000, 2));
/// ```
pub fn calculate_fgts(base: Decimal, rate: Decimal, step_number: u32) -> FgtsResult {
    let amount = if base <= Decimal::ZERO {
        Decimal::ZERO
    } else {
        round_currency(percent_of(base, rate))
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "fgts_deposit".to_string(),
        rule_name: "FGTS Deposit".to_string(),
        legal_ref: FGTS_LEGAL_REF.to_string(),
        input: serde_json::json!({
            "fgts_base": base.normalize().to_string(),
            "rate": rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "fgts": amount.to_string()
        }),
        reasoning: format!(
            "R${} x {}% = R${} (employer cost, not withheld)",
            base.normalize(),
            rate.normalize(),
            amount
        ),
    };

    FgtsResult { amount, audit_step }
}

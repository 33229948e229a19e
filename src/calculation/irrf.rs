//! IRRF (withholding income tax).
//!
//! The taxable base is the income net of INSS minus a fixed deduction per
//! dependent; it is then resolved against the progressive IRRF table, whose
//! first bracket carries a zero rate.

use rust_decimal::Decimal;

use crate::config::IrrfTable;
use crate::models::AuditStep;

use super::bracket::match_bracket;

/// Statute for the withholding table and dependent deduction.
pub const IRRF_LEGAL_REF: &str = "Lei 7.713/1988 art. 7; Lei 9.250/1995 art. 4";

/// The result of an IRRF calculation.
#[derive(Debug, Clone)]
pub struct IrrfResult {
    /// The tax withheld, rounded to centavos.
    pub amount: Decimal,
    /// Total deducted for dependents.
    pub dependent_deduction: Decimal,
    /// Base after the dependent deduction.
    pub taxable_base: Decimal,
    /// Zero-based index of the matched bracket, if any.
    pub bracket: Option<usize>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates IRRF on `base` for the given number of dependents.
///
/// Negative dependent counts are treated as zero; inputs are validated
/// before they reach this function.
///
/// # Arguments
///
/// * `base` - The INSS base net of the INSS contribution
/// * `dependents` - Number of dependents declared for IRRF
/// * `table` - The IRRF table in force
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns an `IrrfResult` with the rounded tax, the taxable base after the
/// dependent deduction, the matched bracket, and an audit step.
///
/// # Legal Reference
///
/// Lei 7.713/1988 art. 7 (withholding) and Lei 9.250/1995 art. 4
/// (deduction per dependent).
///
/// # Examples
///
/// ```
/// use vacation_payroll_engine::calculation::calculate_irrf;
/// use vacation_payroll_engine::config::TaxTables;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let tables = TaxTables::builtin();
/// let base = Decimal::from_str("3626.59").unwrap();
///
/// let result = calculate_irrf(base, 0, &tables.latest().irrf, 1);
/// assert_eq!(result.amount, Decimal::from_str("149.83").unwrap());
///
/// let with_dependents = calculate_irrf(base, 2, &tables.latest().irrf, 1);
/// assert!(with_dependents.amount < result.amount);
/// ```
pub fn calculate_irrf(
    base: Decimal,
    dependents: i32,
    table: &IrrfTable,
    step_number: u32,
) -> IrrfResult {
    let dependents = dependents.max(0);
    let dependent_deduction = table.dependent_deduction * Decimal::from(dependents);
    let taxable_base = base - dependent_deduction;

    let matched = if taxable_base <= Decimal::ZERO {
        None
    } else {
        match_bracket(taxable_base, &table.brackets)
    };

    let (amount, bracket, reasoning) = match matched {
        Some(m) => {
            let reasoning = format!(
                "Base R${} - {} dependent(s) x R${} = R${}; bracket {}: {}% - R${} = R${}",
                base.normalize(),
                dependents,
                table.dependent_deduction,
                taxable_base.normalize(),
                m.index + 1,
                m.bracket.rate.normalize(),
                m.bracket.deduction,
                m.amount
            );
            (m.amount, Some(m.index), reasoning)
        }
        None => (
            Decimal::ZERO,
            None,
            format!(
                "Taxable base R${} after dependent deduction is not positive; no IRRF due",
                taxable_base.normalize()
            ),
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "irrf_withholding".to_string(),
        rule_name: "IRRF Withholding".to_string(),
        legal_ref: IRRF_LEGAL_REF.to_string(),
        input: serde_json::json!({
            "irrf_base": base.normalize().to_string(),
            "dependents": dependents,
            "per_dependent_deduction": table.dependent_deduction.to_string()
        }),
        output: serde_json::json!({
            "taxable_base": taxable_base.normalize().to_string(),
            "irrf": amount.to_string(),
            "bracket": bracket.map(|index| index + 1)
        }),
        reasoning,
    };

    IrrfResult {
        amount,
        dependent_deduction,
        taxable_base,
        bracket,
        audit_step,
    }
}

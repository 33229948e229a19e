//! First installment of the 13th salary paid with the vacation.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// The result of the 13th-salary advance calculation.
#[derive(Debug, Clone)]
pub struct Advance13thResult {
    /// Half the monthly salary when requested, otherwise zero.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the 13th-salary advance.
///
/// # Examples
///
/// ```
/// use vacation_payroll_engine::calculation::calculate_13th_advance;
/// use rust_decimal::Decimal;
///
/// let requested = calculate_13th_advance(Decimal::new(3000, 0), true, 1);
/// assert_eq!(requested.amount, Decimal::new(1500, 0));
///
/// let declined = calculate_13th_advance(Decimal::new(3000, 0), false, 1);
/// assert_eq!(declined.amount, Decimal::ZERO);
/// ```
pub fn calculate_13th_advance(
    monthly_salary: Decimal,
    requested: bool,
    step_number: u32,
) -> Advance13thResult {
    let amount = if requested {
        monthly_salary / Decimal::TWO
    } else {
        Decimal::ZERO
    };

    let reasoning = if requested {
        format!(
            "Advance requested: R${} / 2 = R${}",
            monthly_salary.normalize(),
            amount.normalize()
        )
    } else {
        "No 13th-salary advance requested".to_string()
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "advance_13th".to_string(),
        rule_name: "13th Salary Advance".to_string(),
        legal_ref: "Lei 4.749/1965 art. 2".to_string(),
        input: serde_json::json!({
            "monthly_salary": monthly_salary.normalize().to_string(),
            "requested": requested
        }),
        output: serde_json::json!({
            "advance_13th": amount.normalize().to_string()
        }),
        reasoning,
    };

    Advance13thResult { amount, audit_step }
}

//! Vacation pay and abono pecuniário (sold days).
//!
//! Both components are `daily_salary * days` plus the constitutional
//! one-third bonus. Only the days taken are subject to INSS and IRRF; the
//! sold days are paid untaxed.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// Divisor of the constitutional vacation bonus (one third).
pub const VACATION_BONUS_DIVISOR: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

/// A day-based pay component with its one-third bonus, unrounded.
#[derive(Debug, Clone)]
pub struct VacationPayResult {
    /// `daily_salary * days`.
    pub base: Decimal,
    /// `base / 3`.
    pub third: Decimal,
    /// `base + third`.
    pub total: Decimal,
    /// The audit step recording this component.
    pub audit_step: AuditStep,
}

fn pay_component(daily_salary: Decimal, days: i32) -> (Decimal, Decimal, Decimal) {
    let base = daily_salary * Decimal::from(days);
    let third = base / VACATION_BONUS_DIVISOR;
    (base, third, base + third)
}

/// Calculates pay for the vacation days actually taken.
///
/// # Examples
///
/// ```
/// use vacation_payroll_engine::calculation::calculate_vacation_pay;
/// use rust_decimal::Decimal;
///
/// let pay = calculate_vacation_pay(Decimal::new(100, 0), 30, 1);
/// assert_eq!(pay.base, Decimal::new(3000, 0));
/// assert_eq!(pay.third, Decimal::new(1000, 0));
/// assert_eq!(pay.total, Decimal::new(4000, 0));
/// ```
pub fn calculate_vacation_pay(
    daily_salary: Decimal,
    vacation_days: i32,
    step_number: u32,
) -> VacationPayResult {
    let (base, third, total) = pay_component(daily_salary, vacation_days);

    let audit_step = AuditStep {
        step_number,
        rule_id: "vacation_pay".to_string(),
        rule_name: "Vacation Pay".to_string(),
        legal_ref: "CLT art. 142; CF art. 7, XVII".to_string(),
        input: serde_json::json!({
            "daily_salary": daily_salary.normalize().to_string(),
            "vacation_days": vacation_days
        }),
        output: serde_json::json!({
            "vacation_base": base.normalize().to_string(),
            "vacation_third": third.normalize().to_string(),
            "vacation_total": total.normalize().to_string()
        }),
        reasoning: format!(
            "{} days x R${} = R${}, plus one third R${} = R${}",
            vacation_days,
            daily_salary.normalize(),
            base.normalize(),
            third.normalize(),
            total.normalize()
        ),
    };

    VacationPayResult {
        base,
        third,
        total,
        audit_step,
    }
}

/// Calculates the abono pecuniário for sold vacation days.
///
/// The amount is exempt from INSS and IRRF and is added to gross pay only.
pub fn calculate_sold_days_pay(
    daily_salary: Decimal,
    sold_days: i32,
    step_number: u32,
) -> VacationPayResult {
    let (base, third, total) = pay_component(daily_salary, sold_days);

    let reasoning = if sold_days == 0 {
        "No vacation days sold".to_string()
    } else {
        format!(
            "{} sold days x R${} = R${}, plus one third R${} = R${}; exempt from INSS and IRRF",
            sold_days,
            daily_salary.normalize(),
            base.normalize(),
            third.normalize(),
            total.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "abono_pecuniario".to_string(),
        rule_name: "Sold Vacation Days (Abono Pecuniario)".to_string(),
        legal_ref: "CLT art. 143-144; Lei 8.212/1991 art. 28, par. 9, e, 6".to_string(),
        input: serde_json::json!({
            "daily_salary": daily_salary.normalize().to_string(),
            "sold_days": sold_days
        }),
        output: serde_json::json!({
            "sold_days_base": base.normalize().to_string(),
            "sold_days_third": third.normalize().to_string(),
            "sold_days_total": total.normalize().to_string(),
            "taxable": false
        }),
        reasoning,
    };

    VacationPayResult {
        base,
        third,
        total,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::round_currency;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_full_vacation() {
        let pay = calculate_vacation_pay(dec("100"), 30, 1);
        assert_eq!(pay.total, dec("4000"));
    }

    #[test]
    fn test_twenty_days_has_repeating_third() {
        let pay = calculate_vacation_pay(dec("100"), 20, 1);
        assert_eq!(pay.base, dec("2000"));
        assert_eq!(round_currency(pay.third), dec("666.67"));
        assert_eq!(round_currency(pay.total), dec("2666.67"));
    }

    #[test]
    fn test_sold_days_pay() {
        let pay = calculate_sold_days_pay(dec("100"), 10, 3);
        assert_eq!(pay.base, dec("1000"));
        assert_eq!(round_currency(pay.third), dec("333.33"));
        assert_eq!(round_currency(pay.total), dec("1333.33"));
        assert_eq!(pay.audit_step.rule_id, "abono_pecuniario");
        assert!(!pay.audit_step.output["taxable"].as_bool().unwrap());
    }

    #[test]
    fn test_no_sold_days_is_zero() {
        let pay = calculate_sold_days_pay(dec("100"), 0, 3);
        assert_eq!(pay.total, Decimal::ZERO);
        assert_eq!(pay.audit_step.reasoning, "No vacation days sold");
    }

    #[test]
    fn test_zero_salary_is_zero() {
        let pay = calculate_vacation_pay(Decimal::ZERO, 30, 1);
        assert_eq!(pay.base, Decimal::ZERO);
        assert_eq!(pay.third, Decimal::ZERO);
        assert_eq!(pay.total, Decimal::ZERO);
    }

    #[test]
    fn test_audit_reasoning_explains_calculation() {
        let pay = calculate_vacation_pay(dec("100"), 30, 2);
        assert_eq!(pay.audit_step.step_number, 2);
        assert!(pay.audit_step.reasoning.contains("30 days x R$100 = R$3000"));
        assert!(pay.audit_step.reasoning.contains("R$4000"));
    }
}

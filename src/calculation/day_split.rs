//! Daily salary and the split between days taken and days sold.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// Days in the commercial month used to derive the daily salary.
///
/// The divisor is fixed regardless of the vacation period length.
pub const DAYS_IN_COMMERCIAL_MONTH: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Returns the daily salary (`monthly_salary / 30`), unrounded.
pub fn calculate_daily_salary(monthly_salary: Decimal) -> Decimal {
    monthly_salary / DAYS_IN_COMMERCIAL_MONTH
}

/// The day split of a vacation period.
#[derive(Debug, Clone)]
pub struct DaySplitResult {
    /// Unrounded daily salary.
    pub daily_salary: Decimal,
    /// Days taken as time off.
    pub vacation_days: i32,
    /// Days sold for cash.
    pub sold_days: i32,
    /// The audit step recording this split.
    pub audit_step: AuditStep,
}

/// Splits a vacation period into days taken and days sold.
///
/// `vacation_days + sold_days == total_days` always holds.
///
/// # Arguments
///
/// * `monthly_salary` - Gross monthly salary
/// * `total_days` - Nominal vacation period in days
/// * `sold_days` - Days converted to cash
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns a `DaySplitResult` with the unrounded daily salary, the days
/// taken and sold, and an audit step.
///
/// # Legal Reference
///
/// CLT art. 130 (30-day period) and art. 143 (selling up to a third).
///
/// # Examples
///
/// ```
/// use vacation_payroll_engine::calculation::split_days;
/// use rust_decimal::Decimal;
///
/// let split = split_days(Decimal::new(3000, 0), 30, 10, 1);
/// assert_eq!(split.daily_salary, Decimal::new(100, 0));
/// assert_eq!(split.vacation_days, 20);
/// assert_eq!(split.sold_days, 10);
/// ```
pub fn split_days(
    monthly_salary: Decimal,
    total_days: i32,
    sold_days: i32,
    step_number: u32,
) -> DaySplitResult {
    let daily_salary = calculate_daily_salary(monthly_salary);
    let vacation_days = total_days - sold_days;

    let audit_step = AuditStep {
        step_number,
        rule_id: "day_split".to_string(),
        rule_name: "Vacation Day Split".to_string(),
        legal_ref: "CLT art. 130, 143".to_string(),
        input: serde_json::json!({
            "monthly_salary": monthly_salary.normalize().to_string(),
            "total_days": total_days,
            "sold_days": sold_days
        }),
        output: serde_json::json!({
            "daily_salary": daily_salary.normalize().to_string(),
            "vacation_days": vacation_days
        }),
        reasoning: format!(
            "R${} / 30 = R${} per day; {} days - {} sold = {} days taken",
            monthly_salary.normalize(),
            daily_salary.normalize(),
            total_days,
            sold_days,
            vacation_days
        ),
    };

    DaySplitResult {
        daily_salary,
        vacation_days,
        sold_days,
        audit_step,
    }
}

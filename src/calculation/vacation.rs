//! Vacation payout orchestration.
//!
//! Runs the full pipeline: validate → day split → gross components → tax
//! bases → INSS → IRRF → FGTS → net and employer cost → rounding.
//!
//! Intermediate values stay unrounded until the end. `net_total` and
//! `employer_cost` are derived from the rounded components so that
//! `net_total == gross_total - total_deductions` and
//! `employer_cost == gross_total + fgts` hold exactly on the output.

use std::sync::LazyLock;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::{LegalLimits, TaxTableSet, TaxTables};
use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, BatchCalculation, PayrollTotals, VacationCalculation,
    VacationCalculationInput, VacationCalculationResult,
};

use super::advance_13th::calculate_13th_advance;
use super::day_split::split_days;
use super::fgts::calculate_fgts;
use super::inss::calculate_inss;
use super::irrf::calculate_irrf;
use super::rounding::round_currency;
use super::vacation_pay::{calculate_sold_days_pay, calculate_vacation_pay};

static BUILTIN_TABLES: LazyLock<TaxTables> = LazyLock::new(TaxTables::builtin);

/// Returns the compiled-in tax tables shared by [`calculate_vacation`].
pub fn builtin_tables() -> &'static TaxTables {
    &BUILTIN_TABLES
}

/// Calculates a vacation payout with the built-in tax tables.
///
/// # Errors
///
/// Returns [`EngineError::ValidationError`](crate::error::EngineError::ValidationError)
/// for malformed inputs and
/// [`EngineError::TaxTableNotFound`](crate::error::EngineError::TaxTableNotFound)
/// when `reference_date` precedes every built-in table.
///
/// # Examples
///
/// ```
/// use vacation_payroll_engine::calculate_vacation;
/// use vacation_payroll_engine::models::VacationCalculationInput;
/// use rust_decimal::Decimal;
///
/// let input = VacationCalculationInput::new(Decimal::new(3000, 0), 30, 0)
///     .with_13th_advance(true);
/// let result = calculate_vacation(&input).unwrap();
///
/// assert_eq!(result.advance_13th, Decimal::new(1500, 0));
/// assert_eq!(result.gross_total, Decimal::new(5500, 0));
/// assert_eq!(result.inss_base, Decimal::new(5500, 0));
/// ```
pub fn calculate_vacation(input: &VacationCalculationInput) -> EngineResult<VacationCalculationResult> {
    calculate_vacation_audited(input, builtin_tables()).map(|calculation| calculation.result)
}

/// Calculates a vacation payout, picking the table set by `reference_date`.
pub fn calculate_vacation_audited(
    input: &VacationCalculationInput,
    tables: &TaxTables,
) -> EngineResult<VacationCalculation> {
    let table_set = tables.resolve(input.reference_date)?;
    calculate_vacation_with_tables(input, table_set)
}

/// Calculates a vacation payout against an explicit table set.
///
/// The input is validated before anything is computed; nothing is returned
/// partially on failure.
pub fn calculate_vacation_with_tables(
    input: &VacationCalculationInput,
    tables: &TaxTableSet,
) -> EngineResult<VacationCalculation> {
    if let Err(err) = input.validate() {
        warn!(error = %err, "Rejected vacation calculation input");
        return Err(err);
    }

    let warnings = legal_limit_warnings(input, &tables.legal_limits);
    let mut steps: Vec<AuditStep> = Vec::with_capacity(9);
    let mut step_number: u32 = 1;

    // Day split
    let split = split_days(input.monthly_salary, input.total_days, input.sold_days, step_number);
    let daily_salary = split.daily_salary;
    let vacation_days = split.vacation_days;
    steps.push(split.audit_step);
    step_number += 1;

    // Gross components
    let vacation = calculate_vacation_pay(daily_salary, vacation_days, step_number);
    steps.push(vacation.audit_step);
    step_number += 1;

    let sold = calculate_sold_days_pay(daily_salary, input.sold_days, step_number);
    steps.push(sold.audit_step);
    step_number += 1;

    let advance = calculate_13th_advance(input.monthly_salary, input.advance_13th_salary, step_number);
    steps.push(advance.audit_step);
    step_number += 1;

    let gross_total = vacation.total + sold.total + advance.amount;
    debug!(
        vacation_total = %vacation.total,
        sold_days_total = %sold.total,
        advance_13th = %advance.amount,
        gross_total = %gross_total,
        "Composed gross pay"
    );

    // Tax bases exclude the sold days
    let inss_base = vacation.total + advance.amount;
    let inss = calculate_inss(inss_base, &tables.inss, step_number);
    steps.push(inss.audit_step);
    step_number += 1;

    let irrf_base = inss_base - inss.amount;
    let irrf = calculate_irrf(irrf_base, input.dependents, &tables.irrf, step_number);
    steps.push(irrf.audit_step);
    step_number += 1;

    let fgts = calculate_fgts(vacation.total + advance.amount, tables.fgts_rate, step_number);
    steps.push(fgts.audit_step);
    step_number += 1;

    // Aggregation on rounded components
    let gross_total = round_currency(gross_total);
    let total_deductions = round_currency(inss.amount + irrf.amount);
    let net_total = round_currency(gross_total - total_deductions);
    let employer_cost = round_currency(gross_total + fgts.amount);

    steps.push(AuditStep {
        step_number,
        rule_id: "net_and_employer_cost".to_string(),
        rule_name: "Net Pay and Employer Cost".to_string(),
        legal_ref: "CLT art. 145".to_string(),
        input: serde_json::json!({
            "gross_total": gross_total.to_string(),
            "inss": inss.amount.to_string(),
            "irrf": irrf.amount.to_string(),
            "fgts": fgts.amount.to_string()
        }),
        output: serde_json::json!({
            "total_deductions": total_deductions.to_string(),
            "net_total": net_total.to_string(),
            "employer_cost": employer_cost.to_string()
        }),
        reasoning: format!(
            "Gross R${} - R${} deductions = net R${}; employer cost R${} + R${} FGTS = R${}",
            gross_total, total_deductions, net_total, gross_total, fgts.amount, employer_cost
        ),
    });

    let result = VacationCalculationResult {
        daily_salary: round_currency(daily_salary),
        vacation_days,
        sold_days: input.sold_days,
        vacation_base: round_currency(vacation.base),
        vacation_third: round_currency(vacation.third),
        vacation_total: round_currency(vacation.total),
        sold_days_base: round_currency(sold.base),
        sold_days_third: round_currency(sold.third),
        sold_days_total: round_currency(sold.total),
        advance_13th: round_currency(advance.amount),
        gross_total,
        inss_base: round_currency(inss_base),
        inss: round_currency(inss.amount),
        irrf_base: round_currency(irrf_base),
        irrf: round_currency(irrf.amount),
        total_deductions,
        net_total,
        fgts: round_currency(fgts.amount),
        employer_cost,
    };

    debug!(
        gross_total = %result.gross_total,
        net_total = %result.net_total,
        employer_cost = %result.employer_cost,
        warnings = warnings.len(),
        "Vacation calculation completed"
    );

    Ok(VacationCalculation {
        result,
        audit_trace: AuditTrace { steps, warnings },
    })
}

/// Calculates every input independently and totals the successful results.
///
/// A failing input does not stop the batch; its error is kept at the same
/// position in [`BatchCalculation::results`].
pub fn calculate_vacation_batch(
    inputs: &[VacationCalculationInput],
    tables: &TaxTables,
) -> BatchCalculation {
    let results: Vec<EngineResult<VacationCalculationResult>> = inputs
        .iter()
        .map(|input| calculate_vacation_audited(input, tables).map(|c| c.result))
        .collect();

    let totals: PayrollTotals = results.iter().filter_map(|r| r.as_ref().ok()).collect();

    debug!(
        inputs = inputs.len(),
        succeeded = totals.count,
        net_total = %totals.net_total,
        "Batch calculation completed"
    );

    BatchCalculation { results, totals }
}

/// Flags inputs that are accepted but fall outside statutory limits.
fn legal_limit_warnings(
    input: &VacationCalculationInput,
    limits: &LegalLimits,
) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();

    if input.sold_days > limits.max_sold_days {
        warn!(
            sold_days = input.sold_days,
            max_sold_days = limits.max_sold_days,
            "Sold days above legal cap"
        );
        warnings.push(AuditWarning {
            code: "SOLD_DAYS_ABOVE_LEGAL_CAP".to_string(),
            message: format!(
                "{} days sold; at most {} may be converted to cash",
                input.sold_days, limits.max_sold_days
            ),
            severity: "medium".to_string(),
        });
    }

    if input.total_days != limits.standard_vacation_days {
        warn!(
            total_days = input.total_days,
            standard_vacation_days = limits.standard_vacation_days,
            "Non-standard vacation period"
        );
        warnings.push(AuditWarning {
            code: "NON_STANDARD_VACATION_PERIOD".to_string(),
            message: format!(
                "Vacation period of {} days differs from the standard {} days",
                input.total_days, limits.standard_vacation_days
            ),
            severity: "low".to_string(),
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn input(salary: &str, total_days: i32, sold_days: i32) -> VacationCalculationInput {
        VacationCalculationInput::new(dec(salary), total_days, sold_days)
    }

    fn audited(input: &VacationCalculationInput) -> VacationCalculation {
        calculate_vacation_audited(input, builtin_tables()).unwrap()
    }

    #[test]
    fn test_full_vacation_breakdown() {
        let result = calculate_vacation(&input("3000", 30, 0)).unwrap();

        assert_eq!(result.daily_salary, dec("100.00"));
        assert_eq!(result.vacation_base, dec("3000.00"));
        assert_eq!(result.vacation_third, dec("1000.00"));
        assert_eq!(result.vacation_total, dec("4000.00"));
        assert_eq!(result.gross_total, dec("4000.00"));
        assert_eq!(result.inss_base, dec("4000.00"));
        assert_eq!(result.inss, dec("373.41"));
        assert_eq!(result.irrf_base, dec("3626.59"));
        assert_eq!(result.irrf, dec("149.83"));
        assert_eq!(result.total_deductions, dec("523.24"));
        assert_eq!(result.net_total, dec("3476.76"));
        assert_eq!(result.fgts, dec("320.00"));
        assert_eq!(result.employer_cost, dec("4320.00"));
    }

    #[test]
    fn test_sold_days_are_excluded_from_tax_bases() {
        let result = calculate_vacation(&input("3000", 30, 10)).unwrap();

        assert_eq!(result.vacation_days, 20);
        assert_eq!(result.sold_days_total, dec("1333.33"));
        assert_eq!(result.inss_base, result.vacation_total);
        assert_eq!(result.gross_total, dec("4000.00"));
        assert_eq!(result.inss, dec("217.23"));
        assert_eq!(result.irrf, dec("1.55"));
        assert_eq!(result.net_total, dec("3781.22"));
        assert_eq!(result.fgts, dec("213.33"));
    }

    #[test]
    fn test_validation_runs_before_calculation() {
        let err = calculate_vacation(&input("3000", 10, 11)).unwrap_err();
        assert!(matches!(err, EngineError::ValidationError { .. }));
    }

    #[test]
    fn test_audit_trace_records_every_stage() {
        let calculation = audited(&input("3000", 30, 0));
        let rule_ids: Vec<&str> = calculation
            .audit_trace
            .steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();

        assert_eq!(
            rule_ids,
            vec![
                "day_split",
                "vacation_pay",
                "abono_pecuniario",
                "advance_13th",
                "inss_contribution",
                "irrf_withholding",
                "fgts_deposit",
                "net_and_employer_cost",
            ]
        );
        for (i, step) in calculation.audit_trace.steps.iter().enumerate() {
            assert_eq!(step.step_number, i as u32 + 1);
        }
    }

    #[test]
    fn test_standard_input_has_no_warnings() {
        let calculation = audited(&input("3000", 30, 10));
        assert!(calculation.audit_trace.warnings.is_empty());
    }

    #[test]
    fn test_sold_days_above_cap_warns_but_calculates() {
        let calculation = audited(&input("3000", 30, 15));
        let codes: Vec<&str> = calculation
            .audit_trace
            .warnings
            .iter()
            .map(|w| w.code.as_str())
            .collect();

        assert_eq!(codes, vec!["SOLD_DAYS_ABOVE_LEGAL_CAP"]);
        assert_eq!(calculation.result.vacation_days, 15);
    }

    #[test]
    fn test_non_standard_period_warns() {
        let calculation = audited(&input("3000", 24, 0));
        assert_eq!(
            calculation.audit_trace.warnings[0].code,
            "NON_STANDARD_VACATION_PERIOD"
        );
        assert_eq!(calculation.result.daily_salary, dec("100.00"));
        assert_eq!(calculation.result.vacation_base, dec("2400.00"));
    }

    #[test]
    fn test_reference_date_before_tables_fails() {
        let input = input("3000", 30, 0)
            .with_reference_date(NaiveDate::from_ymd_opt(2019, 12, 31).unwrap());
        assert!(matches!(
            calculate_vacation(&input),
            Err(EngineError::TaxTableNotFound { .. })
        ));
    }

    #[test]
    fn test_batch_keeps_failures_in_place() {
        let inputs = vec![
            input("3000", 30, 0),
            input("-1", 30, 0),
            input("3000", 30, 10),
        ];
        let batch = calculate_vacation_batch(&inputs, builtin_tables());

        assert_eq!(batch.results.len(), 3);
        assert!(batch.results[0].is_ok());
        assert!(batch.results[1].is_err());
        assert!(batch.results[2].is_ok());
        assert_eq!(batch.failure_count(), 1);
        assert_eq!(batch.totals.count, 2);
        assert_eq!(batch.totals.net_total, dec("7257.98"));
        assert_eq!(batch.totals.employer_cost, dec("8533.33"));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let input = input("4321.55", 30, 10)
            .with_13th_advance(true)
            .with_dependents(1);
        assert_eq!(
            calculate_vacation(&input).unwrap(),
            calculate_vacation(&input).unwrap()
        );
    }
}

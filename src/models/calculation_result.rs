//! Calculation result models for the Vacation Payroll Engine.
//!
//! This module contains the [`VacationCalculationResult`] value type and the
//! audit structures that record how each of its fields was derived.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;

/// The reconciled breakdown of a vacation payout.
///
/// Every monetary field is rounded to 2 decimal places. The record has no
/// identity: identical inputs always produce identical results.
///
/// # Example
///
/// ```
/// use vacation_payroll_engine::calculate_vacation;
/// use vacation_payroll_engine::models::VacationCalculationInput;
/// use rust_decimal::Decimal;
///
/// let input = VacationCalculationInput::new(Decimal::new(3000, 0), 30, 0);
/// let result = calculate_vacation(&input).unwrap();
///
/// assert_eq!(result.gross_total, Decimal::new(4000, 0));
/// assert_eq!(result.net_total, result.gross_total - result.total_deductions);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationCalculationResult {
    /// Monthly salary divided by the fixed 30-day month.
    pub daily_salary: Decimal,
    /// Days taken as time off.
    pub vacation_days: i32,
    /// Days sold for cash.
    pub sold_days: i32,
    /// Pay for the days taken.
    pub vacation_base: Decimal,
    /// Constitutional one-third bonus on the vacation base.
    pub vacation_third: Decimal,
    /// Vacation base plus its third.
    pub vacation_total: Decimal,
    /// Pay for the days sold (abono pecuniário).
    pub sold_days_base: Decimal,
    /// One-third bonus on the sold days.
    pub sold_days_third: Decimal,
    /// Sold days base plus its third.
    pub sold_days_total: Decimal,
    /// First 13th-salary installment, or zero when not requested.
    pub advance_13th: Decimal,
    /// Sum of vacation, sold days and 13th advance.
    pub gross_total: Decimal,
    /// Base for the INSS contribution (sold days excluded).
    pub inss_base: Decimal,
    /// INSS contribution withheld.
    pub inss: Decimal,
    /// Base for IRRF before the dependent deduction.
    pub irrf_base: Decimal,
    /// Income tax withheld.
    pub irrf: Decimal,
    /// INSS plus IRRF.
    pub total_deductions: Decimal,
    /// Amount paid to the employee.
    pub net_total: Decimal,
    /// Employer FGTS deposit.
    pub fgts: Decimal,
    /// Gross total plus FGTS.
    pub employer_cost: Decimal,
}

impl VacationCalculationResult {
    /// Returns every monetary field with its name, in declaration order.
    pub fn monetary_fields(&self) -> [(&'static str, Decimal); 17] {
        [
            ("daily_salary", self.daily_salary),
            ("vacation_base", self.vacation_base),
            ("vacation_third", self.vacation_third),
            ("vacation_total", self.vacation_total),
            ("sold_days_base", self.sold_days_base),
            ("sold_days_third", self.sold_days_third),
            ("sold_days_total", self.sold_days_total),
            ("advance_13th", self.advance_13th),
            ("gross_total", self.gross_total),
            ("inss_base", self.inss_base),
            ("inss", self.inss),
            ("irrf_base", self.irrf_base),
            ("irrf", self.irrf),
            ("total_deductions", self.total_deductions),
            ("net_total", self.net_total),
            ("fgts", self.fgts),
            ("employer_cost", self.employer_cost),
        ]
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the statute behind this rule.
    pub legal_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag inputs that are accepted but fall outside statutory limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// A vacation result together with the trace of how it was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationCalculation {
    /// The rounded, reconciled breakdown.
    pub result: VacationCalculationResult,
    /// Every rule applied, in order, plus any warnings.
    pub audit_trace: AuditTrace,
}

/// Sums of the headline fields over a set of results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// Number of results included in the sums.
    pub count: usize,
    /// Sum of `gross_total`.
    pub gross_total: Decimal,
    /// Sum of `net_total`.
    pub net_total: Decimal,
    /// Sum of `fgts`.
    pub fgts: Decimal,
    /// Sum of `employer_cost`.
    pub employer_cost: Decimal,
}

impl PayrollTotals {
    /// Adds one result to the totals.
    pub fn add(&mut self, result: &VacationCalculationResult) {
        self.count += 1;
        self.gross_total += result.gross_total;
        self.net_total += result.net_total;
        self.fgts += result.fgts;
        self.employer_cost += result.employer_cost;
    }
}

impl<'a> FromIterator<&'a VacationCalculationResult> for PayrollTotals {
    fn from_iter<I: IntoIterator<Item = &'a VacationCalculationResult>>(iter: I) -> Self {
        let mut totals = PayrollTotals::default();
        for result in iter {
            totals.add(result);
        }
        totals
    }
}

/// The outcome of a batch run: one entry per input, in input order.
#[derive(Debug)]
pub struct BatchCalculation {
    /// Per-input outcomes; failures do not affect other entries.
    pub results: Vec<EngineResult<VacationCalculationResult>>,
    /// Totals over the successful entries.
    pub totals: PayrollTotals,
}

impl BatchCalculation {
    /// Number of inputs that failed.
    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_err()).count()
    }
}

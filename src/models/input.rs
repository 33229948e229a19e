//! Vacation calculation input model.
//!
//! This module defines [`VacationCalculationInput`], the already-parsed
//! values a caller passes to the engine, and its validation rules.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Largest monthly salary accepted by [`VacationCalculationInput::validate`].
///
/// Keeps every intermediate product within `Decimal` range.
pub const MAX_MONTHLY_SALARY: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Largest vacation period, in days, accepted by validation.
pub const MAX_VACATION_DAYS: i32 = 366;

/// Largest number of IRRF dependents accepted by validation.
pub const MAX_DEPENDENTS: i32 = 99;

/// The inputs of a single vacation payout calculation.
///
/// # Example
///
/// ```
/// use vacation_payroll_engine::models::VacationCalculationInput;
/// use rust_decimal::Decimal;
///
/// let input = VacationCalculationInput::new(Decimal::new(3000, 0), 30, 10);
/// assert_eq!(input.vacation_days(), 20);
/// assert!(input.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationCalculationInput {
    /// Gross monthly base salary.
    pub monthly_salary: Decimal,
    /// Nominal vacation period in days (legally 30).
    pub total_days: i32,
    /// Days converted to a cash payout (abono pecuniário).
    #[serde(default)]
    pub sold_days: i32,
    /// Whether to pay the first 13th-salary installment with the vacation.
    #[serde(default)]
    pub advance_13th_salary: bool,
    /// Number of dependents for IRRF purposes.
    #[serde(default)]
    pub dependents: i32,
    /// Date used to select the effective tax tables; latest tables when absent.
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
}

impl VacationCalculationInput {
    /// Creates an input with no 13th advance, no dependents and no reference date.
    pub fn new(monthly_salary: Decimal, total_days: i32, sold_days: i32) -> Self {
        Self {
            monthly_salary,
            total_days,
            sold_days,
            advance_13th_salary: false,
            dependents: 0,
            reference_date: None,
        }
    }

    /// Sets whether the 13th-salary advance is requested.
    pub fn with_13th_advance(mut self, advance: bool) -> Self {
        self.advance_13th_salary = advance;
        self
    }

    /// Sets the number of IRRF dependents.
    pub fn with_dependents(mut self, dependents: i32) -> Self {
        self.dependents = dependents;
        self
    }

    /// Sets the date used to select tax tables.
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Days actually taken as time off.
    pub fn vacation_days(&self) -> i32 {
        self.total_days - self.sold_days
    }

    /// Rejects malformed inputs before any computation.
    ///
    /// Zero values are valid: a zero salary produces an all-zero result.
    /// Upper bounds ([`MAX_MONTHLY_SALARY`], [`MAX_VACATION_DAYS`],
    /// [`MAX_DEPENDENTS`]) keep the arithmetic free of overflow.
    pub fn validate(&self) -> EngineResult<()> {
        if self.monthly_salary < Decimal::ZERO {
            return Err(EngineError::validation(
                "monthly_salary",
                format!("must not be negative (got {})", self.monthly_salary),
            ));
        }
        if self.monthly_salary > MAX_MONTHLY_SALARY {
            return Err(EngineError::validation(
                "monthly_salary",
                format!("must not exceed {} (got {})", MAX_MONTHLY_SALARY, self.monthly_salary),
            ));
        }
        if self.total_days < 0 {
            return Err(EngineError::validation(
                "total_days",
                format!("must not be negative (got {})", self.total_days),
            ));
        }
        if self.total_days > MAX_VACATION_DAYS {
            return Err(EngineError::validation(
                "total_days",
                format!("must not exceed {} (got {})", MAX_VACATION_DAYS, self.total_days),
            ));
        }
        if self.sold_days < 0 {
            return Err(EngineError::validation(
                "sold_days",
                format!("must not be negative (got {})", self.sold_days),
            ));
        }
        if self.sold_days > self.total_days {
            return Err(EngineError::validation(
                "sold_days",
                format!(
                    "cannot exceed total_days ({} > {})",
                    self.sold_days, self.total_days
                ),
            ));
        }
        if self.dependents < 0 {
            return Err(EngineError::validation(
                "dependents",
                format!("must not be negative (got {})", self.dependents),
            ));
        }
        if self.dependents > MAX_DEPENDENTS {
            return Err(EngineError::validation(
                "dependents",
                format!("must not exceed {} (got {})", MAX_DEPENDENTS, self.dependents),
            ));
        }
        Ok(())
    }
}

//! Core data models for the Vacation Payroll Engine.
//!
//! This module contains the input, result and audit models used throughout
//! the engine.

mod calculation_result;
mod input;

pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, BatchCalculation, PayrollTotals, VacationCalculation,
    VacationCalculationResult,
};
pub use input::{MAX_DEPENDENTS, MAX_MONTHLY_SALARY, MAX_VACATION_DAYS, VacationCalculationInput};

//! Calculation logic for the Vacation Payroll Engine.
//!
//! This module contains the calculation functions for a vacation payout:
//! the daily salary and day split, vacation pay with its constitutional
//! third, sold days (abono pecuniário), the 13th-salary advance, progressive
//! bracket resolution for INSS and IRRF, the FGTS deposit, currency
//! rounding, and the orchestration that reconciles them into a single
//! result.

mod advance_13th;
mod bracket;
mod day_split;
mod fgts;
mod inss;
mod irrf;
mod rounding;
mod vacation;
mod vacation_pay;

pub use advance_13th::{Advance13thResult, calculate_13th_advance};
pub use bracket::{BracketMatch, match_bracket, resolve_bracket};
pub use day_split::{DAYS_IN_COMMERCIAL_MONTH, DaySplitResult, calculate_daily_salary, split_days};
pub use fgts::{FGTS_LEGAL_REF, FgtsResult, calculate_fgts};
pub use inss::{INSS_LEGAL_REF, InssMethod, InssResult, calculate_inss};
pub use irrf::{IRRF_LEGAL_REF, IrrfResult, calculate_irrf};
pub use rounding::{CURRENCY_DECIMAL_PLACES, has_currency_precision, percent_of, round_currency};
pub use vacation::{
    builtin_tables, calculate_vacation, calculate_vacation_audited, calculate_vacation_batch,
    calculate_vacation_with_tables,
};
pub use vacation_pay::{
    VACATION_BONUS_DIVISOR, VacationPayResult, calculate_sold_days_pay, calculate_vacation_pay,
};

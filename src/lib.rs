//! Vacation Payroll Engine
//!
//! This crate computes Brazilian vacation payouts: the split between days
//! taken and days sold (abono pecuniário), the constitutional one-third
//! bonus, the optional 13th-salary advance, INSS and IRRF withholding via
//! progressive brackets, the employer FGTS deposit, and a reconciled
//! gross/net/employer-cost breakdown rounded to centavos.
//!
//! # Example
//!
//! ```
//! use vacation_payroll_engine::calculate_vacation;
//! use vacation_payroll_engine::models::VacationCalculationInput;
//! use rust_decimal::Decimal;
//!
//! let input = VacationCalculationInput::new(Decimal::new(3000, 0), 30, 10);
//! let result = calculate_vacation(&input).unwrap();
//!
//! assert_eq!(result.vacation_days, 20);
//! assert_eq!(result.gross_total, Decimal::new(4000, 0));
//! assert_eq!(result.net_total, result.gross_total - result.total_deductions);
//! ```

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;

pub use calculation::{calculate_vacation, calculate_vacation_batch, calculate_vacation_with_tables};

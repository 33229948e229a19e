//! Tax table configuration for the Vacation Payroll Engine.
//!
//! INSS, IRRF and FGTS parameters change with legislation, so they are kept
//! as versioned data keyed by effective date rather than as literals in the
//! calculation code. Tables can be loaded from YAML files or taken from the
//! compiled-in 2025 set.
//!
//! # Example
//!
//! ```no_run
//! use vacation_payroll_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/tax_tables").unwrap();
//! println!("Latest tables: {}", loader.tables().latest().effective_date);
//! ```

mod builtin;
mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    Bracket, BracketTable, InssCeiling, InssTable, IrrfTable, LegalLimits, TaxTableSet, TaxTables,
};

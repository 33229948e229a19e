//! Compiled-in tax tables.
//!
//! These mirror `config/tax_tables/2025-01-01.yaml` so the engine can run
//! without reading any file.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::types::{
    Bracket, BracketTable, InssCeiling, InssTable, IrrfTable, LegalLimits, TaxTableSet,
};

/// Brazilian INSS, IRRF and FGTS tables in force from 2025.
pub(crate) fn brazil_2025() -> TaxTableSet {
    TaxTableSet {
        effective_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default(),
        description: "INSS and IRRF tables in force during 2025".to_string(),
        inss: InssTable {
            brackets: BracketTable::new(vec![
                Bracket::closed(
                    Decimal::ZERO,
                    Decimal::new(151800, 2),
                    Decimal::new(75, 1),
                    Decimal::ZERO,
                ),
                Bracket::closed(
                    Decimal::new(151801, 2),
                    Decimal::new(279388, 2),
                    Decimal::new(9, 0),
                    Decimal::new(2277, 2),
                ),
                Bracket::closed(
                    Decimal::new(279389, 2),
                    Decimal::new(419083, 2),
                    Decimal::new(12, 0),
                    Decimal::new(10659, 2),
                ),
                Bracket::closed(
                    Decimal::new(419084, 2),
                    Decimal::new(815741, 2),
                    Decimal::new(14, 0),
                    Decimal::new(19040, 2),
                ),
            ]),
            ceiling: InssCeiling {
                threshold: Decimal::new(419084, 2),
                rate: Decimal::new(14, 0),
            },
        },
        irrf: IrrfTable {
            brackets: BracketTable::new(vec![
                Bracket::closed(
                    Decimal::ZERO,
                    Decimal::new(242880, 2),
                    Decimal::ZERO,
                    Decimal::ZERO,
                ),
                Bracket::closed(
                    Decimal::new(242881, 2),
                    Decimal::new(282665, 2),
                    Decimal::new(75, 1),
                    Decimal::new(18216, 2),
                ),
                Bracket::closed(
                    Decimal::new(282666, 2),
                    Decimal::new(375105, 2),
                    Decimal::new(15, 0),
                    Decimal::new(39416, 2),
                ),
                Bracket::closed(
                    Decimal::new(375106, 2),
                    Decimal::new(466468, 2),
                    Decimal::new(225, 1),
                    Decimal::new(67549, 2),
                ),
                Bracket::open(
                    Decimal::new(466469, 2),
                    Decimal::new(275, 1),
                    Decimal::new(90873, 2),
                ),
            ]),
            dependent_deduction: Decimal::new(18959, 2),
        },
        fgts_rate: Decimal::new(8, 0),
        legal_limits: LegalLimits::default(),
    }
}

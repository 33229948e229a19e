//! Configuration types for tax table sets.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, one file per effective
//! date.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Largest distance allowed between one bracket's upper bound and the next
/// bracket's lower bound.
const MAX_BRACKET_GAP: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// A single progressive tax bracket.
///
/// The tax owed for a value inside the bracket is
/// `value * rate / 100 - deduction`, clamped at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bracket {
    /// Inclusive lower bound of the bracket.
    pub min: Decimal,
    /// Inclusive upper bound of the bracket; `None` for an open-ended bracket.
    #[serde(default)]
    pub max: Option<Decimal>,
    /// The marginal rate, in percent (e.g. `7.5`).
    pub rate: Decimal,
    /// The fixed amount subtracted after applying the rate.
    pub deduction: Decimal,
}

impl Bracket {
    /// Creates a closed bracket `[min, max]`.
    pub fn closed(min: Decimal, max: Decimal, rate: Decimal, deduction: Decimal) -> Self {
        Self {
            min,
            max: Some(max),
            rate,
            deduction,
        }
    }

    /// Creates an open-ended bracket `[min, ∞)`.
    pub fn open(min: Decimal, rate: Decimal, deduction: Decimal) -> Self {
        Self {
            min,
            max: None,
            rate,
            deduction,
        }
    }

    /// Returns true if `value` lies inside `[min, max]`.
    pub fn contains(&self, value: Decimal) -> bool {
        value >= self.min && self.max.is_none_or(|max| value <= max)
    }
}

/// An ordered list of non-overlapping brackets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BracketTable {
    brackets: Vec<Bracket>,
}

impl BracketTable {
    /// Creates a table from brackets listed in ascending order.
    pub fn new(brackets: Vec<Bracket>) -> Self {
        Self { brackets }
    }

    /// Returns the brackets in ascending order.
    pub fn brackets(&self) -> &[Bracket] {
        &self.brackets
    }

    /// Returns true if the last bracket has no upper bound.
    pub fn is_open_ended(&self) -> bool {
        self.brackets.last().is_some_and(|b| b.max.is_none())
    }

    /// Checks ordering and coverage invariants.
    ///
    /// Brackets must be non-empty, ascending, non-overlapping, at most one
    /// cent apart, and only the last one may be open-ended.
    pub fn validate(&self, name: &str) -> EngineResult<()> {
        if self.brackets.is_empty() {
            return Err(EngineError::invalid_table(name, "table has no brackets"));
        }

        for (index, bracket) in self.brackets.iter().enumerate() {
            if bracket.min < Decimal::ZERO {
                return Err(EngineError::invalid_table(
                    name,
                    format!("bracket {} has a negative lower bound", index + 1),
                ));
            }
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE_HUNDRED {
                return Err(EngineError::invalid_table(
                    name,
                    format!("bracket {} rate {} is outside 0..=100", index + 1, bracket.rate),
                ));
            }
            if bracket.deduction < Decimal::ZERO {
                return Err(EngineError::invalid_table(
                    name,
                    format!("bracket {} has a negative deduction", index + 1),
                ));
            }

            match bracket.max {
                Some(max) if max < bracket.min => {
                    return Err(EngineError::invalid_table(
                        name,
                        format!("bracket {} upper bound {} is below {}", index + 1, max, bracket.min),
                    ));
                }
                None if index + 1 != self.brackets.len() => {
                    return Err(EngineError::invalid_table(
                        name,
                        format!("bracket {} is open-ended but is not the last bracket", index + 1),
                    ));
                }
                _ => {}
            }

            if index > 0 {
                // Only the last bracket may be open-ended, so the previous one has a max.
                let previous_max = self.brackets[index - 1].max.unwrap_or(Decimal::MAX);
                if bracket.min <= previous_max {
                    return Err(EngineError::invalid_table(
                        name,
                        format!("brackets {} and {} overlap at {}", index, index + 1, bracket.min),
                    ));
                }
                if bracket.min - previous_max > MAX_BRACKET_GAP {
                    return Err(EngineError::invalid_table(
                        name,
                        format!(
                            "gap between {} and {} leaves values uncovered",
                            previous_max, bracket.min
                        ),
                    ));
                }
            }
        }

        Ok(())
    }
}

/// The flat contribution applied to INSS bases at or above a threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InssCeiling {
    /// Bases at or above this value use the flat rate.
    pub threshold: Decimal,
    /// The flat rate, in percent, applied to the whole base with no deduction.
    pub rate: Decimal,
}

/// INSS (social security) contribution table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InssTable {
    /// Progressive brackets for bases below the ceiling threshold.
    pub brackets: BracketTable,
    /// Flat-rate branch for bases at or above the threshold.
    pub ceiling: InssCeiling,
}

/// IRRF (withholding income tax) table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrrfTable {
    /// Progressive brackets; the last one is open-ended.
    pub brackets: BracketTable,
    /// Amount subtracted from the base for each dependent.
    pub dependent_deduction: Decimal,
}

/// Statutory limits that are reported, not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalLimits {
    /// Maximum number of vacation days that may be sold (CLT art. 143).
    pub max_sold_days: i32,
    /// Standard length of a vacation period in days (CLT art. 130).
    pub standard_vacation_days: i32,
}

impl Default for LegalLimits {
    fn default() -> Self {
        Self {
            max_sold_days: 10,
            standard_vacation_days: 30,
        }
    }
}

/// A complete set of tax tables in force from an effective date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxTableSet {
    /// The date from which these tables apply.
    pub effective_date: NaiveDate,
    /// A human-readable description of the source legislation.
    #[serde(default)]
    pub description: String,
    /// INSS contribution table.
    pub inss: InssTable,
    /// IRRF withholding table.
    pub irrf: IrrfTable,
    /// FGTS deposit rate, in percent.
    pub fgts_rate: Decimal,
    /// Statutory limits on vacation periods.
    #[serde(default)]
    pub legal_limits: LegalLimits,
}

impl TaxTableSet {
    /// Validates every table in the set.
    pub fn validate(&self) -> EngineResult<()> {
        self.inss.brackets.validate("inss")?;
        self.irrf.brackets.validate("irrf")?;

        if !self.irrf.brackets.is_open_ended() {
            return Err(EngineError::invalid_table(
                "irrf",
                "last bracket must be open-ended",
            ));
        }
        if self.inss.ceiling.threshold <= Decimal::ZERO {
            return Err(EngineError::invalid_table(
                "inss",
                "ceiling threshold must be positive",
            ));
        }
        if self.irrf.dependent_deduction < Decimal::ZERO {
            return Err(EngineError::invalid_table(
                "irrf",
                "dependent deduction must not be negative",
            ));
        }
        if self.fgts_rate < Decimal::ZERO || self.fgts_rate > Decimal::ONE_HUNDRED {
            return Err(EngineError::invalid_table(
                "fgts",
                format!("rate {} is outside 0..=100", self.fgts_rate),
            ));
        }

        Ok(())
    }
}

/// All known tax table sets, sorted by effective date (oldest first).
#[derive(Debug, Clone)]
pub struct TaxTables {
    sets: Vec<TaxTableSet>,
}

impl TaxTables {
    /// Validates and sorts the given sets.
    ///
    /// Fails if the list is empty, any set is invalid, or two sets share an
    /// effective date.
    pub fn new(sets: Vec<TaxTableSet>) -> EngineResult<Self> {
        if sets.is_empty() {
            return Err(EngineError::invalid_table(
                "tax_tables",
                "at least one table set is required",
            ));
        }
        for set in &sets {
            set.validate()?;
        }

        let mut sorted_sets = sets;
        sorted_sets.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));

        if let Some(pair) = sorted_sets
            .windows(2)
            .find(|pair| pair[0].effective_date == pair[1].effective_date)
        {
            return Err(EngineError::invalid_table(
                "tax_tables",
                format!("more than one table set is effective from {}", pair[0].effective_date),
            ));
        }

        Ok(Self { sets: sorted_sets })
    }

    /// Returns the compiled-in tables (2025 legislation).
    pub fn builtin() -> Self {
        Self {
            sets: vec![super::builtin::brazil_2025()],
        }
    }

    /// Returns all table sets, oldest first.
    pub fn sets(&self) -> &[TaxTableSet] {
        &self.sets
    }

    /// Returns the most recent table set.
    pub fn latest(&self) -> &TaxTableSet {
        // `new` and `builtin` never build an empty list.
        &self.sets[self.sets.len() - 1]
    }

    /// Returns the most recent table set effective on or before `date`.
    pub fn for_date(&self, date: NaiveDate) -> EngineResult<&TaxTableSet> {
        self.sets
            .iter()
            .rfind(|set| set.effective_date <= date)
            .ok_or(EngineError::TaxTableNotFound { date })
    }

    /// Picks the set for `reference_date`, or the latest set when absent.
    pub fn resolve(&self, reference_date: Option<NaiveDate>) -> EngineResult<&TaxTableSet> {
        match reference_date {
            Some(date) => self.for_date(date),
            None => Ok(self.latest()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn set_effective(year: i32) -> TaxTableSet {
        let mut set = super::super::builtin::brazil_2025();
        set.effective_date = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
        set
    }

    #[test]
    fn test_builtin_tables_are_valid() {
        let tables = TaxTables::builtin();
        assert!(tables.latest().validate().is_ok());
    }

    #[test]
    fn test_bracket_contains_is_inclusive() {
        let bracket = Bracket::closed(dec("1518.01"), dec("2793.88"), dec("9"), dec("22.77"));
        assert!(bracket.contains(dec("1518.01")));
        assert!(bracket.contains(dec("2793.88")));
        assert!(!bracket.contains(dec("2793.89")));
        assert!(!bracket.contains(dec("1518.00")));
    }

    #[test]
    fn test_open_bracket_contains_large_values() {
        let bracket = Bracket::open(dec("4664.69"), dec("27.5"), dec("908.73"));
        assert!(bracket.contains(dec("1000000")));
    }

    #[test]
    fn test_empty_table_is_rejected() {
        let table = BracketTable::new(vec![]);
        assert!(matches!(
            table.validate("inss"),
            Err(EngineError::InvalidTaxTable { .. })
        ));
    }

    #[test]
    fn test_overlapping_brackets_are_rejected() {
        let table = BracketTable::new(vec![
            Bracket::closed(dec("0"), dec("100"), dec("5"), dec("0")),
            Bracket::closed(dec("100"), dec("200"), dec("10"), dec("5")),
        ]);
        let err = table.validate("test").unwrap_err();
        assert!(err.to_string().contains("overlap"));
    }

    #[test]
    fn test_gapped_brackets_are_rejected() {
        let table = BracketTable::new(vec![
            Bracket::closed(dec("0"), dec("100"), dec("5"), dec("0")),
            Bracket::closed(dec("100.50"), dec("200"), dec("10"), dec("5")),
        ]);
        let err = table.validate("test").unwrap_err();
        assert!(err.to_string().contains("gap"));
    }

    #[test]
    fn test_open_bracket_in_middle_is_rejected() {
        let table = BracketTable::new(vec![
            Bracket::open(dec("0"), dec("5"), dec("0")),
            Bracket::closed(dec("100.01"), dec("200"), dec("10"), dec("5")),
        ]);
        let err = table.validate("test").unwrap_err();
        assert!(err.to_string().contains("open-ended"));
    }

    #[test]
    fn test_rate_above_one_hundred_is_rejected() {
        let table = BracketTable::new(vec![Bracket::open(dec("0"), dec("101"), dec("0"))]);
        assert!(table.validate("test").is_err());
    }

    #[test]
    fn test_irrf_without_open_bracket_is_rejected() {
        let mut set = set_effective(2025);
        set.irrf.brackets = BracketTable::new(vec![Bracket::closed(
            dec("0"),
            dec("2428.80"),
            dec("0"),
            dec("0"),
        )]);
        let err = set.validate().unwrap_err();
        assert!(err.to_string().contains("irrf"));
    }

    #[test]
    fn test_tax_tables_sorted_by_effective_date() {
        let tables = TaxTables::new(vec![set_effective(2026), set_effective(2024)]).unwrap();
        assert_eq!(tables.sets()[0].effective_date.to_string(), "2024-01-01");
        assert_eq!(tables.latest().effective_date.to_string(), "2026-01-01");
    }

    #[test]
    fn test_duplicate_effective_dates_are_rejected() {
        let mut reduced_fgts = set_effective(2025);
        reduced_fgts.fgts_rate = dec("2");

        match TaxTables::new(vec![set_effective(2025), set_effective(2024), reduced_fgts]) {
            Err(EngineError::InvalidTaxTable { table, message }) => {
                assert_eq!(table, "tax_tables");
                assert!(message.contains("2025-01-01"));
            }
            other => panic!("Expected InvalidTaxTable, got {:?}", other),
        }
    }

    #[test]
    fn test_for_date_picks_most_recent_effective_set() {
        let tables = TaxTables::new(vec![set_effective(2024), set_effective(2026)]).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert_eq!(
            tables.for_date(date).unwrap().effective_date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_for_date_before_any_set_returns_error() {
        let tables = TaxTables::builtin();
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        match tables.for_date(date) {
            Err(EngineError::TaxTableNotFound { date: d }) => assert_eq!(d, date),
            other => panic!("Expected TaxTableNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_without_date_uses_latest() {
        let tables = TaxTables::new(vec![set_effective(2024), set_effective(2025)]).unwrap();
        assert_eq!(
            tables.resolve(None).unwrap().effective_date,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_empty_tax_tables_are_rejected() {
        assert!(TaxTables::new(vec![]).is_err());
    }

    #[test]
    fn test_legal_limits_default() {
        let limits = LegalLimits::default();
        assert_eq!(limits.max_sold_days, 10);
        assert_eq!(limits.standard_vacation_days, 30);
    }
}

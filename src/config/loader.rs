//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading versioned tax
//! tables from YAML files.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{TaxTableSet, TaxTables};

/// Loads and provides access to versioned tax tables.
///
/// The `ConfigLoader` reads every YAML file in a directory. Each file holds
/// one [`TaxTableSet`] and the sets are ordered by their effective date.
///
/// # Directory Structure
///
/// ```text
/// config/tax_tables/
/// ├── 2025-01-01.yaml   # Tables effective from 1 January 2025
/// └── 2026-01-01.yaml   # Tables effective from 1 January 2026
/// ```
///
/// # Example
///
/// ```no_run
/// use vacation_payroll_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/tax_tables").unwrap();
/// let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
/// let tables = loader.tables_for(date).unwrap();
/// println!("IRRF dependent deduction: {}", tables.irrf.dependent_deduction);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    tables: TaxTables,
}

impl ConfigLoader {
    /// Loads every table set from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The directory is missing or holds no `.yaml` file
    /// - Any file contains invalid YAML or misses a required field
    /// - Any table breaks the bracket invariants
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let dir = path.as_ref();
        let dir_str = dir.display().to_string();

        if !dir.is_dir() {
            return Err(EngineError::ConfigNotFound { path: dir_str });
        }

        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut sets = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml" || ext == "yml") {
                sets.push(Self::load_file(&path)?);
            }
        }

        if sets.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no table files found)", dir_str),
            });
        }

        let tables = TaxTables::new(sets)?;
        info!(
            path = %dir_str,
            table_sets = tables.sets().len(),
            latest = %tables.latest().effective_date,
            "Loaded tax tables"
        );

        Ok(Self { tables })
    }

    /// Loads and parses a single table set file.
    pub fn load_file<P: AsRef<Path>>(path: P) -> EngineResult<TaxTableSet> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, &path_str)
    }

    /// Parses a table set from YAML text. `origin` names the source in errors.
    pub fn parse(content: &str, origin: &str) -> EngineResult<TaxTableSet> {
        let set: TaxTableSet =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;
        set.validate()?;
        Ok(set)
    }

    /// Returns the loaded tables.
    pub fn tables(&self) -> &TaxTables {
        &self.tables
    }

    /// Returns the table set effective on `date`.
    pub fn tables_for(&self, date: NaiveDate) -> EngineResult<&TaxTableSet> {
        self.tables.for_date(date)
    }

    /// Consumes the loader and returns the tables.
    pub fn into_tables(self) -> TaxTables {
        self.tables
    }
}

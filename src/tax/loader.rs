//! Tax rule file loading.
//!
//! This module reads a bracket table from a YAML file so the engine can
//! run against a schedule other than the built-in default.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{EngineResult, PayslipError};

use super::types::{TaxBracket, TaxTable};

/// On-disk form of a tax rule file.
#[derive(Debug, Deserialize)]
struct TaxRuleFile {
    brackets: Vec<TaxBracket>,
}

/// Loads a tax bracket table from a YAML file.
///
/// The file holds a `brackets` list in ascending order, ceilings
/// inclusive, with `~` marking the unbounded final bracket:
///
/// ```yaml
/// brackets:
///   - upper_bound: 18200
///     base_tax: 0
///     marginal_rate: "0.0"
///   - upper_bound: 37000
///     base_tax: 0
///     marginal_rate: "0.19"
///   - upper_bound: ~
///     base_tax: 3572
///     marginal_rate: "0.325"
/// ```
///
/// # Errors
///
/// Returns [`PayslipError::RulesNotFound`] when the file cannot be read,
/// [`PayslipError::RulesParseError`] when it is not valid YAML, and
/// [`PayslipError::InvalidTaxTable`] when the brackets violate the table
/// invariants.
pub fn load_tax_table<P: AsRef<Path>>(path: P) -> EngineResult<TaxTable> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| PayslipError::RulesNotFound {
        path: path_str.clone(),
    })?;

    let file: TaxRuleFile =
        serde_yaml::from_str(&content).map_err(|e| PayslipError::RulesParseError {
            path: path_str,
            message: e.to_string(),
        })?;

    TaxTable::new(file.brackets)
}

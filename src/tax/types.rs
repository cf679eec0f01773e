//! Tax bracket table types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineResult, PayslipError};

/// A contiguous annual-income range taxed at a single marginal rate.
///
/// `base_tax` is the cumulative tax owed on all income below the bracket,
/// so the tax for a salary inside the bracket is
/// `(salary - lower bound) * marginal_rate + base_tax`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Inclusive annual salary ceiling in whole dollars; `None` marks the
    /// unbounded final bracket.
    pub upper_bound: Option<i64>,
    /// Cumulative tax owed at the start of this bracket, in whole dollars.
    pub base_tax: i64,
    /// Rate applied to income inside this bracket, in `[0, 1]`.
    pub marginal_rate: Decimal,
}

/// The bracket resolved for a salary, with the ceiling of the bracket
/// below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketMatch<'a> {
    /// The matched bracket.
    pub bracket: &'a TaxBracket,
    /// Upper bound of the previous bracket; `0` for the first bracket.
    pub lower_bound: i64,
}

/// An ordered, immutable progressive income tax schedule.
///
/// Brackets are ascending and contiguous, and the final bracket is
/// unbounded, so exactly one bracket matches any non-negative salary.
/// Built once at startup and never mutated.
///
/// # Example
///
/// ```
/// use payslip_engine::tax::TaxTable;
///
/// let table = TaxTable::australia_2017();
/// let matched = table.resolve(60050)?;
/// assert_eq!(matched.lower_bound, 37_000);
/// assert_eq!(matched.bracket.base_tax, 3_572);
/// # Ok::<(), payslip_engine::error::PayslipError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxTable {
    brackets: Vec<TaxBracket>,
}

impl TaxTable {
    /// Builds a table from a bracket list, checking the structural
    /// invariants: at least one bracket, ceilings strictly ascending and
    /// non-negative, rates within `[0, 1]`, and exactly one unbounded
    /// bracket in the final position.
    pub fn new(brackets: Vec<TaxBracket>) -> EngineResult<Self> {
        if brackets.is_empty() {
            return Err(invalid_table("no brackets defined"));
        }
        let last = brackets.len() - 1;
        let mut previous_upper: Option<i64> = None;
        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.marginal_rate < Decimal::ZERO || bracket.marginal_rate > Decimal::ONE {
                return Err(invalid_table(&format!(
                    "marginal rate {} of bracket {} is outside 0..=1",
                    bracket.marginal_rate, index
                )));
            }
            match bracket.upper_bound {
                Some(upper) => {
                    if index == last {
                        return Err(invalid_table("final bracket must be unbounded"));
                    }
                    if upper < 0 {
                        return Err(invalid_table(&format!(
                            "upper bound {upper} of bracket {index} is negative"
                        )));
                    }
                    if previous_upper.is_some_and(|previous| upper <= previous) {
                        return Err(invalid_table(&format!(
                            "upper bound {upper} of bracket {index} does not ascend"
                        )));
                    }
                    previous_upper = Some(upper);
                }
                None => {
                    if index != last {
                        return Err(invalid_table(&format!(
                            "bracket {index} is unbounded but not the final bracket"
                        )));
                    }
                }
            }
        }
        Ok(Self { brackets })
    }

    /// Australian resident income tax schedule for the 2017 financial year.
    pub fn australia_2017() -> Self {
        Self {
            brackets: vec![
                TaxBracket {
                    upper_bound: Some(18_200),
                    base_tax: 0,
                    marginal_rate: Decimal::ZERO,
                },
                TaxBracket {
                    upper_bound: Some(37_000),
                    base_tax: 0,
                    marginal_rate: Decimal::new(190, 3),
                },
                TaxBracket {
                    upper_bound: Some(80_000),
                    base_tax: 3_572,
                    marginal_rate: Decimal::new(325, 3),
                },
                TaxBracket {
                    upper_bound: Some(180_000),
                    base_tax: 17_547,
                    marginal_rate: Decimal::new(370, 3),
                },
                TaxBracket {
                    upper_bound: None,
                    base_tax: 54_547,
                    marginal_rate: Decimal::new(450, 3),
                },
            ],
        }
    }

    /// The brackets in ascending order.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Resolves the bracket for a whole-dollar annual salary.
    ///
    /// Brackets are scanned in ascending order and the first bracket whose
    /// ceiling is at or above the salary wins; ceilings are inclusive, so a
    /// salary exactly on a boundary falls in the lower bracket.
    ///
    /// # Errors
    ///
    /// Returns [`PayslipError::NoTaxRule`] if no bracket covers the salary.
    /// With a table built by [`TaxTable::new`] or
    /// [`TaxTable::australia_2017`] this cannot happen for any salary.
    pub fn resolve(&self, salary: i64) -> EngineResult<BracketMatch<'_>> {
        let mut lower_bound = 0;
        for bracket in &self.brackets {
            match bracket.upper_bound {
                Some(upper) if salary > upper => lower_bound = upper,
                _ => {
                    return Ok(BracketMatch {
                        bracket,
                        lower_bound,
                    });
                }
            }
        }
        Err(PayslipError::NoTaxRule { salary })
    }
}

impl Default for TaxTable {
    fn default() -> Self {
        Self::australia_2017()
    }
}

fn invalid_table(message: &str) -> PayslipError {
    PayslipError::InvalidTaxTable {
        message: message.to_string(),
    }
}

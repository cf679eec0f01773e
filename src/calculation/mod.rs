//! Calculation logic for the payslip engine.
//!
//! Gross monthly income, monthly income tax and monthly superannuation
//! are each derived from the annual figures independently. Income and tax
//! round half-up to whole dollars, each exactly once; superannuation
//! truncates its final product instead. All intermediate arithmetic uses
//! exact decimals.

mod income;
mod superannuation;
mod tax;

pub use income::calculate_monthly_income;
pub use superannuation::calculate_monthly_super;
pub use tax::calculate_monthly_tax;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{EngineResult, PayslipError};

/// Months in a payslip year.
pub(crate) fn months_per_year() -> Decimal {
    Decimal::from(12)
}

/// Converts a whole-valued decimal amount into `i64` dollars.
pub(crate) fn to_whole_dollars(amount: Decimal, what: &str) -> EngineResult<i64> {
    amount
        .to_i64()
        .ok_or_else(|| PayslipError::CalculationError {
            message: format!("{what} {amount} does not fit in whole dollars"),
        })
}

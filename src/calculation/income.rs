//! Gross monthly income calculation.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::EngineResult;

use super::{months_per_year, to_whole_dollars};

/// Calculates the gross monthly income for an annual salary.
///
/// The annual salary is divided by twelve and rounded half-up to whole
/// dollars in a single step; the monthly figure is never derived from any
/// other monthly amount.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::calculate_monthly_income;
/// use rust_decimal::Decimal;
///
/// let income = calculate_monthly_income(Decimal::from(60_050))?;
/// assert_eq!(income, 5_004);
/// # Ok::<(), payslip_engine::error::PayslipError>(())
/// ```
pub fn calculate_monthly_income(annual_salary: Decimal) -> EngineResult<i64> {
    let monthly = (annual_salary / months_per_year())
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    to_whole_dollars(monthly, "monthly income")
}

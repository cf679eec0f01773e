//! Monthly income tax calculation.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::EngineResult;
use crate::tax::TaxTable;

use super::{months_per_year, to_whole_dollars};

/// Calculates the monthly income tax withheld for an annual salary.
///
/// The bracket is resolved on the whole-dollar salary (any fraction is
/// floored first), and the same whole-dollar figure is the basis of the
/// taxable amount above the previous bracket's ceiling:
///
/// ```text
/// annual tax  = (salary - lower bound) * marginal rate + base tax
/// monthly tax = half-up(annual tax / 12)
/// ```
///
/// The division by twelve is rounded half-up to whole dollars exactly
/// once; the monthly tax is never derived from the monthly income.
///
/// # Errors
///
/// Returns [`PayslipError::NoTaxRule`](crate::error::PayslipError::NoTaxRule)
/// if the table has no bracket for the salary, which cannot happen with a
/// structurally valid table.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::calculate_monthly_tax;
/// use payslip_engine::tax::TaxTable;
/// use rust_decimal::Decimal;
///
/// let table = TaxTable::australia_2017();
/// let tax = calculate_monthly_tax(Decimal::from(60_050), &table)?;
/// assert_eq!(tax, 922);
/// # Ok::<(), payslip_engine::error::PayslipError>(())
/// ```
pub fn calculate_monthly_tax(annual_salary: Decimal, table: &TaxTable) -> EngineResult<i64> {
    let salary = to_whole_dollars(annual_salary.floor(), "annual salary")?;
    let matched = table.resolve(salary)?;

    let taxable = Decimal::from(salary - matched.lower_bound);
    let annual_tax =
        taxable * matched.bracket.marginal_rate + Decimal::from(matched.bracket.base_tax);

    let monthly = (annual_tax / months_per_year())
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    to_whole_dollars(monthly, "monthly tax")
}

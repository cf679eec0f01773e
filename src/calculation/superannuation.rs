//! Monthly superannuation calculation.

use rust_decimal::Decimal;

use crate::error::EngineResult;

use super::to_whole_dollars;

/// Calculates the monthly superannuation contribution.
///
/// The percentage rate is divided by one hundred first (exact at decimal
/// precision for any practical rate), multiplied by the gross monthly
/// income, and the product is then truncated toward zero, never rounded —
/// unlike the half-up rounding income and tax use.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::calculate_monthly_super;
/// use rust_decimal::Decimal;
///
/// // 9% of 5004 is 450.36; the fraction is discarded.
/// let contribution = calculate_monthly_super(5_004, Decimal::from(9))?;
/// assert_eq!(contribution, 450);
/// # Ok::<(), payslip_engine::error::PayslipError>(())
/// ```
pub fn calculate_monthly_super(monthly_income: i64, super_rate: Decimal) -> EngineResult<i64> {
    let fraction = super_rate / Decimal::ONE_HUNDRED;
    let contribution = (fraction * Decimal::from(monthly_income)).trunc();
    to_whole_dollars(contribution, "monthly superannuation")
}

//! Business-rule validation for payslip requests.

use rust_decimal::Decimal;

use crate::error::{EngineResult, PayslipError};
use crate::models::PayslipRequest;

/// Upper bound of the valid super rate range, in percentage points.
fn max_super_rate() -> Decimal {
    Decimal::from(50)
}

impl PayslipRequest {
    /// Checks the request against the payslip business rules.
    ///
    /// Checks run in a fixed order and stop at the first violation:
    /// non-blank forename, non-blank surname, positive annual salary,
    /// super rate within 0% - 50% inclusive. Validation is side-effect
    /// free; a request that validates once validates again unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use payslip_engine::models::PayslipRequest;
    ///
    /// let request: PayslipRequest = "David,Rudd,60050,9%,March".parse()?;
    /// assert!(request.validate().is_ok());
    /// # Ok::<(), payslip_engine::error::PayslipError>(())
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        if self.employee.forename.trim().is_empty() {
            return Err(PayslipError::InvalidForename);
        }
        if self.employee.surname.trim().is_empty() {
            return Err(PayslipError::InvalidSurname);
        }
        if self.employee.annual_salary <= Decimal::ZERO {
            return Err(PayslipError::InvalidSalary);
        }
        if self.super_rate < Decimal::ZERO || self.super_rate > max_super_rate() {
            return Err(PayslipError::InvalidSuperRate);
        }
        Ok(())
    }
}

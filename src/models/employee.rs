//! Employee model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An employee named on a payslip request.
///
/// The parser constructs employees with whatever names survive token
/// trimming; emptiness is a business rule checked by
/// [`PayslipRequest::validate`](crate::models::PayslipRequest::validate),
/// not by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// The employee's first name.
    pub forename: String,
    /// The employee's last name.
    pub surname: String,
    /// Annual salary in dollars, fractional cents allowed.
    pub annual_salary: Decimal,
}

impl Employee {
    /// Full name, forename and surname separated by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.forename, self.surname)
    }
}

//! Payslip result models.

use std::fmt;

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use super::Month;

/// Monthly financial figures of a processed payslip request.
///
/// All amounts are whole dollars. Net income is never stored; it is
/// derived from salary and tax on demand so the two can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialInformation {
    /// Gross monthly salary.
    pub salary: i64,
    /// Monthly income tax withheld.
    pub tax: i64,
    /// Monthly superannuation contribution.
    pub superannuation: i64,
}

impl FinancialInformation {
    /// Net monthly income, always `salary - tax`.
    pub fn net_income(&self) -> i64 {
        self.salary - self.tax
    }
}

/// Result of a successfully processed payslip request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipResult {
    /// The employee's full name.
    pub name: String,
    /// The month the payslip covers.
    pub month: Month,
    /// The calculated monthly figures.
    pub financial: FinancialInformation,
}

impl PayslipResult {
    /// The payslip period, `01 <Month> - <days> <Month>`, for the given
    /// calendar year.
    pub fn month_period(&self, year: i32) -> String {
        format!(
            "01 {month} - {days} {month}",
            month = self.month.name(),
            days = self.month.days_in(year)
        )
    }
}

/// Renders the canonical output line:
/// `<full name>,01 <Month> - <N> <Month>,<salary>,<tax>,<net income>,<super>`.
///
/// The period length reflects the current calendar year, so a February
/// payslip shows 29 days in leap years.
impl fmt::Display for PayslipResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{}",
            self.name,
            self.month_period(Utc::now().year()),
            self.financial.salary,
            self.financial.tax,
            self.financial.net_income(),
            self.financial.superannuation
        )
    }
}

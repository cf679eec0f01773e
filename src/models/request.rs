//! Payslip request model.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::{Employee, Month};

/// A monthly payslip request for one employee.
///
/// Built by the parser from a request line, or directly by a caller.
/// Immutable once constructed; equality and display derive from all
/// fields. The super rate is in percentage points (`9` means 9%).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipRequest {
    /// The employee the payslip is for.
    pub employee: Employee,
    /// Superannuation rate in percentage points.
    pub super_rate: Decimal,
    /// The month the payslip covers.
    pub month: Month,
}

impl PayslipRequest {
    /// The employee's full name.
    pub fn full_name(&self) -> String {
        self.employee.full_name()
    }
}

/// Renders the canonical request line: salary in whole dollars (half-up),
/// super rate with at most two decimals, full month name.
impl fmt::Display for PayslipRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let salary = self
            .employee
            .annual_salary
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .normalize();
        let rate = self
            .super_rate
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            .normalize();
        write!(
            f,
            "{},{},{},{}%,{}",
            self.employee.forename, self.employee.surname, salary, rate, self.month
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_request() -> PayslipRequest {
        PayslipRequest {
            employee: Employee {
                forename: "David".to_string(),
                surname: "Rudd".to_string(),
                annual_salary: dec("60050"),
            },
            super_rate: dec("9"),
            month: Month::March,
        }
    }

    #[test]
    fn test_display_renders_request_line() {
        assert_eq!(create_test_request().to_string(), "David,Rudd,60050,9%,March");
    }

    #[test]
    fn test_display_rounds_salary_to_whole_dollars() {
        let request = PayslipRequest {
            employee: Employee {
                annual_salary: dec("60050.5"),
                ..create_test_request().employee
            },
            ..create_test_request()
        };
        assert_eq!(request.to_string(), "David,Rudd,60051,9%,March");
    }

    #[test]
    fn test_display_limits_rate_to_two_decimals() {
        let request = PayslipRequest {
            super_rate: dec("10.125"),
            ..create_test_request()
        };
        assert_eq!(request.to_string(), "David,Rudd,60050,10.13%,March");
    }

    #[test]
    fn test_display_drops_trailing_rate_zeros() {
        let request = PayslipRequest {
            super_rate: dec("9.00"),
            ..create_test_request()
        };
        assert_eq!(request.to_string(), "David,Rudd,60050,9%,March");
    }

    #[test]
    fn test_equality_covers_all_fields() {
        let request = create_test_request();
        assert_eq!(request, request.clone());

        let other_month = PayslipRequest {
            month: Month::May,
            ..create_test_request()
        };
        assert_ne!(request, other_month);

        let other_rate = PayslipRequest {
            super_rate: dec("10"),
            ..create_test_request()
        };
        assert_ne!(request, other_rate);
    }

    #[test]
    fn test_full_name_comes_from_employee() {
        assert_eq!(create_test_request().full_name(), "David Rudd");
    }

    #[test]
    fn test_serialize_request_round_trip() {
        let request = create_test_request();
        let json = serde_json::to_string(&request).unwrap();

        let deserialized: PayslipRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request, deserialized);
    }
}

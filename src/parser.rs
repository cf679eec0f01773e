//! Payslip request line parsing.
//!
//! A request line is comma-separated text:
//! `<forename>,<surname>,<annual_salary>,<super_rate>%,<month>`.
//! Whitespace around each element is trimmed and empty elements are
//! dropped before anything else is checked.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{EngineResult, PayslipError};
use crate::models::{Employee, Month, PayslipRequest};

/// Number of non-empty elements in a parsable request line.
const ELEMENT_COUNT: usize = 5;

/// Parses a request line into a [`PayslipRequest`].
///
/// Parsing is all-or-nothing: no partial request is ever returned, and
/// the first failing element in line order decides the error. Name
/// emptiness is left to [`PayslipRequest::validate`], since names pass
/// through unmodified.
///
/// # Examples
///
/// ```
/// use payslip_engine::models::Month;
/// use payslip_engine::parser;
///
/// let request = parser::parse("David,Rudd,60050,9%,March")?;
/// assert_eq!(request.full_name(), "David Rudd");
/// assert_eq!(request.month, Month::March);
/// # Ok::<(), payslip_engine::error::PayslipError>(())
/// ```
pub fn parse(line: &str) -> EngineResult<PayslipRequest> {
    let elements: Vec<&str> = line
        .split(',')
        .map(str::trim)
        .filter(|element| !element.is_empty())
        .collect();
    if elements.len() != ELEMENT_COUNT {
        return Err(PayslipError::InvalidElementCount);
    }

    let employee = Employee {
        forename: elements[0].to_string(),
        surname: elements[1].to_string(),
        annual_salary: parse_decimal(elements[2], "annual salary")?,
    };
    let super_rate = parse_super_rate(elements[3])?;
    let month = elements[4].parse::<Month>()?;

    Ok(PayslipRequest {
        employee,
        super_rate,
        month,
    })
}

/// Strips the mandatory `%` suffix and parses the remaining digits.
fn parse_super_rate(element: &str) -> EngineResult<Decimal> {
    if element.len() < 2 {
        return Err(PayslipError::SuperRateTooShort);
    }
    match element.strip_suffix('%') {
        Some(digits) => parse_decimal(digits, "super rate"),
        None => Err(PayslipError::SuperRateNoSuffix),
    }
}

fn parse_decimal(element: &str, field: &str) -> EngineResult<Decimal> {
    Decimal::from_str(element).map_err(|_| PayslipError::UnparsableNumber {
        field: field.to_string(),
        token: element.to_string(),
    })
}

impl FromStr for PayslipRequest {
    type Err = PayslipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

//! Error types for the payslip engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while parsing, validating and
//! calculating a payslip request.

use thiserror::Error;

/// The main error type for the payslip engine.
///
/// Every fallible operation in the engine returns this error type. The
/// display string of each variant is the exact message shown to the user;
/// callers print it verbatim and move on to the next request.
///
/// # Example
///
/// ```
/// use payslip_engine::error::PayslipError;
///
/// let error = PayslipError::InvalidMonth {
///     month: "Peter".to_string(),
/// };
/// assert_eq!(error.to_string(), "Peter is an invalid month");
/// ```
#[derive(Debug, Error)]
pub enum PayslipError {
    /// The request line did not split into exactly five non-empty elements.
    #[error("a payslip request must consist of 5 (non empty) elements")]
    InvalidElementCount,

    /// A numeric element could not be parsed as an exact decimal.
    #[error("cannot parse {field} '{token}' into a number")]
    UnparsableNumber {
        /// The field being parsed, e.g. "annual salary".
        field: String,
        /// The offending element text.
        token: String,
    },

    /// The super rate element is too short to hold a number and a `%`.
    #[error("super rate must have at least 1 number & end with a %")]
    SuperRateTooShort,

    /// The super rate element is not suffixed with a `%` character.
    #[error("super rate must be suffixed with a % character")]
    SuperRateNoSuffix,

    /// The month element is not an English month name.
    #[error("{month} is an invalid month")]
    InvalidMonth {
        /// The offending element text.
        month: String,
    },

    /// The forename is empty or whitespace only.
    #[error("First name is null or empty")]
    InvalidForename,

    /// The surname is empty or whitespace only.
    #[error("Last name is null or empty")]
    InvalidSurname,

    /// The annual salary is zero or negative.
    #[error("Salary must be bigger than zero")]
    InvalidSalary,

    /// The super rate lies outside the 0% - 50% inclusive range.
    #[error("Super rate must be between 0% - 50%")]
    InvalidSuperRate,

    /// No bracket in the tax table covers the salary.
    #[error("No tax rule found for annual salary '{salary}'")]
    NoTaxRule {
        /// The whole-dollar annual salary that missed every bracket.
        salary: i64,
    },

    /// Tax rule file was not found at the specified path.
    #[error("Tax rule file not found: {path}")]
    RulesNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Tax rule file could not be parsed.
    #[error("Failed to parse tax rule file '{path}': {message}")]
    RulesParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A bracket table violates the tax table invariants.
    #[error("Invalid tax table: {message}")]
    InvalidTaxTable {
        /// A description of the violated invariant.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return PayslipError.
pub type EngineResult<T> = Result<T, PayslipError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_element_count_message() {
        assert_eq!(
            PayslipError::InvalidElementCount.to_string(),
            "a payslip request must consist of 5 (non empty) elements"
        );
    }

    #[test]
    fn test_unparsable_number_displays_field_and_token() {
        let error = PayslipError::UnparsableNumber {
            field: "annual salary".to_string(),
            token: "6O050".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "cannot parse annual salary '6O050' into a number"
        );
    }

    #[test]
    fn test_super_rate_suffix_messages() {
        assert_eq!(
            PayslipError::SuperRateTooShort.to_string(),
            "super rate must have at least 1 number & end with a %"
        );
        assert_eq!(
            PayslipError::SuperRateNoSuffix.to_string(),
            "super rate must be suffixed with a % character"
        );
    }

    #[test]
    fn test_invalid_month_displays_token() {
        let error = PayslipError::InvalidMonth {
            month: "Peter".to_string(),
        };
        assert_eq!(error.to_string(), "Peter is an invalid month");
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            PayslipError::InvalidForename.to_string(),
            "First name is null or empty"
        );
        assert_eq!(
            PayslipError::InvalidSurname.to_string(),
            "Last name is null or empty"
        );
        assert_eq!(
            PayslipError::InvalidSalary.to_string(),
            "Salary must be bigger than zero"
        );
        assert_eq!(
            PayslipError::InvalidSuperRate.to_string(),
            "Super rate must be between 0% - 50%"
        );
    }

    #[test]
    fn test_no_tax_rule_displays_salary() {
        let error = PayslipError::NoTaxRule { salary: 60050 };
        assert_eq!(
            error.to_string(),
            "No tax rule found for annual salary '60050'"
        );
    }

    #[test]
    fn test_rules_not_found_displays_path() {
        let error = PayslipError::RulesNotFound {
            path: "/missing/rules.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Tax rule file not found: /missing/rules.yaml"
        );
    }

    #[test]
    fn test_rules_parse_error_displays_path_and_message() {
        let error = PayslipError::RulesParseError {
            path: "/rules/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse tax rule file '/rules/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PayslipError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_salary() -> EngineResult<()> {
            Err(PayslipError::InvalidSalary)
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_salary()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}

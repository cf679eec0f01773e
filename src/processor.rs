//! Request processing.
//!
//! The processor owns the tax table and turns validated requests into
//! payslip results. Requests are independent: a rejected request leaves
//! the processor and its table untouched for the next one.

use crate::calculation::{
    calculate_monthly_income, calculate_monthly_super, calculate_monthly_tax,
};
use crate::error::EngineResult;
use crate::models::{FinancialInformation, PayslipRequest, PayslipResult};
use crate::tax::TaxTable;

/// Processes payslip requests against a fixed tax table.
///
/// The table is chosen at construction and never changes afterwards.
///
/// # Examples
///
/// ```
/// use payslip_engine::models::PayslipRequest;
/// use payslip_engine::processor::PayslipProcessor;
///
/// let processor = PayslipProcessor::new();
/// let request: PayslipRequest = "David,Rudd,60050,9%,March".parse()?;
/// let result = processor.process(&request)?;
///
/// assert_eq!(result.financial.salary, 5004);
/// assert_eq!(result.financial.tax, 922);
/// assert_eq!(result.financial.net_income(), 4082);
/// assert_eq!(result.financial.superannuation, 450);
/// # Ok::<(), payslip_engine::error::PayslipError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PayslipProcessor {
    table: TaxTable,
}

impl PayslipProcessor {
    /// A processor using the default Australia 2017 tax table.
    pub fn new() -> Self {
        Self::default()
    }

    /// A processor using a custom tax table.
    pub fn with_table(table: TaxTable) -> Self {
        Self { table }
    }

    /// The tax table this processor calculates with.
    pub fn table(&self) -> &TaxTable {
        &self.table
    }

    /// Validates the request and produces its monthly payslip result.
    ///
    /// Monthly income and monthly tax are each derived from the annual
    /// figures with one half-up rounding; net income falls out of their
    /// difference and superannuation is truncated from the monthly
    /// income.
    ///
    /// # Errors
    ///
    /// Returns the first violated business rule, or a calculation error
    /// if the tax table has no bracket for the salary.
    pub fn process(&self, request: &PayslipRequest) -> EngineResult<PayslipResult> {
        request.validate()?;

        let salary = calculate_monthly_income(request.employee.annual_salary)?;
        let tax = calculate_monthly_tax(request.employee.annual_salary, &self.table)?;
        let superannuation = calculate_monthly_super(salary, request.super_rate)?;

        Ok(PayslipResult {
            name: request.full_name(),
            month: request.month,
            financial: FinancialInformation {
                salary,
                tax,
                superannuation,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PayslipError;
    use crate::models::{Employee, Month};
    use crate::tax::TaxBracket;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_request(salary: &str, rate: &str, month: Month) -> PayslipRequest {
        PayslipRequest {
            employee: Employee {
                forename: "Ryan".to_string(),
                surname: "Chen".to_string(),
                annual_salary: dec(salary),
            },
            super_rate: dec(rate),
            month,
        }
    }

    #[test]
    fn test_process_fills_all_monthly_figures() {
        let processor = PayslipProcessor::new();
        let result = processor
            .process(&create_request("120000", "10", Month::March))
            .unwrap();

        assert_eq!(result.name, "Ryan Chen");
        assert_eq!(result.month, Month::March);
        assert_eq!(result.financial.salary, 10000);
        assert_eq!(result.financial.tax, 2696);
        assert_eq!(result.financial.net_income(), 7304);
        assert_eq!(result.financial.superannuation, 1000);
    }

    #[test]
    fn test_process_rejects_invalid_request() {
        let processor = PayslipProcessor::new();
        let request = create_request("0", "9", Month::March);

        let error = processor.process(&request).unwrap_err();
        assert!(matches!(error, PayslipError::InvalidSalary));
    }

    #[test]
    fn test_processor_survives_rejected_requests() {
        let processor = PayslipProcessor::new();

        assert!(processor
            .process(&create_request("60050", "51", Month::March))
            .is_err());
        let result = processor
            .process(&create_request("60050", "9", Month::March))
            .unwrap();
        assert_eq!(result.financial.salary, 5004);
    }

    #[test]
    fn test_process_with_custom_table() {
        let table = TaxTable::new(vec![TaxBracket {
            upper_bound: None,
            base_tax: 0,
            marginal_rate: dec("0.1"),
        }])
        .unwrap();
        let processor = PayslipProcessor::with_table(table);

        let result = processor
            .process(&create_request("120000", "0", Month::March))
            .unwrap();
        assert_eq!(result.financial.tax, 1000);
    }

    #[test]
    fn test_default_processor_uses_australia_2017() {
        let processor = PayslipProcessor::default();
        assert_eq!(processor.table(), &TaxTable::australia_2017());
    }

    #[test]
    fn test_net_income_always_matches_difference() {
        let processor = PayslipProcessor::new();
        for salary in ["18200", "37000", "60050", "80000", "180000", "180001"] {
            let result = processor
                .process(&create_request(salary, "9", Month::March))
                .unwrap();
            assert_eq!(
                result.financial.net_income(),
                result.financial.salary - result.financial.tax
            );
        }
    }
}

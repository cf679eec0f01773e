//! Monthly payslip engine for Australian progressive income tax.
//!
//! This crate parses textual payslip requests, validates them, and
//! calculates the monthly payslip figures - gross income, income tax,
//! net income and superannuation - against a progressive tax bracket
//! table.
//!
//! ```
//! use payslip_engine::models::PayslipRequest;
//! use payslip_engine::processor::PayslipProcessor;
//!
//! let request: PayslipRequest = "David,Rudd,60050,9%,March".parse()?;
//! let result = PayslipProcessor::new().process(&request)?;
//!
//! assert_eq!(result.financial.salary, 5004);
//! assert_eq!(result.financial.net_income(), 4082);
//! # Ok::<(), payslip_engine::error::PayslipError>(())
//! ```

#![warn(missing_docs)]

pub mod calculation;
pub mod error;
pub mod models;
pub mod parser;
pub mod processor;
pub mod tax;

mod validation;

//! Core data models for the payslip engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod month;
mod request;
mod result;

pub use employee::Employee;
pub use month::Month;
pub use request::PayslipRequest;
pub use result::{FinancialInformation, PayslipResult};

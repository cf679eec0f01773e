//! Calendar month model.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::PayslipError;

/// A calendar month of a payslip period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Month {
    /// January.
    January,
    /// February.
    February,
    /// March.
    March,
    /// April.
    April,
    /// May.
    May,
    /// June.
    June,
    /// July.
    July,
    /// August.
    August,
    /// September.
    September,
    /// October.
    October,
    /// November.
    November,
    /// December.
    December,
}

impl Month {
    /// All twelve months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Full English display name, e.g. "March".
    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// 1-based month number, January being 1.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Number of days in this month for the given calendar year.
    ///
    /// # Examples
    ///
    /// ```
    /// use payslip_engine::models::Month;
    ///
    /// assert_eq!(Month::March.days_in(2017), 31);
    /// assert_eq!(Month::February.days_in(2016), 29);
    /// assert_eq!(Month::February.days_in(2017), 28);
    /// ```
    pub fn days_in(self, year: i32) -> u32 {
        match self {
            Month::February => {
                if is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
            Month::April | Month::June | Month::September | Month::November => 30,
            _ => 31,
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = PayslipError;

    /// Matches the full English month name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "JANUARY" => Ok(Month::January),
            "FEBRUARY" => Ok(Month::February),
            "MARCH" => Ok(Month::March),
            "APRIL" => Ok(Month::April),
            "MAY" => Ok(Month::May),
            "JUNE" => Ok(Month::June),
            "JULY" => Ok(Month::July),
            "AUGUST" => Ok(Month::August),
            "SEPTEMBER" => Ok(Month::September),
            "OCTOBER" => Ok(Month::October),
            "NOVEMBER" => Ok(Month::November),
            "DECEMBER" => Ok(Month::December),
            _ => Err(PayslipError::InvalidMonth {
                month: s.to_string(),
            }),
        }
    }
}

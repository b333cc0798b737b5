//! Calendar parsing helpers and the monthly pay period.

use std::{fmt, str::FromStr};

use thiserror::Error;
use time::{macros::format_description, Date, Duration, Month, Time};

use super::WorkforceError;

#[derive(Debug, Error, PartialEq)]
pub enum PeriodError {
    #[error("could not parse date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("could not parse clock time '{0}', expected HH:MM")]
    InvalidClockTime(String),
    #[error("could not parse month '{0}', expected YYYY-MM")]
    InvalidMonth(String),
}

impl From<PeriodError> for WorkforceError {
    fn from(err: PeriodError) -> Self {
        WorkforceError::Validation(err.to_string())
    }
}

pub fn parse_date(s: &str) -> Result<Date, PeriodError> {
    Date::parse(s.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|_| PeriodError::InvalidDate(s.to_string()))
}

pub fn parse_clock_time(s: &str) -> Result<Time, PeriodError> {
    Time::parse(s.trim(), format_description!("[hour]:[minute]"))
        .map_err(|_| PeriodError::InvalidClockTime(s.to_string()))
}

pub fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

pub fn format_clock_time(time: Time) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// A calendar month that payroll is computed for, written `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PayPeriod {
    first_day: Date,
}

impl PayPeriod {
    pub fn new(year: i32, month: Month) -> Result<Self, PeriodError> {
        let first_day = Date::from_calendar_date(year, month, 1)
            .map_err(|_| PeriodError::InvalidMonth(format!("{year}-{:02}", u8::from(month))))?;
        Ok(Self { first_day })
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> Month {
        self.first_day.month()
    }

    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// First and last day of the month, both inclusive.
    pub fn date_range(&self) -> (Date, Date) {
        let days = time::util::days_in_year_month(self.year(), self.month());
        let last_day = self.first_day + Duration::days(i64::from(days) - 1);
        (self.first_day, last_day)
    }
}

impl FromStr for PayPeriod {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PeriodError::InvalidMonth(s.to_string());

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u8 = month.parse().map_err(|_| invalid())?;
        let month = Month::try_from(month).map_err(|_| invalid())?;

        Self::new(year, month).map_err(|_| invalid())
    }
}

impl fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), u8::from(self.month()))
    }
}

//! Calendar date type.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ParspotError, ParspotResult};

/// A calendar date.
///
/// Newtype wrapper around `chrono::NaiveDate` carrying the handful of
/// operations tenor day-count conversion needs. Month and year stepping
/// clamp to the end of the target month (Jan 31 + 1 month = Feb 28/29),
/// matching standard maturity-roll behavior.
///
/// # Example
///
/// ```rust
/// use parspot_core::Date;
///
/// let quote_date = Date::from_ymd(2025, 6, 2).unwrap();
/// let ten_years_out = quote_date.add_years(10).unwrap();
/// assert_eq!(quote_date.days_between(&ten_years_out), 3652);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `ParspotError::InvalidDate` if the calendar combination is
    /// invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> ParspotResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| ParspotError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Parses an ISO 8601 date string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `ParspotError::InvalidDate` if the string does not parse.
    pub fn parse(s: &str) -> ParspotResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| ParspotError::invalid_date(format!("cannot parse '{s}'")))
    }

    /// Returns today's date.
    #[must_use]
    pub fn today() -> Self {
        Date(chrono::Local::now().date_naive())
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Adds a number of calendar days.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Adds a number of whole months, clamping to the end of the target
    /// month when the source day does not exist there.
    ///
    /// # Errors
    ///
    /// Returns `ParspotError::InvalidDate` if the result falls outside the
    /// representable range.
    pub fn add_months(&self, months: u32) -> ParspotResult<Self> {
        self.0
            .checked_add_months(Months::new(months))
            .map(Date)
            .ok_or_else(|| {
                ParspotError::invalid_date(format!("{self} + {months} months out of range"))
            })
    }

    /// Adds a number of whole years, clamping Feb 29 to Feb 28 in
    /// non-leap target years.
    ///
    /// # Errors
    ///
    /// Returns `ParspotError::InvalidDate` if the result falls outside the
    /// representable range.
    pub fn add_years(&self, years: u32) -> ParspotResult<Self> {
        self.add_months(years * 12)
    }

    /// Calendar days from `self` to `other` (positive when `other` is
    /// later).
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

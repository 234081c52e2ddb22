//! Quoted maturity labels and their day-count conversion.

use std::fmt;

use crate::error::{ParspotError, ParspotResult};
use crate::types::Date;

/// Unit of a quoted tenor label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenorUnit {
    /// Calendar months.
    Months,
    /// Calendar years.
    Years,
}

/// A quoted maturity, e.g. "3 Mo", "1.5 Month", "10 Yr".
///
/// Rate providers label columns with a count and a unit; the count may be
/// fractional (the 1.5-month bill). A tenor converts to an exact integer
/// day offset from an as-of date: whole months and years step through the
/// calendar, and any fractional remainder is approximated at 30 days per
/// month and 365 days per year.
///
/// # Example
///
/// ```rust
/// use parspot_core::{Date, Tenor};
///
/// let tenor = Tenor::parse("1.5 Month").unwrap();
/// let as_of = Date::from_ymd(2025, 6, 2).unwrap();
/// // One calendar month (30 days here) plus half a month at 30 days/month.
/// assert_eq!(tenor.day_count(as_of).unwrap(), 45);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tenor {
    count: f64,
    unit: TenorUnit,
}

impl Tenor {
    /// Creates a tenor from a count and unit.
    ///
    /// # Errors
    ///
    /// Returns `ParspotError::InvalidTenor` if the count is not a positive
    /// finite number.
    pub fn new(count: f64, unit: TenorUnit) -> ParspotResult<Self> {
        if !count.is_finite() || count <= 0.0 {
            return Err(ParspotError::invalid_tenor(
                format!("{count} {unit}"),
                "count must be positive and finite",
            ));
        }
        Ok(Self { count, unit })
    }

    /// Parses a quoted label such as `"3 Mo"`, `"1.5 Month"`, or `"10 Yr"`.
    ///
    /// # Errors
    ///
    /// Returns `ParspotError::InvalidTenor` if the label does not follow
    /// the `<count> <unit>` grammar.
    pub fn parse(label: &str) -> ParspotResult<Self> {
        let mut parts = label.split_whitespace();
        let (count_str, unit_str) = match (parts.next(), parts.next(), parts.next()) {
            (Some(c), Some(u), None) => (c, u),
            _ => {
                return Err(ParspotError::invalid_tenor(
                    label,
                    "expected '<count> <unit>'",
                ))
            }
        };

        let count: f64 = count_str
            .parse()
            .map_err(|_| ParspotError::invalid_tenor(label, "count is not a number"))?;

        let unit = match unit_str {
            "Mo" | "Month" | "Months" => TenorUnit::Months,
            "Yr" | "Year" | "Years" => TenorUnit::Years,
            _ => return Err(ParspotError::invalid_tenor(label, "unknown unit")),
        };

        Self::new(count, unit)
    }

    /// Returns the tenor count.
    #[must_use]
    pub fn count(&self) -> f64 {
        self.count
    }

    /// Returns the tenor unit.
    #[must_use]
    pub fn unit(&self) -> TenorUnit {
        self.unit
    }

    /// Converts the tenor to an integer day offset from `as_of`.
    ///
    /// Whole months/years advance through the calendar (so "3 Mo" from
    /// June 2 lands on September 2, however many days that is); fractional
    /// remainders add `frac * 30` or `frac * 365` days, truncated.
    ///
    /// # Errors
    ///
    /// Returns `ParspotError::InvalidDate` if calendar stepping leaves the
    /// representable range.
    pub fn day_count(&self, as_of: Date) -> ParspotResult<u32> {
        let whole = self.count.trunc() as u32;
        let frac = self.count.fract();

        let mut end = match self.unit {
            TenorUnit::Months => as_of.add_months(whole)?,
            TenorUnit::Years => as_of.add_years(whole)?,
        };
        if frac > 0.0 {
            let approx_days = match self.unit {
                TenorUnit::Months => (frac * 30.0) as i64,
                TenorUnit::Years => (frac * 365.0) as i64,
            };
            end = end.add_days(approx_days);
        }

        Ok(as_of.days_between(&end) as u32)
    }
}

impl fmt::Display for TenorUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TenorUnit::Months => write!(f, "Mo"),
            TenorUnit::Years => write!(f, "Yr"),
        }
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count.fract() == 0.0 {
            write!(f, "{} {}", self.count as u32, self.unit)
        } else {
            write!(f, "{} {}", self.count, self.unit)
        }
    }
}

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// An inclusive calendar date range.
///
/// [`DateRange::new`] enforces `start <= end`; an analyst selection with the
/// endpoints inverted is a [`RangeError`] and is reported before any
/// aggregation runs. Filtering with a range only ever narrows a table, it
/// never reorders it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError { start, end });
        }
        Ok(DateRange { start, end })
    }

    /// True when `date` falls inside the range, endpoints included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Narrow both endpoints into `bounds`.
    ///
    /// A selection lying entirely outside `bounds` collapses onto the
    /// nearest boundary day, the same way a date picker with min/max
    /// attributes refuses to move past them.
    pub fn clamp_to(&self, bounds: DateRange) -> DateRange {
        DateRange {
            start: self.start.clamp(bounds.start, bounds.end),
            end: self.end.clamp(bounds.start, bounds.end),
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Raised when a selected start date falls after the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeError {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid date range: start {} is after end {}",
            self.start, self.end
        )
    }
}

impl std::error::Error for RangeError {}

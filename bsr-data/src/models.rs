//! Aggregation result model structs.
//!
//! All structs derive `Serialize` so a charting front end can consume them
//! as JSON.

use bsr_core::season::Season;
use chrono::NaiveDate;
use serde::Serialize;

/// Total rentals recorded during one hour of the day, summed over a range.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct HourTotal {
    /// Hour of day, 0-23.
    pub hour: u8,
    pub total: u64,
}

/// Total rentals for one calendar date (a time-trend series point).
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DateTotal {
    pub date: NaiveDate,
    pub total: u64,
}

/// Total rentals recorded in one season over a range.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SeasonTotal {
    pub season: Season,
    pub total: u64,
}

/// Registered and casual rental sums with each class's percentage share.
///
/// Shares are computed from the sums, not hard-coded; they are `None` when
/// the filtered subset has no rentals to apportion.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct UserSplit {
    pub registered: u64,
    pub casual: u64,
    pub registered_share: Option<f64>,
    pub casual_share: Option<f64>,
}

/// Mean rentals per hourly row on holidays versus working days.
///
/// A mean is `None` exactly when its class has no rows in the filtered
/// subset.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct HolidaySplit {
    pub holiday_rows: usize,
    pub workday_rows: usize,
    pub holiday_mean: Option<f64>,
    pub workday_mean: Option<f64>,
}

//! The usage report: one reporting pass's worth of derived summary tables.

use crate::aggregate;
use crate::models::{DateTotal, HolidaySplit, HourTotal, SeasonTotal, UserSplit};
use bsr_core::date_range::DateRange;
use bsr_core::records::{DailyRecord, HourlyRecord};
use serde::Serialize;

/// How many peak hours the dashboard surfaces.
pub const PEAK_HOURS_SHOWN: usize = 5;

/// Every derived summary table for one date-range selection.
///
/// Built fresh on each selection change from the same filtered subset of
/// both tables, and discarded after rendering; nothing here is persisted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UsageReport {
    /// The resolved selection.
    pub range: DateRange,
    /// Total rentals over the daily subset.
    pub total_rentals: u64,
    /// Registered/casual sums and percentage shares.
    pub users: UserSplit,
    /// Holiday versus working-day hourly means.
    pub holiday: HolidaySplit,
    /// Rentals per season, ascending season code.
    pub seasons: Vec<SeasonTotal>,
    /// Daily (date, total) series, ascending date.
    pub daily_trend: Vec<DateTotal>,
    /// Rentals per hour of day, ascending hour.
    pub hourly_totals: Vec<HourTotal>,
    /// The busiest hours, highest total first.
    pub peak_hours: Vec<HourTotal>,
}

impl UsageReport {
    /// Run every aggregation for `range` against the full tables.
    ///
    /// `daily` and `hourly` are the complete date-sorted tables; the range
    /// is applied here so that all views derive from the same subset.
    pub fn for_range(
        daily: &[DailyRecord],
        hourly: &[HourlyRecord],
        range: DateRange,
    ) -> UsageReport {
        let daily = aggregate::filter_by_date(daily, range);
        let hourly = aggregate::filter_by_date(hourly, range);
        log::debug!(
            "report: {} daily and {} hourly rows in {}",
            daily.len(),
            hourly.len(),
            range
        );

        let ranking = aggregate::hour_ranking(hourly);
        let seasons = aggregate::season_totals(hourly)
            .into_iter()
            .map(|(season, total)| SeasonTotal { season, total })
            .collect();
        let hourly_totals = aggregate::total_by_hour(hourly)
            .into_iter()
            .map(|(hour, total)| HourTotal { hour, total })
            .collect();

        UsageReport {
            range,
            total_rentals: daily.iter().map(|r| u64::from(r.total)).sum(),
            users: aggregate::user_split(daily),
            holiday: aggregate::holiday_split(hourly),
            seasons,
            daily_trend: aggregate::daily_trend(daily),
            hourly_totals,
            peak_hours: aggregate::top_hours(&ranking, PEAK_HOURS_SHOWN),
        }
    }
}

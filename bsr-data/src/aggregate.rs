//! Pure aggregation operations over the rental tables.
//!
//! Every function here is deterministic and side-effect free: it takes a
//! slice of records (usually already narrowed to the selected date range),
//! never mutates it, and derives one summary view. The operations do not
//! depend on each other's invocation order and are all O(n) or O(n log n)
//! in the number of input rows.

use crate::models::{DateTotal, HolidaySplit, HourTotal, UserSplit};
use bsr_core::date_range::DateRange;
use bsr_core::records::{DailyRecord, Dated, HourlyRecord};
use bsr_core::season::Season;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Narrow date-sorted rows to those inside `range`, endpoints included.
///
/// Input must be sorted ascending by date (the store guarantees this after
/// load). The matching rows form a contiguous run, so the result is a
/// subslice: original order preserved, nothing copied, and an empty match
/// is simply an empty slice.
pub fn filter_by_date<R: Dated>(rows: &[R], range: DateRange) -> &[R] {
    let from = rows.partition_point(|r| r.date() < range.start);
    let to = rows.partition_point(|r| r.date() <= range.end);
    &rows[from..to]
}

/// Sum hourly rental totals into one bucket per hour of day.
///
/// The map iterates in ascending hour order; any other display order is the
/// caller's concern.
pub fn total_by_hour(hourly: &[HourlyRecord]) -> BTreeMap<u8, u64> {
    let mut totals: BTreeMap<u8, u64> = BTreeMap::new();
    for record in hourly {
        *totals.entry(record.hour).or_default() += u64::from(record.total);
    }
    totals
}

/// Sum registered-user rentals into one bucket per calendar date.
pub fn registered_by_date(daily: &[DailyRecord]) -> BTreeMap<NaiveDate, u64> {
    let mut sums: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for record in daily {
        *sums.entry(record.date).or_default() += u64::from(record.registered);
    }
    sums
}

/// Sum casual-user rentals into one bucket per calendar date.
pub fn casual_by_date(daily: &[DailyRecord]) -> BTreeMap<NaiveDate, u64> {
    let mut sums: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for record in daily {
        *sums.entry(record.date).or_default() += u64::from(record.casual);
    }
    sums
}

/// Rank hours of day by total rentals, busiest first.
///
/// Built from the ascending-hour totals with a stable sort, so hours with
/// equal totals keep ascending hour order.
pub fn hour_ranking(hourly: &[HourlyRecord]) -> Vec<HourTotal> {
    let mut ranking: Vec<HourTotal> = total_by_hour(hourly)
        .into_iter()
        .map(|(hour, total)| HourTotal { hour, total })
        .collect();
    ranking.sort_by(|a, b| b.total.cmp(&a.total));
    ranking
}

/// The first `count` entries of a busiest-first hour ranking.
pub fn top_hours(ranking: &[HourTotal], count: usize) -> Vec<HourTotal> {
    ranking.iter().take(count).copied().collect()
}

/// Sum hourly rental totals into one bucket per season.
///
/// One entry per season present in the input; iteration order is ascending
/// season code, which is also the display order.
pub fn season_totals(hourly: &[HourlyRecord]) -> BTreeMap<Season, u64> {
    let mut totals: BTreeMap<Season, u64> = BTreeMap::new();
    for record in hourly {
        *totals.entry(record.season).or_default() += u64::from(record.total);
    }
    totals
}

/// Registered/casual sums and percentage shares over the daily subset.
///
/// The sums are taken through the per-date groupings, so they stay
/// consistent with the by-date views whatever the input looks like.
pub fn user_split(daily: &[DailyRecord]) -> UserSplit {
    let registered: u64 = registered_by_date(daily).values().sum();
    let casual: u64 = casual_by_date(daily).values().sum();
    let combined = registered + casual;
    let (registered_share, casual_share) = if combined == 0 {
        (None, None)
    } else {
        (
            Some(registered as f64 * 100.0 / combined as f64),
            Some(casual as f64 * 100.0 / combined as f64),
        )
    };
    UserSplit {
        registered,
        casual,
        registered_share,
        casual_share,
    }
}

/// Mean rentals per hourly row on holidays versus working days.
pub fn holiday_split(hourly: &[HourlyRecord]) -> HolidaySplit {
    let mut holiday_sum = 0u64;
    let mut holiday_rows = 0usize;
    let mut workday_sum = 0u64;
    let mut workday_rows = 0usize;
    for record in hourly {
        if record.holiday {
            holiday_sum += u64::from(record.total);
            holiday_rows += 1;
        } else {
            workday_sum += u64::from(record.total);
            workday_rows += 1;
        }
    }
    HolidaySplit {
        holiday_rows,
        workday_rows,
        holiday_mean: mean(holiday_sum, holiday_rows),
        workday_mean: mean(workday_sum, workday_rows),
    }
}

/// The (date, total) line-chart series of the daily subset, ascending.
pub fn daily_trend(daily: &[DailyRecord]) -> Vec<DateTotal> {
    daily
        .iter()
        .map(|r| DateTotal {
            date: r.date,
            total: u64::from(r.total),
        })
        .collect()
}

fn mean(sum: u64, rows: usize) -> Option<f64> {
    if rows == 0 {
        None
    } else {
        Some(sum as f64 / rows as f64)
    }
}

//! In-memory dataset layer for the bike share rental tables.
//!
//! This crate loads the two CSV tables (daily and hourly rentals) into
//! sorted vectors exactly once at startup. The resulting [`RentalData`] is
//! read-only for the lifetime of a reporting session: every view a report
//! needs is derived on the fly from these base tables, so nothing here is
//! ever mutated after load.
//!
//! # CSV Formats
//!
//! Both files are headered, with a fixed column order (see
//! [`bsr_core::records`]):
//!
//! - **Daily**: `dteday,season,holiday,casual,registered,cnt`
//! - **Hourly**: `dteday,hr,season,holiday,cnt`
//!
//! Loading performs all type coercion (calendar dates, season codes, hour
//! of day) and sorts both tables ascending: daily by date, hourly by
//! (date, hour). Consumers may rely on that order. A row that fails to
//! parse aborts the load with a [`LoadError`] naming the line; the tables
//! are assumed clean upstream, so nothing is skipped or repaired.

mod loader;

use bsr_core::date_range::DateRange;
use bsr_core::error::LoadError;
use bsr_core::records::{DailyRecord, HourlyRecord};
use std::path::Path;

/// The two rental tables, loaded once and immutable afterwards.
#[derive(Debug, Clone)]
pub struct RentalData {
    daily: Vec<DailyRecord>,
    hourly: Vec<HourlyRecord>,
}

impl RentalData {
    /// Parse both tables from CSV text.
    pub fn from_csv(daily_csv: &str, hourly_csv: &str) -> Result<Self, LoadError> {
        let mut daily = loader::parse_daily(daily_csv)?;
        let mut hourly = loader::parse_hourly(hourly_csv)?;
        daily.sort_by_key(|r| r.date);
        hourly.sort_by_key(|r| (r.date, r.hour));
        log::info!(
            "store: loaded {} daily and {} hourly records",
            daily.len(),
            hourly.len()
        );
        Ok(RentalData { daily, hourly })
    }

    /// Read and parse both tables from files on disk.
    pub fn from_files(daily_path: &Path, hourly_path: &Path) -> Result<Self, LoadError> {
        let daily_csv = std::fs::read_to_string(daily_path)?;
        let hourly_csv = std::fs::read_to_string(hourly_path)?;
        Self::from_csv(&daily_csv, &hourly_csv)
    }

    /// The daily table, ascending by date.
    pub fn daily(&self) -> &[DailyRecord] {
        &self.daily
    }

    /// The hourly table, ascending by (date, hour).
    pub fn hourly(&self) -> &[HourlyRecord] {
        &self.hourly
    }

    /// The [min, max] date span of the daily table, `None` when it is empty.
    ///
    /// Analyst range selections are bounded by this span.
    pub fn date_span(&self) -> Option<DateRange> {
        let start = self.daily.first()?.date;
        let end = self.daily.last()?.date;
        // the table is sorted, so start <= end
        Some(DateRange { start, end })
    }
}

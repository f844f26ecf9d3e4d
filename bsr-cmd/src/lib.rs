//! Command implementations for the bike share usage CLI.
//!
//! Every subcommand follows the same shape: load both rental tables,
//! resolve the analyst's date-range selection against the recorded span,
//! run the aggregations, render. Rendering is plain text on stdout, or
//! JSON where a charting front end is the consumer.

use anyhow::Context;
use bsr_store::RentalData;
use chrono::NaiveDate;
use clap::Subcommand;
use std::path::{Path, PathBuf};

pub mod range;
pub mod report;
pub mod tables;

#[derive(Subcommand)]
pub enum Command {
    /// Full usage report for a date range
    Report {
        /// Path to the daily rentals CSV
        #[arg(long)]
        daily: PathBuf,

        /// Path to the hourly rentals CSV
        #[arg(long)]
        hourly: PathBuf,

        /// First day of the range (YYYY-MM-DD); defaults to the earliest recorded day
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Last day of the range (YYYY-MM-DD); defaults to the latest recorded day
        #[arg(long)]
        end: Option<NaiveDate>,

        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Busiest hours of day for a date range
    PeakHours {
        /// Path to the daily rentals CSV
        #[arg(long)]
        daily: PathBuf,

        /// Path to the hourly rentals CSV
        #[arg(long)]
        hourly: PathBuf,

        /// First day of the range (YYYY-MM-DD); defaults to the earliest recorded day
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Last day of the range (YYYY-MM-DD); defaults to the latest recorded day
        #[arg(long)]
        end: Option<NaiveDate>,

        /// How many hours to list
        #[arg(long, default_value_t = 5)]
        count: usize,
    },

    /// Rentals per season for a date range
    Seasons {
        /// Path to the daily rentals CSV
        #[arg(long)]
        daily: PathBuf,

        /// Path to the hourly rentals CSV
        #[arg(long)]
        hourly: PathBuf,

        /// First day of the range (YYYY-MM-DD); defaults to the earliest recorded day
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Last day of the range (YYYY-MM-DD); defaults to the latest recorded day
        #[arg(long)]
        end: Option<NaiveDate>,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Report {
            daily,
            hourly,
            start,
            end,
            json,
        } => report::run_report(&daily, &hourly, start, end, json),
        Command::PeakHours {
            daily,
            hourly,
            start,
            end,
            count,
        } => tables::run_peak_hours(&daily, &hourly, start, end, count),
        Command::Seasons {
            daily,
            hourly,
            start,
            end,
        } => tables::run_seasons(&daily, &hourly, start, end),
    }
}

pub(crate) fn load_data(daily: &Path, hourly: &Path) -> anyhow::Result<RentalData> {
    RentalData::from_files(daily, hourly).with_context(|| {
        format!(
            "loading rental tables from {} and {}",
            daily.display(),
            hourly.display()
        )
    })
}

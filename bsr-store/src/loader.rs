//! CSV parsing for the rental tables.
//!
//! Thin wrappers over the `csv` reader: each function walks the records of
//! one table, converts them through the row types' `TryFrom<&StringRecord>`
//! impls, and turns the first failure into a [`LoadError`] carrying the
//! offending line number.

use bsr_core::error::LoadError;
use bsr_core::records::{DailyRecord, HourlyRecord};
use csv::{ReaderBuilder, StringRecord};

pub(crate) fn parse_daily(csv_data: &str) -> Result<Vec<DailyRecord>, LoadError> {
    parse_table(csv_data)
}

pub(crate) fn parse_hourly(csv_data: &str) -> Result<Vec<HourlyRecord>, LoadError> {
    parse_table(csv_data)
}

fn parse_table<R>(csv_data: &str) -> Result<Vec<R>, LoadError>
where
    for<'a> R: TryFrom<&'a StringRecord, Error = String>,
{
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_data.as_bytes());

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());
        let row = R::try_from(&record).map_err(|message| LoadError::Row { line, message })?;
        rows.push(row);
    }
    Ok(rows)
}

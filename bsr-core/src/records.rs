//! Row types for the two rental history tables.
//!
//! The daily table carries one row per calendar date, the hourly table one
//! row per (date, hour of day). Both are parsed positionally from headered
//! CSV with a fixed column order:
//!
//! - daily: `dteday,season,holiday,casual,registered,cnt`
//! - hourly: `dteday,hr,season,holiday,cnt`

use crate::dates::DATE_FORMAT;
use crate::season::Season;
use chrono::NaiveDate;
use csv::StringRecord;
use serde::Serialize;

/// Expected number of columns in a daily CSV row.
pub const DAILY_ROW_LENGTH: usize = 6;

/// Expected number of columns in an hourly CSV row.
pub const HOURLY_ROW_LENGTH: usize = 5;

/// Access to the calendar date of a table row.
///
/// Both tables are date-sorted after load, so anything keyed this way can be
/// range-filtered by sub-slicing.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

/// One row of the daily rentals table: aggregate counts for a calendar date.
///
/// `total` is assumed to equal `registered + casual`. The tables are
/// produced upstream and that invariant is a precondition of the input
/// data, not re-checked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub season: Season,
    pub holiday: bool,
    pub casual: u32,
    pub registered: u32,
    pub total: u32,
}

/// One row of the hourly rentals table: the total for one hour of one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourlyRecord {
    pub date: NaiveDate,
    /// Hour of day, 0-23. Validated on parse.
    pub hour: u8,
    pub season: Season,
    pub holiday: bool,
    pub total: u32,
}

impl Dated for DailyRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for HourlyRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl TryFrom<&StringRecord> for DailyRecord {
    type Error = String;

    fn try_from(record: &StringRecord) -> Result<Self, Self::Error> {
        if record.len() != DAILY_ROW_LENGTH {
            return Err(format!(
                "expected {} columns, found {}",
                DAILY_ROW_LENGTH,
                record.len()
            ));
        }
        Ok(DailyRecord {
            date: parse_date_field(record, 0, "dteday")?,
            season: parse_season_field(record, 1)?,
            holiday: parse_flag_field(record, 2, "holiday")?,
            casual: parse_count_field(record, 3, "casual")?,
            registered: parse_count_field(record, 4, "registered")?,
            total: parse_count_field(record, 5, "cnt")?,
        })
    }
}

impl TryFrom<&StringRecord> for HourlyRecord {
    type Error = String;

    fn try_from(record: &StringRecord) -> Result<Self, Self::Error> {
        if record.len() != HOURLY_ROW_LENGTH {
            return Err(format!(
                "expected {} columns, found {}",
                HOURLY_ROW_LENGTH,
                record.len()
            ));
        }
        Ok(HourlyRecord {
            date: parse_date_field(record, 0, "dteday")?,
            hour: parse_hour_field(record, 1)?,
            season: parse_season_field(record, 2)?,
            holiday: parse_flag_field(record, 3, "holiday")?,
            total: parse_count_field(record, 4, "cnt")?,
        })
    }
}

fn field<'a>(record: &'a StringRecord, index: usize, name: &str) -> Result<&'a str, String> {
    record
        .get(index)
        .map(str::trim)
        .ok_or_else(|| format!("missing {} column", name))
}

fn parse_date_field(record: &StringRecord, index: usize, name: &str) -> Result<NaiveDate, String> {
    let raw = field(record, index, name)?;
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|e| format!("{} '{}': {}", name, raw, e))
}

fn parse_count_field(record: &StringRecord, index: usize, name: &str) -> Result<u32, String> {
    let raw = field(record, index, name)?;
    raw.parse::<u32>()
        .map_err(|_| format!("{} '{}' is not a non-negative integer", name, raw))
}

fn parse_flag_field(record: &StringRecord, index: usize, name: &str) -> Result<bool, String> {
    match field(record, index, name)? {
        "0" => Ok(false),
        "1" => Ok(true),
        other => Err(format!("{} '{}' is not 0 or 1", name, other)),
    }
}

fn parse_season_field(record: &StringRecord, index: usize) -> Result<Season, String> {
    let raw = field(record, index, "season")?;
    let code = raw
        .parse::<u8>()
        .map_err(|_| format!("season '{}' is not a numeric code", raw))?;
    Season::try_from(code)
}

fn parse_hour_field(record: &StringRecord, index: usize) -> Result<u8, String> {
    let raw = field(record, index, "hr")?;
    let hour = raw
        .parse::<u8>()
        .map_err(|_| format!("hr '{}' is not a number", raw))?;
    if hour > 23 {
        return Err(format!("hr {} is out of range 0-23", hour));
    }
    Ok(hour)
}

#[cfg(test)]
mod tests {
    use super::{DailyRecord, Dated, HourlyRecord};
    use crate::season::Season;
    use chrono::NaiveDate;
    use csv::StringRecord;

    fn daily_row(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn test_daily_record_parses() {
        let record = daily_row(&["2011-01-01", "1", "0", "331", "654", "985"]);
        let row = DailyRecord::try_from(&record).unwrap();
        assert_eq!(row.date, NaiveDate::from_ymd_opt(2011, 1, 1).unwrap());
        assert_eq!(row.season, Season::Spring);
        assert!(!row.holiday);
        assert_eq!(row.casual, 331);
        assert_eq!(row.registered, 654);
        assert_eq!(row.total, 985);
        assert_eq!(row.date(), row.date);
    }

    #[test]
    fn test_hourly_record_parses() {
        let record = daily_row(&["2011-01-01", "17", "1", "1", "67"]);
        let row = HourlyRecord::try_from(&record).unwrap();
        assert_eq!(row.date, NaiveDate::from_ymd_opt(2011, 1, 1).unwrap());
        assert_eq!(row.hour, 17);
        assert_eq!(row.season, Season::Spring);
        assert!(row.holiday);
        assert_eq!(row.total, 67);
    }

    #[test]
    fn test_daily_record_rejects_short_row() {
        let record = daily_row(&["2011-01-01", "1", "0", "331", "654"]);
        let err = DailyRecord::try_from(&record).unwrap_err();
        assert!(err.contains("expected 6 columns"));
    }

    #[test]
    fn test_daily_record_rejects_bad_date() {
        let record = daily_row(&["01/01/2011", "1", "0", "331", "654", "985"]);
        let err = DailyRecord::try_from(&record).unwrap_err();
        assert!(err.contains("dteday"));
    }

    #[test]
    fn test_daily_record_rejects_bad_season() {
        let record = daily_row(&["2011-01-01", "7", "0", "331", "654", "985"]);
        let err = DailyRecord::try_from(&record).unwrap_err();
        assert!(err.contains("season code 7"));
    }

    #[test]
    fn test_daily_record_rejects_bad_flag() {
        let record = daily_row(&["2011-01-01", "1", "yes", "331", "654", "985"]);
        let err = DailyRecord::try_from(&record).unwrap_err();
        assert!(err.contains("holiday"));
    }

    #[test]
    fn test_daily_record_rejects_negative_count() {
        let record = daily_row(&["2011-01-01", "1", "0", "-3", "654", "985"]);
        let err = DailyRecord::try_from(&record).unwrap_err();
        assert!(err.contains("casual"));
    }

    #[test]
    fn test_hourly_record_rejects_out_of_range_hour() {
        let record = daily_row(&["2011-01-01", "24", "1", "0", "67"]);
        let err = HourlyRecord::try_from(&record).unwrap_err();
        assert!(err.contains("out of range"));
    }

    #[test]
    fn test_fields_are_trimmed() {
        let record = daily_row(&[" 2011-01-01 ", " 1", "0 ", " 331 ", "654", "985"]);
        let row = DailyRecord::try_from(&record).unwrap();
        assert_eq!(row.casual, 331);
        assert_eq!(row.season, Season::Spring);
    }
}

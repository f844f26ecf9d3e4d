//! Date-range resolution for analyst selections.

use anyhow::bail;
use bsr_core::date_range::DateRange;
use bsr_store::RentalData;
use chrono::NaiveDate;

/// Resolve the analyst's selection against the dataset span.
///
/// Missing endpoints default to the span's own. Both endpoints are then
/// clamped into the span, mirroring a date picker bounded by the recorded
/// min/max days. A selection with start after end is rejected here, before
/// any aggregation runs.
pub fn resolve(
    data: &RentalData,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> anyhow::Result<DateRange> {
    let span = match data.date_span() {
        Some(span) => span,
        None => bail!("the daily table has no records, nothing to report on"),
    };
    let start = start.unwrap_or(span.start);
    let end = end.unwrap_or(span.end);
    let selected = DateRange::new(start, end)?;
    Ok(selected.clamp_to(span))
}

#[cfg(test)]
mod tests {
    use super::resolve;
    use bsr_store::RentalData;
    use chrono::NaiveDate;

    const DAILY_CSV: &str = "\
dteday,season,holiday,casual,registered,cnt
2011-01-01,1,0,331,654,985
2011-01-02,1,0,131,670,801
2011-01-05,1,0,120,1229,1349
";

    const HOURLY_CSV: &str = "\
dteday,hr,season,holiday,cnt
2011-01-01,0,1,0,16
";

    fn data() -> RentalData {
        RentalData::from_csv(DAILY_CSV, HOURLY_CSV).unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn defaults_to_the_recorded_span() {
        let range = resolve(&data(), None, None).unwrap();
        assert_eq!(range.start, day(2011, 1, 1));
        assert_eq!(range.end, day(2011, 1, 5));
    }

    #[test]
    fn partial_selection_keeps_the_other_bound() {
        let range = resolve(&data(), Some(day(2011, 1, 2)), None).unwrap();
        assert_eq!(range.start, day(2011, 1, 2));
        assert_eq!(range.end, day(2011, 1, 5));
    }

    #[test]
    fn selection_is_clamped_into_the_span() {
        let range = resolve(&data(), Some(day(2010, 6, 1)), Some(day(2019, 1, 1))).unwrap();
        assert_eq!(range.start, day(2011, 1, 1));
        assert_eq!(range.end, day(2011, 1, 5));
    }

    #[test]
    fn inverted_selection_is_rejected() {
        let err = resolve(&data(), Some(day(2011, 1, 5)), Some(day(2011, 1, 1))).unwrap_err();
        assert!(err.to_string().contains("invalid date range"));
    }

    #[test]
    fn empty_daily_table_is_rejected() {
        let empty = RentalData::from_csv(
            "dteday,season,holiday,casual,registered,cnt\n",
            "dteday,hr,season,holiday,cnt\n",
        )
        .unwrap();
        let err = resolve(&empty, None, None).unwrap_err();
        assert!(err.to_string().contains("no records"));
    }
}

//! The `report` subcommand: the full dashboard for one date range.

use bsr_data::report::UsageReport;
use chrono::NaiveDate;
use log::info;
use std::path::Path;

pub fn run_report(
    daily: &Path,
    hourly: &Path,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    json: bool,
) -> anyhow::Result<()> {
    let data = crate::load_data(daily, hourly)?;
    let range = crate::range::resolve(&data, start, end)?;
    info!("reporting on {}", range);

    let report = UsageReport::for_range(data.daily(), data.hourly(), range);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&report));
    }
    Ok(())
}

/// Render the report as the text dashboard.
///
/// The daily trend and full hourly curve are chart series; they are carried
/// by the JSON form only and summarized here by the totals they roll up to.
pub fn render_text(report: &UsageReport) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("Bike share usage, {}", report.range));
    lines.push(String::new());

    lines.push("Totals".to_string());
    lines.push(format!("  rentals     {:>10}", report.total_rentals));
    lines.push(format!(
        "  registered  {:>10}  {}",
        report.users.registered,
        percent(report.users.registered_share)
    ));
    lines.push(format!(
        "  casual      {:>10}  {}",
        report.users.casual,
        percent(report.users.casual_share)
    ));
    lines.push(String::new());

    lines.push("Mean rentals per hour".to_string());
    lines.push(format!(
        "  holidays      {:>8}  ({} hours)",
        mean_text(report.holiday.holiday_mean),
        report.holiday.holiday_rows
    ));
    lines.push(format!(
        "  working days  {:>8}  ({} hours)",
        mean_text(report.holiday.workday_mean),
        report.holiday.workday_rows
    ));
    lines.push(String::new());

    lines.push("Rentals by season".to_string());
    if report.seasons.is_empty() {
        lines.push("  (no hourly records in range)".to_string());
    }
    for entry in &report.seasons {
        lines.push(format!(
            "  {:<8}    {:>10}",
            entry.season.label(),
            entry.total
        ));
    }
    lines.push(String::new());

    lines.push("Peak hours".to_string());
    if report.peak_hours.is_empty() {
        lines.push("  (no hourly records in range)".to_string());
    }
    for entry in &report.peak_hours {
        lines.push(format!("  {:02}:00       {:>10}", entry.hour, entry.total));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn percent(share: Option<f64>) -> String {
    match share {
        Some(value) => format!("({:.1}%)", value),
        None => "(n/a)".to_string(),
    }
}

fn mean_text(mean: Option<f64>) -> String {
    match mean {
        Some(value) => format!("{:.2}", value),
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::render_text;
    use bsr_core::date_range::DateRange;
    use bsr_data::report::UsageReport;
    use bsr_store::RentalData;
    use chrono::NaiveDate;

    const DAILY_CSV: &str = "\
dteday,season,holiday,casual,registered,cnt
2011-01-01,1,0,25,75,100
2011-01-02,1,1,50,150,200
";

    const HOURLY_CSV: &str = "\
dteday,hr,season,holiday,cnt
2011-01-01,8,1,0,40
2011-01-01,17,1,0,60
2011-01-02,8,1,1,90
2011-01-02,17,1,1,110
";

    fn sample_report() -> UsageReport {
        let data = RentalData::from_csv(DAILY_CSV, HOURLY_CSV).unwrap();
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2011, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2011, 1, 2).unwrap(),
        )
        .unwrap();
        UsageReport::for_range(data.daily(), data.hourly(), range)
    }

    fn line_tokens<'a>(text: &'a str, head: &str) -> Vec<&'a str> {
        text.lines()
            .find(|l| l.trim_start().starts_with(head))
            .unwrap_or_else(|| panic!("no line starting with '{}'", head))
            .split_whitespace()
            .collect()
    }

    #[test]
    fn text_report_carries_every_section() {
        let text = render_text(&sample_report());
        assert!(text.contains("Bike share usage, 2011-01-01 to 2011-01-02"));
        assert_eq!(line_tokens(&text, "rentals"), vec!["rentals", "300"]);
        assert_eq!(
            line_tokens(&text, "registered"),
            vec!["registered", "225", "(75.0%)"]
        );
        assert_eq!(
            line_tokens(&text, "casual"),
            vec!["casual", "75", "(25.0%)"]
        );
        assert_eq!(line_tokens(&text, "spring"), vec!["spring", "300"]);
        assert!(text.contains("Peak hours"));
        // hour 17 totals 170, hour 8 totals 130
        let pos_17 = text.find("17:00").unwrap();
        let pos_08 = text.find("08:00").unwrap();
        assert!(pos_17 < pos_08);
    }

    #[test]
    fn text_report_handles_empty_subsets() {
        let data = RentalData::from_csv(DAILY_CSV, HOURLY_CSV).unwrap();
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2012, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2012, 6, 30).unwrap(),
        )
        .unwrap();
        let report = UsageReport::for_range(data.daily(), data.hourly(), range);
        let text = render_text(&report);
        assert_eq!(line_tokens(&text, "rentals"), vec!["rentals", "0"]);
        assert!(text.contains("(n/a)"));
        assert!(text.contains("(no hourly records in range)"));
    }
}

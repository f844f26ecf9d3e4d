//! Single-table listings: `peak-hours` and `seasons`.

use bsr_data::aggregate;
use chrono::NaiveDate;
use log::info;
use std::path::Path;

pub fn run_peak_hours(
    daily: &Path,
    hourly: &Path,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    count: usize,
) -> anyhow::Result<()> {
    let data = crate::load_data(daily, hourly)?;
    let range = crate::range::resolve(&data, start, end)?;

    let rows = aggregate::filter_by_date(data.hourly(), range);
    let ranking = aggregate::hour_ranking(rows);
    let top = aggregate::top_hours(&ranking, count);
    info!("ranked {} hours for {}", ranking.len(), range);

    println!("Busiest hours, {}", range);
    for entry in &top {
        println!("  {:02}:00  {:>10}", entry.hour, entry.total);
    }
    Ok(())
}

pub fn run_seasons(
    daily: &Path,
    hourly: &Path,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> anyhow::Result<()> {
    let data = crate::load_data(daily, hourly)?;
    let range = crate::range::resolve(&data, start, end)?;

    let rows = aggregate::filter_by_date(data.hourly(), range);
    let totals = aggregate::season_totals(rows);
    info!("summed {} seasons for {}", totals.len(), range);

    println!("Rentals by season, {}", range);
    for (season, total) in &totals {
        println!("  {:<8}{:>10}", season.label(), total);
    }
    Ok(())
}

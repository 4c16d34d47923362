//! Single-value lookups: date <-> epiweek, weeks per year, days of a week.

use anyhow::Result;
use tracing::info;

use epiweek_core::{EpiWeek, WeekSystem, week_count};

use crate::cli::{DatesArgs, FromDateArgs, ToDateArgs, WeeksArgs};
use crate::convert;

/// Prints the epiweek containing a date (today if none given).
pub fn from_date(args: FromDateArgs, system: WeekSystem) -> Result<()> {
    let week = match args.date.as_deref() {
        Some(s) => EpiWeek::from_date(convert::parse_date(s)?, system)?,
        None => EpiWeek::today(system)?,
    };
    info!(%system, %week, "resolved date");
    println!(
        "year={} week={} day={} compact={}",
        week.year(),
        week.week(),
        week.day(),
        week
    );
    Ok(())
}

/// Prints the calendar date of an epiweek and day.
pub fn to_date(args: ToDateArgs, system: WeekSystem) -> Result<()> {
    let mut week = convert::parse_week(&args.week, system)?;
    week.set_day(args.day);
    println!("{}", week.to_date()?);
    Ok(())
}

/// Prints the number of weeks in an epi-year.
pub fn weeks(args: WeeksArgs, system: WeekSystem) -> Result<()> {
    println!("{}", week_count(args.year, system)?);
    Ok(())
}

/// Prints the seven dates of an epiweek, one per line.
pub fn dates(args: DatesArgs, system: WeekSystem) -> Result<()> {
    let week = convert::parse_week(&args.week, system)?;
    for date in week.iter_dates()? {
        println!("{date}");
    }
    Ok(())
}

//! First day of week 1 for an epi-year.

use chrono::{Datelike, NaiveDate, TimeDelta};

use crate::error::EpiweekError;
use crate::system::WeekSystem;

/// Returns the calendar date of day 1 of week 1 of `year` under `system`.
///
/// - MMWR: the Sunday opening the first week with at least four days in
///   `year`. If January 1 falls on Thursday..Saturday the week containing it
///   belongs to the previous year, so week 1 starts the following Sunday.
/// - ISO: the Monday of the week containing January 4.
///
/// # Errors
///
/// Returns [`EpiweekError::DateOutOfRange`] if January of `year` cannot be
/// represented by chrono.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use epiweek_core::{WeekSystem, year_start};
///
/// let start = year_start(2016, WeekSystem::Mmwr).unwrap();
/// assert_eq!(start, NaiveDate::from_ymd_opt(2016, 1, 3).unwrap());
/// ```
pub fn year_start(year: i32, system: WeekSystem) -> Result<NaiveDate, EpiweekError> {
    let out_of_range = || EpiweekError::DateOutOfRange { year: year.into() };
    match system {
        WeekSystem::Mmwr => {
            let jan1 = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(out_of_range)?;
            // Sunday = 0 .. Saturday = 6
            let d = i64::from(jan1.weekday().num_days_from_sunday());
            let offset = if d > 3 { 7 - d } else { -d };
            add_days(jan1, offset).ok_or_else(out_of_range)
        }
        WeekSystem::Iso => {
            let jan4 = NaiveDate::from_ymd_opt(year, 1, 4).ok_or_else(out_of_range)?;
            let back = i64::from(jan4.weekday().num_days_from_monday());
            add_days(jan4, -back).ok_or_else(out_of_range)
        }
    }
}

/// Adds a signed number of days, returning `None` outside chrono's range.
pub(crate) fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    TimeDelta::try_days(days).and_then(|delta| date.checked_add_signed(delta))
}

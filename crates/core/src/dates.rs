//! Iteration over the days of a week and the weeks of an epi-year.

use std::iter::FusedIterator;

use chrono::NaiveDate;

use crate::error::EpiweekError;
use crate::system::WeekSystem;
use crate::week::EpiWeek;
use crate::week_count::week_count;

/// The seven calendar dates of one week, first weekday first.
///
/// Created by [`EpiWeek::iter_dates`]. Cloning yields an independent cursor,
/// and calling `iter_dates` again restarts from the first day.
#[derive(Debug, Clone)]
pub struct WeekDates {
    next: NaiveDate,
    remaining: u8,
}

impl Iterator for WeekDates {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next;
        self.remaining -= 1;
        if self.remaining > 0 {
            // The last day was checked when the iterator was built.
            if let Some(succ) = current.succ_opt() {
                self.next = succ;
            }
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for WeekDates {}

impl FusedIterator for WeekDates {}

/// Every week of one epi-year, in order, each with `day = 1`.
///
/// Created by [`iter_weeks`].
#[derive(Debug, Clone)]
pub struct YearWeeks {
    year: i32,
    system: WeekSystem,
    next_week: i32,
    n_weeks: i32,
}

impl Iterator for YearWeeks {
    type Item = EpiWeek;

    fn next(&mut self) -> Option<EpiWeek> {
        if self.next_week > self.n_weeks {
            return None;
        }
        let week = EpiWeek::new(self.year, self.next_week, self.system);
        self.next_week += 1;
        Some(week)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.n_weeks - self.next_week + 1).max(0) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for YearWeeks {}

impl FusedIterator for YearWeeks {}

impl EpiWeek {
    /// The seven dates of `(year, week)`, independent of `day`.
    ///
    /// MMWR weeks run Sunday..Saturday, ISO weeks Monday..Sunday.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{Datelike, Weekday};
    /// use epiweek_core::{EpiWeek, WeekSystem};
    ///
    /// let days: Vec<_> = EpiWeek::new(2024, 1, WeekSystem::Iso).iter_dates().unwrap().collect();
    /// assert_eq!(days.len(), 7);
    /// assert_eq!(days[0].weekday(), Weekday::Mon);
    /// ```
    pub fn iter_dates(&self) -> Result<WeekDates, EpiweekError> {
        let start = self.start_of_week()?;
        // Fails here rather than mid-iteration if the week runs off chrono's range.
        self.end_date()?;
        Ok(WeekDates {
            next: start,
            remaining: 7,
        })
    }
}

/// Iterates every week (52 or 53) of `year` under `system`.
///
/// # Errors
///
/// Returns [`EpiweekError::DateOutOfRange`] if the week count of `year`
/// cannot be computed.
pub fn iter_weeks(year: i32, system: WeekSystem) -> Result<YearWeeks, EpiweekError> {
    let n_weeks = i32::from(week_count(year, system)?);
    Ok(YearWeeks {
        year,
        system,
        next_week: 1,
        n_weeks,
    })
}

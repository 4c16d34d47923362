//! Whole-week differences and offsets across epi-year boundaries.

use tracing::trace;

use crate::error::EpiweekError;
use crate::week::EpiWeek;
use crate::week_count::week_count;

impl EpiWeek {
    /// Signed number of whole weeks from `other` to `self` (`self - other`),
    /// ignoring `day`.
    ///
    /// Weeks-per-year are looked up in `self`'s system; the result is only
    /// meaningful when both weeks share a system.
    ///
    /// # Examples
    ///
    /// ```
    /// use epiweek_core::EpiWeek;
    ///
    /// let diff = EpiWeek::mmwr(2016, 52).diff_week(&EpiWeek::mmwr(2016, 3)).unwrap();
    /// assert_eq!(diff, 49);
    /// ```
    pub fn diff_week(&self, other: &EpiWeek) -> Result<i32, EpiweekError> {
        let overflow = || EpiweekError::DateOutOfRange {
            year: self.year().into(),
        };
        if self.year() == other.year() {
            let diff = i64::from(self.week()) - i64::from(other.week());
            return i32::try_from(diff).map_err(|_| overflow());
        }
        let system = self.system();
        let (low, high) = if self.year() < other.year() {
            (self, other)
        } else {
            (other, self)
        };

        let mut diff = i64::from(high.week()) + i64::from(week_count(low.year(), system)?)
            - i64::from(low.week());
        for year in (low.year() + 1)..high.year() {
            diff += i64::from(week_count(year, system)?);
        }

        let diff = if self.year() < other.year() { -diff } else { diff };
        i32::try_from(diff).map_err(|_| overflow())
    }

    /// Moves this week by `delta` weeks in place, rolling across epi-years.
    /// `day` is unchanged. On error `self` is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use epiweek_core::EpiWeek;
    ///
    /// let mut w = EpiWeek::with_day(2016, 52, 3);
    /// w.apply_week_diff(56).unwrap();
    /// assert_eq!((w.year(), w.week(), w.day()), (2018, 4, 3));
    /// ```
    pub fn apply_week_diff(&mut self, delta: i32) -> Result<(), EpiweekError> {
        *self = self.shifted(delta)?;
        Ok(())
    }

    /// Returns a copy moved by `delta` weeks.
    ///
    /// A week far outside its year is walked year by year, so an absurd
    /// week number ends in [`EpiweekError::DateOutOfRange`] once the walk
    /// leaves chrono's range.
    pub fn shifted(&self, delta: i32) -> Result<EpiWeek, EpiweekError> {
        let mut out = *self;
        // Widened so an unvalidated week plus delta cannot overflow.
        let mut week = i64::from(out.week());
        let mut remaining = i64::from(delta);
        loop {
            let target = week + remaining;
            let n_weeks = i64::from(out.n_weeks()?);
            if target > n_weeks {
                // Step to week 1 of the next year.
                remaining -= n_weeks - week + 1;
                out.set_year(step_year(out.year(), 1)?);
                week = 1;
                trace!(year = out.year(), remaining, "rolled into next epi-year");
            } else if target <= 0 {
                // Step to the last week of the previous year.
                remaining += week;
                out.set_year(step_year(out.year(), -1)?);
                week = i64::from(out.n_weeks()?);
                trace!(year = out.year(), remaining, "rolled into previous epi-year");
            } else {
                // 1..=53 here.
                out.set_week(target as i32);
                return Ok(out);
            }
        }
    }
}

fn step_year(year: i32, by: i32) -> Result<i32, EpiweekError> {
    year.checked_add(by).ok_or(EpiweekError::DateOutOfRange {
        year: i64::from(year) + i64::from(by),
    })
}

//! The epiweek value type: conversions, compact form and comparison.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::EpiweekError;
use crate::options::EpiWeekOptions;
use crate::system::WeekSystem;
use crate::week_count::week_count;
use crate::year_start::{add_days, year_start};

/// A week of an epi-year, plus a day within it, in a fixed numbering system.
///
/// `year`, `week` and `day` can be changed after construction; `system`
/// cannot. None of them are range-checked: a `week` past the end of the year
/// simply maps to a date past the end of the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EpiWeek {
    year: i32,
    week: i32,
    day: u8,
    system: WeekSystem,
}

impl EpiWeek {
    /// Creates a week with `day = 1`.
    pub fn new(year: i32, week: i32, system: WeekSystem) -> Self {
        Self::new_with(year, week, 1, system)
    }

    /// Canonical constructor; every other constructor funnels through here.
    pub fn new_with(year: i32, week: i32, day: u8, system: WeekSystem) -> Self {
        Self {
            year,
            week,
            day,
            system,
        }
    }

    /// Creates an MMWR week with `day = 1`.
    pub fn mmwr(year: i32, week: i32) -> Self {
        Self::new(year, week, WeekSystem::Mmwr)
    }

    /// Creates an MMWR week with an explicit day (Sunday = 1 .. Saturday = 7).
    pub fn with_day(year: i32, week: i32, day: u8) -> Self {
        Self::new_with(year, week, day, WeekSystem::Mmwr)
    }

    /// Creates a week from [`EpiWeekOptions`].
    pub fn with_options(year: i32, week: i32, options: EpiWeekOptions) -> Self {
        Self::new_with(year, week, options.day(), options.system())
    }

    /// Creates the week containing `date`.
    ///
    /// # Errors
    ///
    /// Returns [`EpiweekError::DateOutOfRange`] if `date` lies within a year
    /// of chrono's representable limits.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use epiweek_core::{EpiWeek, WeekSystem};
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
    /// let week = EpiWeek::from_date(date, WeekSystem::Iso).unwrap();
    /// assert_eq!((week.year(), week.week(), week.day()), (2025, 1, 2));
    /// ```
    pub fn from_date(date: NaiveDate, system: WeekSystem) -> Result<Self, EpiweekError> {
        let (year, week, day) = resolve_date(date, system)?;
        Ok(Self::new_with(year, week, day, system))
    }

    /// Creates the week containing today's local date.
    pub fn today(system: WeekSystem) -> Result<Self, EpiweekError> {
        Self::from_date(chrono::Local::now().date_naive(), system)
    }

    /// Creates a week from its compact `yyyyww` code, with `day = 1`.
    ///
    /// The code is split literally: `202560` becomes week 60 of 2025.
    ///
    /// # Errors
    ///
    /// Returns [`EpiweekError::DateOutOfRange`] if the year part does not fit
    /// an `i32`.
    pub fn from_compact(code: i64, system: WeekSystem) -> Result<Self, EpiweekError> {
        let (year, week) = split_compact(code)?;
        Ok(Self::new(year, week, system))
    }

    /// Re-points this week at the one containing `date`. The system is kept.
    pub fn update_from_date(&mut self, date: NaiveDate) -> Result<(), EpiweekError> {
        let (year, week, day) = resolve_date(date, self.system)?;
        self.year = year;
        self.week = week;
        self.day = day;
        Ok(())
    }

    /// Re-points this week at a compact `yyyyww` code and resets `day` to 1.
    /// The system is kept.
    pub fn set_compact(&mut self, code: i64) -> Result<(), EpiweekError> {
        let (year, week) = split_compact(code)?;
        self.year = year;
        self.week = week;
        self.day = 1;
        Ok(())
    }

    /// Returns the epi-year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the week number.
    pub fn week(&self) -> i32 {
        self.week
    }

    /// Returns the day of week (1..=7 in this week's system).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Returns the numbering system.
    pub fn system(&self) -> WeekSystem {
        self.system
    }

    /// Sets the epi-year.
    pub fn set_year(&mut self, year: i32) {
        self.year = year;
    }

    /// Sets the week number.
    pub fn set_week(&mut self, week: i32) {
        self.week = week;
    }

    /// Sets the day of week.
    pub fn set_day(&mut self, day: u8) {
        self.day = day;
    }

    /// Calendar date of day 1 of week 1 of this epi-year.
    pub fn start_date(&self) -> Result<NaiveDate, EpiweekError> {
        year_start(self.year, self.system)
    }

    /// Number of weeks (52 or 53) in this epi-year.
    pub fn n_weeks(&self) -> Result<u8, EpiweekError> {
        week_count(self.year, self.system)
    }

    /// Calendar date of `(year, week, day)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use epiweek_core::EpiWeek;
    ///
    /// let date = EpiWeek::mmwr(2016, 48).to_date().unwrap();
    /// assert_eq!(date, NaiveDate::from_ymd_opt(2016, 11, 27).unwrap());
    /// ```
    pub fn to_date(&self) -> Result<NaiveDate, EpiweekError> {
        self.offset_from_start(i64::from(self.day) - 1)
    }

    /// First calendar day of `(year, week)`, ignoring `day`.
    pub fn start_of_week(&self) -> Result<NaiveDate, EpiweekError> {
        self.offset_from_start(0)
    }

    /// Last calendar day of `(year, week)`, ignoring `day`.
    pub fn end_date(&self) -> Result<NaiveDate, EpiweekError> {
        self.offset_from_start(6)
    }

    /// Returns `true` if `date` falls within `(year, week)`.
    pub fn contains(&self, date: NaiveDate) -> Result<bool, EpiweekError> {
        let start = self.start_of_week()?;
        Ok((0..7).contains(&(date - start).num_days()))
    }

    /// Compact `yyyyww` code. Drops `day` and `system`.
    pub fn to_compact(&self) -> i64 {
        i64::from(self.year) * 100 + i64::from(self.week)
    }

    /// Orders two weeks in time.
    ///
    /// Weeks of the same system compare by `(year, week, day)`; weeks of
    /// different systems compare by their calendar dates.
    pub fn cmp_week(&self, other: &EpiWeek) -> Result<Ordering, EpiweekError> {
        if self.system != other.system {
            return Ok(self.to_date()?.cmp(&other.to_date()?));
        }
        Ok((self.year, self.week, self.day).cmp(&(other.year, other.week, other.day)))
    }

    /// Returns `true` if this week is strictly earlier than `other`.
    pub fn is_before(&self, other: &EpiWeek) -> Result<bool, EpiweekError> {
        Ok(self.cmp_week(other)? == Ordering::Less)
    }

    /// Returns `true` if this week is strictly later than `other`.
    pub fn is_after(&self, other: &EpiWeek) -> Result<bool, EpiweekError> {
        Ok(self.cmp_week(other)? == Ordering::Greater)
    }

    fn offset_from_start(&self, day_offset: i64) -> Result<NaiveDate, EpiweekError> {
        let start = self.start_date()?;
        let days = 7 * (i64::from(self.week) - 1) + day_offset;
        add_days(start, days).ok_or(EpiweekError::DateOutOfRange {
            year: self.year.into(),
        })
    }
}

/// Picks the epi-year whose start is the latest one not after `date` and
/// returns `(year, week, day)` for it.
///
/// A date in late December or early January can belong to the epi-year
/// before or after its calendar year, so the starts of the three surrounding
/// years are all considered.
#[tracing::instrument(level = "trace", ret, err)]
fn resolve_date(date: NaiveDate, system: WeekSystem) -> Result<(i32, i32, u8), EpiweekError> {
    let y = date.year();
    let candidates = [
        year_start(y - 1, system)?,
        year_start(y, system)?,
        year_start(y + 1, system)?,
    ];
    let offsets = candidates.map(|start| (date - start).num_days());

    let start = if offsets[1] < 0 {
        candidates[0]
    } else if offsets[2] >= 0 {
        candidates[2]
    } else {
        candidates[1]
    };

    // A week past the start always lies inside the epi-year being labelled.
    let year = add_days(start, 7)
        .ok_or(EpiweekError::DateOutOfRange { year: y.into() })?
        .year();
    let week = (date - start).num_days().div_euclid(7) + 1;
    let day = system.day_number(date.weekday());
    Ok((year, week as i32, day))
}

fn split_compact(code: i64) -> Result<(i32, i32), EpiweekError> {
    let year = code.div_euclid(100);
    let week = code.rem_euclid(100) as i32;
    let year = i32::try_from(year).map_err(|_| EpiweekError::DateOutOfRange { year })?;
    Ok((year, week))
}

/// Renders the compact form with a two-digit week, e.g. `202503`.
impl fmt::Display for EpiWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:02}", self.year, self.week)
    }
}

/// Parses a `yyyyww` string as an MMWR week with `day = 1`.
impl FromStr for EpiWeek {
    type Err = EpiweekError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || EpiweekError::InvalidCompact {
            input: s.to_string(),
        };
        if s.len() < 3 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let code: i64 = s.parse().map_err(|_| invalid())?;
        Self::from_compact(code, WeekSystem::Mmwr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn constructors_agree() {
        let canonical = EpiWeek::new_with(2016, 52, 3, WeekSystem::Mmwr);
        assert_eq!(EpiWeek::with_day(2016, 52, 3), canonical);
        let opts = EpiWeekOptions::new().with_day(3);
        assert_eq!(EpiWeek::with_options(2016, 52, opts), canonical);
        assert_eq!(EpiWeek::mmwr(2016, 52), EpiWeek::new(2016, 52, WeekSystem::Mmwr));
    }

    #[test]
    fn new_defaults_day_one() {
        let w = EpiWeek::new(2024, 10, WeekSystem::Iso);
        assert_eq!(w.day(), 1);
        assert_eq!(w.system(), WeekSystem::Iso);
    }

    #[test]
    fn setters() {
        let mut w = EpiWeek::mmwr(2016, 1);
        w.set_year(2017);
        w.set_week(5);
        w.set_day(6);
        assert_eq!(w, EpiWeek::with_day(2017, 5, 6));
    }

    #[test]
    fn start_date_mmwr_2016() {
        assert_eq!(EpiWeek::mmwr(2016, 48).start_date().unwrap(), ymd(2016, 1, 3));
    }

    #[test]
    fn to_date_mmwr_2016_48() {
        assert_eq!(EpiWeek::mmwr(2016, 48).to_date().unwrap(), ymd(2016, 11, 27));
    }

    #[test]
    fn to_date_uses_day() {
        let w = EpiWeek::with_day(2016, 48, 7);
        assert_eq!(w.to_date().unwrap(), ymd(2016, 12, 3));
    }

    #[test]
    fn to_date_out_of_range_week_is_literal() {
        // 2016 has 52 MMWR weeks; week 53 is week 1 of 2017.
        let w = EpiWeek::mmwr(2016, 53);
        assert_eq!(w.to_date().unwrap(), EpiWeek::mmwr(2017, 1).to_date().unwrap());
    }

    #[test]
    fn update_from_date_on_seeded_week() {
        let mut w = EpiWeek::mmwr(2016, 1);
        w.update_from_date(ymd(2016, 12, 27)).unwrap();
        assert_eq!((w.year(), w.week(), w.day()), (2016, 52, 3));
    }

    #[test]
    fn update_from_date_keeps_system() {
        let mut w = EpiWeek::new(1999, 7, WeekSystem::Iso);
        w.update_from_date(ymd(2024, 1, 10)).unwrap();
        assert_eq!(w, EpiWeek::new_with(2024, 2, 3, WeekSystem::Iso));
    }

    #[test]
    fn from_date_belongs_to_previous_epi_year() {
        // 2016-01-01 (Friday) is before MMWR 2016 week 1 (Jan 3).
        let w = EpiWeek::from_date(ymd(2016, 1, 1), WeekSystem::Mmwr).unwrap();
        assert_eq!((w.year(), w.week(), w.day()), (2015, 52, 6));
    }

    #[test]
    fn from_date_belongs_to_next_epi_year() {
        // MMWR 2018 week 1 opens on 2017-12-31.
        let w = EpiWeek::from_date(ymd(2017, 12, 31), WeekSystem::Mmwr).unwrap();
        assert_eq!((w.year(), w.week(), w.day()), (2018, 1, 1));
    }

    #[test]
    fn from_date_iso_cross_year() {
        let w = EpiWeek::from_date(ymd(2024, 12, 31), WeekSystem::Iso).unwrap();
        assert_eq!((w.year(), w.week(), w.day()), (2025, 1, 2));
    }

    #[test]
    fn compact_roundtrip_drops_day() {
        let w = EpiWeek::with_day(2016, 52, 4);
        assert_eq!(w.to_compact(), 201652);
        let back = EpiWeek::from_compact(w.to_compact(), WeekSystem::Mmwr).unwrap();
        assert_eq!(back, EpiWeek::mmwr(2016, 52));
    }

    #[test]
    fn set_compact_resets_day_keeps_system() {
        let mut w = EpiWeek::new_with(2000, 1, 5, WeekSystem::Iso);
        w.set_compact(202503).unwrap();
        assert_eq!(w, EpiWeek::new(2025, 3, WeekSystem::Iso));
    }

    #[test]
    fn from_compact_is_literal() {
        let w = EpiWeek::from_compact(202560, WeekSystem::Mmwr).unwrap();
        assert_eq!((w.year(), w.week()), (2025, 60));
    }

    #[test]
    fn from_compact_year_overflow() {
        assert!(matches!(
            EpiWeek::from_compact(i64::MAX, WeekSystem::Mmwr),
            Err(EpiweekError::DateOutOfRange { .. })
        ));
    }

    #[test]
    fn display_pads_week() {
        assert_eq!(EpiWeek::mmwr(2025, 3).to_string(), "202503");
        assert_eq!(EpiWeek::mmwr(2025, 52).to_string(), "202552");
    }

    #[test]
    fn parse_compact_string() {
        let w: EpiWeek = "202503".parse().unwrap();
        assert_eq!(w, EpiWeek::mmwr(2025, 3));
    }

    #[test]
    fn parse_rejects_garbage() {
        for input in ["", "12", "2025W03", "-202503", "20 503"] {
            assert!(
                matches!(
                    input.parse::<EpiWeek>(),
                    Err(EpiweekError::InvalidCompact { .. })
                ),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn end_date_and_contains() {
        let w = EpiWeek::with_day(2016, 48, 5);
        assert_eq!(w.start_of_week().unwrap(), ymd(2016, 11, 27));
        assert_eq!(w.end_date().unwrap(), ymd(2016, 12, 3));
        assert!(w.contains(ymd(2016, 11, 27)).unwrap());
        assert!(w.contains(ymd(2016, 12, 3)).unwrap());
        assert!(!w.contains(ymd(2016, 11, 26)).unwrap());
        assert!(!w.contains(ymd(2016, 12, 4)).unwrap());
    }

    #[test]
    fn equality_is_exact() {
        let a = EpiWeek::new(2024, 1, WeekSystem::Mmwr);
        let b = EpiWeek::new(2024, 1, WeekSystem::Iso);
        assert_ne!(a, b);
        assert_ne!(a, EpiWeek::with_day(2024, 1, 2));
        assert_eq!(a, EpiWeek::mmwr(2024, 1));
    }

    #[test]
    fn ordering_same_system() {
        let a = EpiWeek::with_day(2016, 52, 7);
        let b = EpiWeek::with_day(2017, 1, 1);
        assert!(a.is_before(&b).unwrap());
        assert!(b.is_after(&a).unwrap());
        assert!(!a.is_before(&a).unwrap());
        assert!(!a.is_after(&a).unwrap());
        assert!(EpiWeek::with_day(2017, 1, 1).is_before(&EpiWeek::with_day(2017, 1, 2)).unwrap());
    }

    #[test]
    fn ordering_across_systems_uses_dates() {
        let mmwr = EpiWeek::new(2024, 1, WeekSystem::Mmwr);
        let iso = EpiWeek::new(2024, 1, WeekSystem::Iso);
        assert!(mmwr.is_before(&iso).unwrap());
        assert!(iso.is_after(&mmwr).unwrap());
    }

    #[test]
    fn same_instant_across_systems_is_neither_before_nor_after() {
        // MMWR 2024 week 1 day 2 is Monday 2024-01-01, same as ISO 2024 week 1 day 1.
        let mmwr = EpiWeek::new_with(2024, 1, 2, WeekSystem::Mmwr);
        let iso = EpiWeek::new(2024, 1, WeekSystem::Iso);
        assert_eq!(mmwr.cmp_week(&iso).unwrap(), Ordering::Equal);
        assert!(!mmwr.is_before(&iso).unwrap());
        assert!(!mmwr.is_after(&iso).unwrap());
        assert_ne!(mmwr, iso);
    }

    #[test]
    fn serde_shape() {
        let w = EpiWeek::new_with(2025, 3, 2, WeekSystem::Iso);
        let json = serde_json::to_string(&w).unwrap();
        assert_eq!(json, r#"{"year":2025,"week":3,"day":2,"system":"iso"}"#);
        let back: EpiWeek = serde_json::from_str(&json).unwrap();
        assert_eq!(back, w);
    }
}

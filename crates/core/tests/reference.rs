//! Published MMWR and ISO calendars for 2014..=2030.

use chrono::NaiveDate;
use epiweek_core::{EpiWeek, WeekCountCache, WeekSystem, week_count, year_start};

/// (year, MMWR week 1 start, MMWR weeks, ISO week 1 start, ISO weeks)
#[rustfmt::skip]
const CALENDAR: &[(i32, (i32, u32, u32), u8, (i32, u32, u32), u8)] = &[
    (2014, (2013, 12, 29), 53, (2013, 12, 30), 52),
    (2015, (2015, 1, 4), 52, (2014, 12, 29), 53),
    (2016, (2016, 1, 3), 52, (2016, 1, 4), 52),
    (2017, (2017, 1, 1), 52, (2017, 1, 2), 52),
    (2018, (2017, 12, 31), 52, (2018, 1, 1), 52),
    (2019, (2018, 12, 30), 52, (2018, 12, 31), 52),
    (2020, (2019, 12, 29), 53, (2019, 12, 30), 53),
    (2021, (2021, 1, 3), 52, (2021, 1, 4), 52),
    (2022, (2022, 1, 2), 52, (2022, 1, 3), 52),
    (2023, (2023, 1, 1), 52, (2023, 1, 2), 52),
    (2024, (2023, 12, 31), 52, (2024, 1, 1), 52),
    (2025, (2024, 12, 29), 53, (2024, 12, 30), 52),
    (2026, (2026, 1, 4), 52, (2025, 12, 29), 53),
    (2027, (2027, 1, 3), 52, (2027, 1, 4), 52),
    (2028, (2028, 1, 2), 52, (2028, 1, 3), 52),
    (2029, (2028, 12, 31), 52, (2029, 1, 1), 52),
    (2030, (2029, 12, 30), 52, (2029, 12, 31), 52),
];

fn ymd((y, m, d): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn week_one_starts() {
    for &(year, mmwr_start, _, iso_start, _) in CALENDAR {
        assert_eq!(year_start(year, WeekSystem::Mmwr).unwrap(), ymd(mmwr_start), "MMWR {year}");
        assert_eq!(year_start(year, WeekSystem::Iso).unwrap(), ymd(iso_start), "ISO {year}");
    }
}

#[test]
fn weeks_per_year() {
    for &(year, _, mmwr_weeks, _, iso_weeks) in CALENDAR {
        assert_eq!(week_count(year, WeekSystem::Mmwr).unwrap(), mmwr_weeks, "MMWR {year}");
        assert_eq!(week_count(year, WeekSystem::Iso).unwrap(), iso_weeks, "ISO {year}");
    }
}

#[test]
fn last_week_ends_day_before_next_start() {
    for &(year, _, mmwr_weeks, _, _) in CALENDAR {
        let last = EpiWeek::mmwr(year, i32::from(mmwr_weeks));
        let next_start = year_start(year + 1, WeekSystem::Mmwr).unwrap();
        assert_eq!(last.end_date().unwrap().succ_opt().unwrap(), next_start, "{year}");
    }
}

#[test]
fn fresh_cache_gives_same_answers() {
    let cache = WeekCountCache::new();
    for &(year, _, mmwr_weeks, _, iso_weeks) in CALENDAR {
        assert_eq!(cache.week_count(year, WeekSystem::Mmwr).unwrap(), mmwr_weeks);
        assert_eq!(cache.week_count(year, WeekSystem::Iso).unwrap(), iso_weeks);
    }
    assert_eq!(cache.len(), CALENDAR.len() * 2);
}

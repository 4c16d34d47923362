use chrono::{Datelike, NaiveDate};
use epiweek_core::{EpiWeek, WeekSystem, iter_weeks};

#[test]
fn seven_consecutive_days_starting_on_first_weekday() {
    for system in [WeekSystem::Mmwr, WeekSystem::Iso] {
        for year in 2010..=2035 {
            for week in iter_weeks(year, system).unwrap() {
                let days: Vec<NaiveDate> = week.iter_dates().unwrap().collect();
                assert_eq!(days.len(), 7);
                assert_eq!(days[0].weekday(), system.first_weekday(), "{system} {week}");
                for pair in days.windows(2) {
                    assert_eq!((pair[1] - pair[0]).num_days(), 1);
                }
                assert_eq!(days[0], week.start_of_week().unwrap());
                assert_eq!(days[6], week.end_date().unwrap());
            }
        }
    }
}

#[test]
fn days_map_back_to_their_week() {
    let week = EpiWeek::with_day(2020, 53, 4);
    for (i, date) in week.iter_dates().unwrap().enumerate() {
        let back = EpiWeek::from_date(date, WeekSystem::Mmwr).unwrap();
        assert_eq!((back.year(), back.week()), (2020, 53));
        assert_eq!(usize::from(back.day()), i + 1);
    }
}

#[test]
fn year_weeks_tile_the_calendar() {
    for system in [WeekSystem::Mmwr, WeekSystem::Iso] {
        let mut expected = EpiWeek::new(2015, 1, system).start_of_week().unwrap();
        for year in 2015..=2030 {
            for week in iter_weeks(year, system).unwrap() {
                for date in week.iter_dates().unwrap() {
                    assert_eq!(date, expected, "{system} {week}");
                    expected = expected.succ_opt().unwrap();
                }
            }
        }
        assert_eq!(expected, EpiWeek::new(2031, 1, system).start_of_week().unwrap());
    }
}

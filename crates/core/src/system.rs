//! Week numbering systems.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::EpiweekError;

/// The convention used to number weeks and days within an epi-year.
///
/// Both systems place week 1 on the first week holding at least four days of
/// the new calendar year; they differ in which weekday opens a week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekSystem {
    /// CDC Morbidity and Mortality Weekly Report weeks, Sunday through Saturday.
    #[default]
    #[serde(alias = "cdc")]
    Mmwr,
    /// ISO-8601 weeks, Monday through Sunday.
    Iso,
}

impl WeekSystem {
    /// Returns the weekday that opens a week in this system.
    pub fn first_weekday(self) -> Weekday {
        match self {
            WeekSystem::Mmwr => Weekday::Sun,
            WeekSystem::Iso => Weekday::Mon,
        }
    }

    /// Maps a weekday to its day number (1..=7) in this system.
    ///
    /// MMWR: Sunday = 1 .. Saturday = 7. ISO: Monday = 1 .. Sunday = 7.
    pub fn day_number(self, weekday: Weekday) -> u8 {
        let n = match self {
            WeekSystem::Mmwr => weekday.number_from_sunday(),
            WeekSystem::Iso => weekday.number_from_monday(),
        };
        n as u8
    }

    /// Returns the lowercase name used by `Display` and `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            WeekSystem::Mmwr => "mmwr",
            WeekSystem::Iso => "iso",
        }
    }
}

impl fmt::Display for WeekSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeekSystem {
    type Err = EpiweekError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mmwr" | "cdc" => Ok(WeekSystem::Mmwr),
            "iso" => Ok(WeekSystem::Iso),
            _ => Err(EpiweekError::UnknownSystem {
                name: s.to_string(),
            }),
        }
    }
}

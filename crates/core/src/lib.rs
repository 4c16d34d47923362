//! # epiweek-core
//!
//! Conversion between calendar dates and epidemiological weeks under the
//! MMWR (CDC, Sunday-start) and ISO-8601 (Monday-start) conventions.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["year_start(year, system)"] --> B["week_count(year, system)"]
//!     A --> C["EpiWeek::to_date()"]
//!     A --> D["EpiWeek::from_date()"]
//!     B --> E["diff_week / apply_week_diff"]
//!     B --> F["iter_weeks()"]
//!     C --> G["iter_dates()"]
//! ```
//!
//! Everything derives from [`year_start`]: the date of day 1 of week 1 of an
//! epi-year. [`week_count`] is the distance between two consecutive starts
//! and is memoised in a process-wide [`WeekCountCache`].
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use epiweek_core::{EpiWeek, WeekSystem};
//!
//! let date = NaiveDate::from_ymd_opt(2016, 12, 27).unwrap();
//! let week = EpiWeek::from_date(date, WeekSystem::Mmwr).unwrap();
//! assert_eq!(week.to_string(), "201652");
//! assert_eq!(week.day(), 3); // Tuesday
//!
//! let later = week.shifted(56).unwrap();
//! assert_eq!(later.to_compact(), 201804);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `system` | `WeekSystem` and weekday numbering |
//! | `year_start` | First day of week 1 |
//! | `week_count` | Weeks per epi-year and its cache |
//! | `week` | `EpiWeek` conversions and comparison |
//! | `arithmetic` | Week differences and offsets |
//! | `dates` | Day and week iterators |
//! | `options` | Options-style constructor input |
//! | `error` | Error types |

mod arithmetic;
mod dates;
mod error;
mod options;
mod system;
mod week;
mod week_count;
mod year_start;

pub use dates::{WeekDates, YearWeeks, iter_weeks};
pub use error::EpiweekError;
pub use options::EpiWeekOptions;
pub use system::WeekSystem;
pub use week::EpiWeek;
pub use week_count::{WeekCountCache, week_count};
pub use year_start::year_start;

//! Construction options for [`crate::EpiWeek::with_options`].

use crate::system::WeekSystem;

/// Optional settings for building an [`crate::EpiWeek`].
///
/// # Example
///
/// ```
/// use epiweek_core::{EpiWeek, EpiWeekOptions, WeekSystem};
///
/// let opts = EpiWeekOptions::new().with_system(WeekSystem::Iso).with_day(3);
/// let week = EpiWeek::with_options(2024, 2, opts);
/// assert_eq!(week.day(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpiWeekOptions {
    system: WeekSystem,
    day: u8,
}

impl EpiWeekOptions {
    /// Creates options with defaults: `system = Mmwr`, `day = 1`.
    pub fn new() -> Self {
        Self {
            system: WeekSystem::Mmwr,
            day: 1,
        }
    }

    /// Sets the week numbering system.
    pub fn with_system(mut self, system: WeekSystem) -> Self {
        self.system = system;
        self
    }

    /// Sets the day of week (1..=7 in the chosen system; not validated).
    pub fn with_day(mut self, day: u8) -> Self {
        self.day = day;
        self
    }

    /// Returns the week numbering system.
    pub fn system(&self) -> WeekSystem {
        self.system
    }

    /// Returns the day of week.
    pub fn day(&self) -> u8 {
        self.day
    }
}

impl Default for EpiWeekOptions {
    fn default() -> Self {
        Self::new()
    }
}

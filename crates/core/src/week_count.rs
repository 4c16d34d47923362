//! Number of weeks in an epi-year, memoised per `(year, system)`.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::trace;

use crate::error::EpiweekError;
use crate::system::WeekSystem;
use crate::year_start::year_start;

/// Process-wide cache used by [`week_count`] and every [`crate::EpiWeek`]
/// operation. Lives for the whole process; tests may [`WeekCountCache::clear`] it.
static GLOBAL: Lazy<WeekCountCache> = Lazy::new(WeekCountCache::new);

/// Memo table of weeks-per-year keyed by `(year, system)`.
///
/// Entries are write-once: a value is a pure function of its key, so two
/// threads racing on the same miss both compute the same count and the second
/// insert is a no-op.
#[derive(Debug, Default)]
pub struct WeekCountCache {
    counts: RwLock<HashMap<(i32, WeekSystem), u8>>,
}

impl WeekCountCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide cache.
    pub fn global() -> &'static WeekCountCache {
        &GLOBAL
    }

    /// Returns the number of weeks (52 or 53) in `year` under `system`,
    /// computing and storing it on a miss.
    ///
    /// # Errors
    ///
    /// Returns [`EpiweekError::DateOutOfRange`] if the start of `year` or of
    /// `year + 1` cannot be represented.
    pub fn week_count(&self, year: i32, system: WeekSystem) -> Result<u8, EpiweekError> {
        if let Some(&n) = self.counts.read().get(&(year, system)) {
            return Ok(n);
        }
        let n = compute_week_count(year, system)?;
        trace!(year, %system, weeks = n, "week count cache miss");
        self.counts.write().entry((year, system)).or_insert(n);
        Ok(n)
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.counts.read().len()
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.counts.read().is_empty()
    }

    /// Drops every cached entry.
    pub fn clear(&self) {
        self.counts.write().clear();
    }
}

/// Returns the number of weeks (52 or 53) in `year` under `system`, using the
/// process-wide cache.
///
/// # Examples
///
/// ```
/// use epiweek_core::{WeekSystem, week_count};
///
/// assert_eq!(week_count(2014, WeekSystem::Mmwr).unwrap(), 53);
/// assert_eq!(week_count(2024, WeekSystem::Iso).unwrap(), 52);
/// ```
pub fn week_count(year: i32, system: WeekSystem) -> Result<u8, EpiweekError> {
    WeekCountCache::global().week_count(year, system)
}

fn compute_week_count(year: i32, system: WeekSystem) -> Result<u8, EpiweekError> {
    let next_year = year
        .checked_add(1)
        .ok_or(EpiweekError::DateOutOfRange {
            year: i64::from(year) + 1,
        })?;
    let days = (year_start(next_year, system)? - year_start(year, system)?).num_days();
    Ok((days as f64 / 7.0).round() as u8)
}

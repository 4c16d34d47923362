//! Pure conversion functions: command-line strings and config -> library types.

use anyhow::{Context, Result};
use chrono::NaiveDate;

use epiweek_core::{EpiWeek, WeekSystem};

use crate::config::EpiweekConfig;

/// Picks the week system: the command-line value wins over the config file.
pub fn resolve_system(cli: Option<&str>, config: &EpiweekConfig) -> Result<WeekSystem> {
    match cli {
        Some(name) => name
            .parse::<WeekSystem>()
            .with_context(|| format!("invalid --system {name:?}")),
        None => Ok(config.system),
    }
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid date {s:?} (expected YYYY-MM-DD)"))
}

/// Parses a `yyyyww` epiweek in the given system.
pub fn parse_week(s: &str, system: WeekSystem) -> Result<EpiWeek> {
    let mmwr: EpiWeek = s.parse()?;
    Ok(EpiWeek::new(mmwr.year(), mmwr.week(), system))
}

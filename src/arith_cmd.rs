//! Week arithmetic commands.

use anyhow::Result;

use epiweek_core::WeekSystem;

use crate::cli::{DiffArgs, ShiftArgs};
use crate::convert;

/// Prints `first - second` in whole weeks.
pub fn diff(args: DiffArgs, system: WeekSystem) -> Result<()> {
    let first = convert::parse_week(&args.first, system)?;
    let second = convert::parse_week(&args.second, system)?;
    println!("{}", first.diff_week(&second)?);
    Ok(())
}

/// Prints the epiweek `delta` weeks away.
pub fn shift(args: ShiftArgs, system: WeekSystem) -> Result<()> {
    let mut week = convert::parse_week(&args.week, system)?;
    week.apply_week_diff(args.delta)?;
    println!("{week}");
    Ok(())
}
